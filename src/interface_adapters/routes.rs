use axum::routing::{get, post};
use axum::{Router, middleware};

use crate::interface_adapters::handlers::{auth::exchange_token, reviews::list_reviews, root};
use crate::interface_adapters::middleware::decode_request_claims;
use crate::interface_adapters::state::AppState;

pub fn app(state: AppState) -> Router {
    // Versioned API surface; the root welcome route sits outside the prefix.
    let api = Router::new()
        .route("/auth/token", post(exchange_token))
        .route("/reviews", get(list_reviews));

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", api)
        .layer(middleware::from_fn(decode_request_claims))
        .with_state(state)
}
