use axum::extract::Request;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::{Claims, bearer_token, decode_claims};

// Claims decoded from the request's bearer token, inserted into request
// extensions before handler dispatch. `None` when no token was presented.
// Read-only for downstream handlers.
#[derive(Clone, Debug, Default)]
pub struct RequestClaims(pub Option<Claims>);

pub async fn decode_request_claims(mut request: Request, next: Next) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = bearer_token(header);
    let claims = if token.is_empty() {
        None
    } else {
        Some(decode_claims(&token))
    };

    request.extensions_mut().insert(RequestClaims(claims));
    next.run(request).await
}
