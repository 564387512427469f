pub mod auth;
pub mod reviews;

use axum::Json;

use crate::interface_adapters::protocol::WelcomeResponse;

// Liveness/welcome message, outside the API prefix.
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the review gateway. API lives under /api/v1.".to_string(),
    })
}
