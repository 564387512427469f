use serde::{Deserialize, Serialize};

// Form payload accepted by the token exchange endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenExchangeRequest {
    pub grant_type: String,
    pub client_id: String,
    pub client_secret: String,
    pub scope: String,
}

// Welcome payload for the root route.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
