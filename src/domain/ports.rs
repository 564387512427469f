use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::UpstreamError;

// The serialization within this layer is a dependency leak, but its a pragmatic approach
// Credentials forwarded to the upstream token endpoint as a form body.
#[derive(Debug, Clone, Serialize)]
pub struct TokenExchangeForm {
    pub grant_type: String,
    pub client_id: String,
    pub client_secret: String,
    pub scope: String,
}

// The handlers depend on this trait, not the concrete reqwest client.
// Dependencies point inwards to the domain layer.
#[async_trait]
pub trait UpstreamProvider: Send + Sync {
    async fn exchange_token(&self, form: &TokenExchangeForm) -> Result<Value, UpstreamError>;
    async fn fetch_reviews(&self, authorization: &str) -> Result<Value, UpstreamError>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}
