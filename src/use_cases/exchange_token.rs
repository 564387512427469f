use std::sync::Arc;

use serde_json::Value;

use crate::domain::{TokenExchangeForm, UpstreamError, UpstreamProvider};

// Token exchange pass-through with an injected upstream dependency. The
// upstream's answer, success or failure, is the caller's answer.
pub struct ExchangeTokenUseCase {
    pub upstream: Arc<dyn UpstreamProvider>,
}

impl ExchangeTokenUseCase {
    pub async fn execute(&self, form: TokenExchangeForm) -> Result<Value, UpstreamError> {
        self.upstream.exchange_token(&form).await
    }
}
