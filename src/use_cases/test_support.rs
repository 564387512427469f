use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::domain::{Clock, TokenExchangeForm, UpstreamError, UpstreamProvider};

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    pub(crate) fn at_epoch(seconds: i64) -> Self {
        Self(
            Utc.timestamp_opt(seconds, 0)
                .single()
                .expect("valid epoch seconds"),
        )
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

// Canned behavior for one stubbed upstream endpoint.
#[derive(Clone)]
pub(crate) enum StubResponse {
    Payload(Value),
    Status(u16, &'static str),
    Transport,
}

impl StubResponse {
    fn produce(&self) -> Result<Value, UpstreamError> {
        match self {
            StubResponse::Payload(value) => Ok(value.clone()),
            StubResponse::Status(status, body) => Err(UpstreamError::Status {
                status: *status,
                body: (*body).to_string(),
            }),
            StubResponse::Transport => {
                Err(UpstreamError::Transport("connection refused".to_string()))
            }
        }
    }
}

// Recording upstream stub for use-case and route tests.
pub(crate) struct StubUpstream {
    reviews: StubResponse,
    token: StubResponse,
    seen_authorization: Arc<Mutex<Vec<String>>>,
}

impl StubUpstream {
    pub(crate) fn with_reviews(payload: Value) -> Self {
        Self::new(
            StubResponse::Payload(payload),
            StubResponse::Transport,
        )
    }

    pub(crate) fn failing_reviews(status: u16, body: &'static str) -> Self {
        Self::new(StubResponse::Status(status, body), StubResponse::Transport)
    }

    pub(crate) fn unreachable_reviews() -> Self {
        Self::new(StubResponse::Transport, StubResponse::Transport)
    }

    pub(crate) fn with_token_response(payload: Value) -> Self {
        Self::new(StubResponse::Transport, StubResponse::Payload(payload))
    }

    pub(crate) fn failing_token(status: u16, body: &'static str) -> Self {
        Self::new(StubResponse::Transport, StubResponse::Status(status, body))
    }

    fn new(reviews: StubResponse, token: StubResponse) -> Self {
        Self {
            reviews,
            token,
            seen_authorization: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn seen_authorization(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.seen_authorization)
    }
}

#[async_trait]
impl UpstreamProvider for StubUpstream {
    async fn exchange_token(&self, _form: &TokenExchangeForm) -> Result<Value, UpstreamError> {
        self.token.produce()
    }

    async fn fetch_reviews(&self, authorization: &str) -> Result<Value, UpstreamError> {
        self.seen_authorization
            .lock()
            .expect("authorization log poisoned")
            .push(authorization.to_string());
        self.reviews.produce()
    }
}
