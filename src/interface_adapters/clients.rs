use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::domain::{TokenExchangeForm, UpstreamError, UpstreamProvider};

// The clients defined here are for reqwest clients to communicate with external services.
// Thin wrapper around reqwest for the proxied Hostaway API. One shared client
// carries the configured timeouts for every call.
#[derive(Clone)]
pub struct HostawayClient {
    http: Client,
    base_url: String,
}

impl HostawayClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    // Keep upstream status/body so handlers can preserve 4xx semantics.
    async fn read_json(res: reqwest::Response) -> Result<Value, UpstreamError> {
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        res.json::<Value>()
            .await
            .map_err(|err| UpstreamError::Decode(err.to_string()))
    }
}

#[async_trait]
impl UpstreamProvider for HostawayClient {
    async fn exchange_token(&self, form: &TokenExchangeForm) -> Result<Value, UpstreamError> {
        // Compose the upstream URL and POST the credentials as a form body.
        let url = format!("{}/accessTokens", self.base_url);
        let res = self
            .http
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;

        Self::read_json(res).await
    }

    async fn fetch_reviews(&self, authorization: &str) -> Result<Value, UpstreamError> {
        // Forward the caller's Authorization header verbatim.
        let url = format!("{}/reviews", self.base_url);
        let res = self
            .http
            .get(url)
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;

        Self::read_json(res).await
    }
}
