use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};

use crate::domain::{TokenExchangeForm, UpstreamError};
use crate::interface_adapters::protocol::{ErrorResponse, TokenExchangeRequest};
use crate::interface_adapters::state::AppState;
use crate::use_cases::exchange_token::ExchangeTokenUseCase;

#[tracing::instrument(
    name = "exchange_token",
    skip_all,
    fields(client_id = %body.client_id)
)]
pub async fn exchange_token(
    State(state): State<AppState>,
    Form(body): Form<TokenExchangeRequest>,
) -> Response {
    let use_case = ExchangeTokenUseCase {
        upstream: state.upstream.clone(),
    };

    let form = TokenExchangeForm {
        grant_type: body.grant_type,
        client_id: body.client_id,
        client_secret: body.client_secret,
        scope: body.scope,
    };

    match use_case.execute(form).await {
        Ok(payload) => {
            tracing::info!("token exchange succeeded.");
            Json(payload).into_response()
        }
        Err(UpstreamError::Status { status, body }) => {
            tracing::warn!(status, "upstream rejected the token exchange.");
            upstream_failure(status, body)
        }
        Err(err) => {
            tracing::error!(error = %err, "token exchange never reached upstream.");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    message: "upstream unavailable".to_string(),
                }),
            )
                .into_response()
        }
    }
}

// The upstream's own failure status and body pass through untranslated.
fn upstream_failure(status: u16, body: String) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
