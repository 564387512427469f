use axum::Extension;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::interface_adapters::middleware::RequestClaims;
use crate::interface_adapters::protocol::ErrorResponse;
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::fetch_reviews::{FetchReviewsUseCase, ReviewsPayload};
use crate::use_cases::generate_reviews::GenerateReviewsUseCase;

#[tracing::instrument(name = "list_reviews", skip_all)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Extension(claims): Extension<RequestClaims>,
    headers: HeaderMap,
) -> Response {
    let Some(authorization) = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                message: "Authorization header is required".to_string(),
            }),
        )
            .into_response();
    };

    let use_case = FetchReviewsUseCase {
        upstream: state.upstream.clone(),
        generator: GenerateReviewsUseCase {
            clock: SystemClock,
            templates: state.templates.clone(),
        },
    };

    // Whether real or synthetic, review listings always answer 200.
    match use_case.execute(authorization, claims.0.as_ref()).await {
        ReviewsPayload::Upstream(payload) => {
            tracing::info!("served upstream reviews.");
            Json(payload).into_response()
        }
        ReviewsPayload::Synthetic(batch) => {
            tracing::info!(count = batch.count, "served synthetic reviews.");
            Json(batch).into_response()
        }
    }
}
