use std::sync::Arc;

use serde_json::Value;

use crate::domain::{Claims, Clock, ReviewBatch, UpstreamError, UpstreamProvider};
use crate::use_cases::generate_reviews::{GenerateReviewsUseCase, derive_seed};

// What the handler serves back. Synthetic batches keep their typed form so
// the handler can log the count it fabricated.
#[derive(Debug)]
pub enum ReviewsPayload {
    Upstream(Value),
    Synthetic(ReviewBatch),
}

// Classification of the upstream listing outcome. The fallback decision is
// an explicit branch on this, never a blanket catch.
enum FetchOutcome {
    Populated(Value),
    EmptyResult,
    Failed(UpstreamError),
}

// Review listing use case: proxy the upstream, fall back to seeded synthetic
// data when it has nothing usable to say. Review requests never hard-fail.
pub struct FetchReviewsUseCase<C> {
    pub upstream: Arc<dyn UpstreamProvider>,
    pub generator: GenerateReviewsUseCase<C>,
}

impl<C> FetchReviewsUseCase<C>
where
    C: Clock,
{
    pub async fn execute(&self, authorization: &str, claims: Option<&Claims>) -> ReviewsPayload {
        match classify(self.upstream.fetch_reviews(authorization).await) {
            FetchOutcome::Populated(payload) => ReviewsPayload::Upstream(payload),
            FetchOutcome::EmptyResult => {
                tracing::info!("upstream returned no reviews, serving synthetic data");
                self.synthesize(claims)
            }
            FetchOutcome::Failed(err) => {
                tracing::warn!(error = %err, "upstream review fetch failed, serving synthetic data");
                self.synthesize(claims)
            }
        }
    }

    fn synthesize(&self, claims: Option<&Claims>) -> ReviewsPayload {
        ReviewsPayload::Synthetic(self.generator.execute(derive_seed(claims), None))
    }
}

// An upstream payload whose `result` is present and empty triggers the
// fallback; a missing or non-array `result` passes through unchanged.
fn classify(outcome: Result<Value, UpstreamError>) -> FetchOutcome {
    match outcome {
        Err(err) => FetchOutcome::Failed(err),
        Ok(payload) => {
            let empty_result = payload
                .get("result")
                .and_then(Value::as_array)
                .is_some_and(Vec::is_empty);

            if empty_result {
                FetchOutcome::EmptyResult
            } else {
                FetchOutcome::Populated(payload)
            }
        }
    }
}
