use std::sync::Arc;

use chrono::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::domain::{Claims, Clock, ReviewBatch, ReviewTemplateSet};

const SURNAMES: [&str; 4] = ["Smith", "Johnson", "Williams", "Brown"];
const DEFAULT_SEED_SOURCE: &str = "default-seed";
const MAX_SUBMITTED_AGE_DAYS: i64 = 730;

// Derive the generator seed from request claims. Same claims (or absence of
// claims) always yield the same seed, so a caller keeps getting the same
// synthetic batch.
pub fn derive_seed(claims: Option<&Claims>) -> u64 {
    let secret_id = claims
        .and_then(|claims| claims.get("secretId"))
        .map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| DEFAULT_SEED_SOURCE.to_string());

    let digest = Sha256::digest(secret_id.as_bytes());
    // First 16 hex characters of the digest, reduced to keep seeds compact.
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head) % 1_000_000_000
}

// Seeded mock review generation with injected dependencies.
pub struct GenerateReviewsUseCase<C> {
    pub clock: C,
    pub templates: Arc<ReviewTemplateSet>,
}

impl<C> GenerateReviewsUseCase<C>
where
    C: Clock,
{
    // Produce `count` reviews cloned from the templates. All draws come from
    // a single RNG stream in a fixed per-record order, so one seed always
    // reproduces the same batch.
    pub fn execute(&self, seed: u64, count: Option<usize>) -> ReviewBatch {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = count.unwrap_or_else(|| rng.random_range(5..=15));
        let now = self.clock.now_utc();
        let templates = self.templates.records();

        let mut result = Vec::with_capacity(count);
        for _ in 0..count {
            let mut review = templates[rng.random_range(0..templates.len())].clone();

            review.id = rng.random_range(1000..=9999);
            review.rating = Some(rng.random_range(1..=10));
            for category in &mut review.review_category {
                category.rating = rng.random_range(1..=10);
            }

            let offset_days = rng.random_range(0..=MAX_SUBMITTED_AGE_DAYS);
            review.submitted_at = (now - Duration::days(offset_days))
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();

            let first_name = review
                .guest_name
                .split_whitespace()
                .next()
                .unwrap_or("Guest");
            let surname = SURNAMES[rng.random_range(0..SURNAMES.len())];
            review.guest_name = format!("{first_name} {surname}");

            result.push(review);
        }

        let count = result.len();
        ReviewBatch {
            status: "success".to_string(),
            result,
            count,
            offset: None,
        }
    }
}
