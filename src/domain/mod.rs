mod claims;
mod errors;
mod ports;
mod reviews;

// Re-export the domain boundary types and ports.
pub use claims::{Claims, bearer_token, decode_claims};
pub use errors::UpstreamError;
pub use ports::{Clock, TokenExchangeForm, UpstreamProvider};
pub use reviews::{CategoryRating, Review, ReviewBatch, ReviewTemplateSet};
