pub mod exchange_token;
pub mod fetch_reviews;
pub mod generate_reviews;

#[cfg(test)]
pub(crate) mod test_support;
