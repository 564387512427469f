use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Map, Value};

// Claims decoded from a bearer token's payload segment, unverified. Claims
// are only ever read by key, so an open map beats a fixed schema here.
pub type Claims = Map<String, Value>;

// Strip the "Bearer " scheme from an Authorization header value. Anything
// that is not a bearer credential yields the empty string.
pub fn bearer_token(header: Option<&str>) -> String {
    let Some(value) = header else {
        return String::new();
    };

    match value.get(..7) {
        Some(scheme) if scheme.eq_ignore_ascii_case("bearer ") => value[7..].trim().to_string(),
        _ => String::new(),
    }
}

// Decode the payload segment of a JWT without verifying the signature.
// Missing segments, bad base64 and non-object payloads all read as "no
// claims" so callers never have to handle a decode failure.
pub fn decode_claims(token: &str) -> Claims {
    let Some(payload) = token.split('.').nth(1) else {
        return Claims::new();
    };

    let Ok(bytes) = URL_SAFE_NO_PAD.decode(payload) else {
        return Claims::new();
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => map,
        _ => Claims::new(),
    }
}
