use std::fmt;

// Failures raised by the upstream Hostaway port. Status keeps the upstream's
// own response so handlers can preserve 4xx semantics.
#[derive(Debug)]
pub enum UpstreamError {
    Transport(String),
    Status { status: u16, body: String },
    Decode(String),
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Transport(err) => write!(f, "upstream transport error: {err}"),
            UpstreamError::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "upstream error {status}")
                } else {
                    write!(f, "upstream error {status}: {body}")
                }
            }
            UpstreamError::Decode(err) => write!(f, "upstream response decode error: {err}"),
        }
    }
}

impl std::error::Error for UpstreamError {}
