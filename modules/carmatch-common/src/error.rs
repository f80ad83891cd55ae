use thiserror::Error;

/// Pipeline error taxonomy. Every variant surfaces to the immediate
/// caller unchanged; no layer retries or falls back. `NotFound` is a
/// search outcome, not a system fault, so callers can render it as
/// "no match" instead of a failure.
#[derive(Error, Debug)]
pub enum CarMatchError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Model invocation error: {0}")]
    ModelInvocation(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No car found")]
    NotFound,
}
