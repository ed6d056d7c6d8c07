use thiserror::Error;

/// Failures that leave no structured answer to reconcile.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form fields could not be encoded")]
    Encode,
    #[error("request failed: {0}")]
    Transport(#[source] gloo_net::Error),
    #[error("response was not a submission result: {0}")]
    Decode(#[from] serde_json::Error),
}
