//! StormGlass-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StormGlassError {
    /// No response came back from the provider: connectivity failure,
    /// timeout, or an unreadable body.
    #[error("Unexpected error when trying to communicate to StormGlass: {0}")]
    Request(String),

    /// The provider answered with a non-success status. The body is kept
    /// verbatim for diagnostics.
    #[error("Unexpected error returned by the StormGlass service: Error: {body} Code: {status}")]
    Response { status: u16, body: String },
}

impl StormGlassError {
    /// HTTP status of the provider's reply, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(_) => None,
            Self::Response { status, .. } => Some(*status),
        }
    }
}
