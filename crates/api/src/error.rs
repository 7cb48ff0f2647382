use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures surfaced to the UI layer. The engine itself never fails; this
/// covers the transport seam in front of it. Callers display and retry,
/// the facade does not retry on its own.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("search transport failed: {0}")]
    Transport(String),

    #[error(transparent)]
    History(#[from] armsref_history::HistoryError),
}
