//! Error types shared by the growth and period engines

use thiserror::Error;

/// Errors surfaced by engine operations
///
/// Both engines are total over their documented domains; these variants cover
/// inputs outside those domains. Nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Input outside the documented domain (non-finite values, negative
    /// amounts, out-of-range months)
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Projection horizon beyond the allocation cap
    #[error("projection horizon of {months} months exceeds the {max} month cap")]
    HorizonTooLong { months: u32, max: u32 },
}
