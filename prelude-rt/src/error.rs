use core::num::ParseIntError;
use prelude_rt_macro::ErrorCode;
use thiserror::Error;

/// Recoverable failure of a runtime helper
#[derive(Clone, Debug, Error, ErrorCode, Eq, PartialEq)]
pub enum RuntimeError {
    #[error("invalid integer literal {text:?}: {source}")]
    InvalidInteger {
        text: String,
        #[source]
        source: ParseIntError,
    },
    #[error("text contains a nul byte at position {position}")]
    InteriorNul { position: usize },
    #[error("{code_point:#x} is not a valid character")]
    InvalidChar { code_point: u32 },
    /// Raised by [`report_error`]; displays as the bare message
    #[error("{0}")]
    Reported(String),
}

/// Raises a recoverable error carrying `message`.
///
/// Never returns `Ok`; meant to be returned directly or propagated with `?`.
pub fn report_error<T, M>(message: M) -> Result<T, RuntimeError>
where
    M: Into<String>,
{
    let message = message.into();
    tracing::debug!(reason = %message, "runtime error reported");
    Err(RuntimeError::Reported(message))
}
