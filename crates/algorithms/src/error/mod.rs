//! Error handling for the encoding, hashing and curve primitives

use alloc::borrow::Cow;
use core::fmt;

use blsprims_api::{Error as CoreError, Result as CoreResult};

/// The error type for blsprims primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Integer does not fit the requested fixed-width encoding
    Range {
        /// Operation that rejected the value
        context: &'static str,
        /// Description of the bound that was exceeded
        message: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected (or maximum) length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// A value lies outside the domain of the operation
    Domain {
        /// Operation that rejected the value
        context: &'static str,
        /// Why the value was rejected
        message: Cow<'static, str>,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Range error
    pub fn range<M: Into<Cow<'static, str>>>(context: &'static str, message: M) -> Self {
        Error::Range {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a Domain error
    pub fn domain<M: Into<Cow<'static, str>>>(context: &'static str, message: M) -> Self {
        Error::Domain {
            context,
            message: message.into(),
        }
    }
}

/// Result type for blsprims primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Range { context, message } => {
                write!(f, "Value out of range for {}: {}", context, message)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Domain { context, message } => {
                write!(f, "Domain error in {}: {}", context, message)
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Range { context, message } => CoreError::Range { context, message },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Domain { context, message } => CoreError::Domain { context, message },
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason,
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use blsprims_api::error::ResultExt;

pub mod validate;
