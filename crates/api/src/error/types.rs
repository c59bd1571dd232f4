//! Error type definitions for encoding, hashing and curve operations

use alloc::borrow::Cow;
use core::fmt;

/// Primary error type for blsprims operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An integer does not fit the requested fixed-width encoding
    Range {
        context: &'static str,
        message: Cow<'static, str>,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A value is outside the mathematical domain of the operation
    Domain {
        context: &'static str,
        message: Cow<'static, str>,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: Cow<'static, str>,
    },

    /// Other error
    Other {
        context: &'static str,
        message: Cow<'static, str>,
    },
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Fixed-width encoding overflow (I2OSP, limb range)
    Range,
    /// Protocol length bound exceeded (DST, expansion length)
    Length,
    /// Curve-equation or field-domain violation
    Domain,
    /// Malformed argument
    Parameter,
    /// Anything else
    Other,
}

/// Result type for blsprims operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Range { .. } => ErrorKind::Range,
            Self::InvalidLength { .. } => ErrorKind::Length,
            Self::Domain { .. } => ErrorKind::Domain,
            Self::InvalidParameter { .. } => ErrorKind::Parameter,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Range { message, .. } => Self::Range { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::Domain { message, .. } => Self::Domain { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        match self {
            Self::Range { context, .. } => Self::Range { context, message },
            Self::InvalidLength { .. } => self,
            Self::Domain { context, .. } => Self::Domain { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range { context, message } => {
                write!(f, "Out of range: {}: {}", context, message)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})", context, expected, actual)
            }
            Self::Domain { context, message } => {
                write!(f, "Domain error: {}: {}", context, message)
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter: {}: {}", context, message)
            }
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}
