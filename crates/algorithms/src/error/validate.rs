//! Validation utilities for blsprims primitives
//!
//! Each check logs the rejected input at `debug` level before returning the
//! error, so a subscriber sees which precondition tripped.

use super::{Error, Result};
use tracing::debug;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        debug!(parameter = name, reason, "parameter rejected");
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        debug!(context, actual, expected, "length mismatch");
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        debug!(context, actual, max, "length above bound");
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate that a value fits a fixed-width encoding
#[inline(always)]
pub fn range(fits: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !fits {
        debug!(context, message, "value out of range");
        return Err(Error::range(context, message));
    }
    Ok(())
}

/// Validate a domain condition such as the curve equation
#[inline(always)]
pub fn domain(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        debug!(context, message, "domain check failed");
        return Err(Error::domain(context, message));
    }
    Ok(())
}
