//! Validation utilities for field element encodings

use super::{Error, Result};

/// Validate that an output buffer can hold `required` bytes
#[inline(always)]
pub fn buffer_capacity(context: &'static str, actual: usize, required: usize) -> Result<()> {
    if actual < required {
        return Err(Error::BufferTooSmall {
            context,
            required,
            actual,
        });
    }
    Ok(())
}

/// Validate an exact input length
#[inline(always)]
pub fn exact_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::format(context, "input has the wrong length"));
    }
    Ok(())
}

/// Validate a non-empty input of at most `max` units
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual == 0 {
        return Err(Error::format(context, "input is empty"));
    }
    if actual > max {
        return Err(Error::Overflow {
            context,
            max,
            actual,
        });
    }
    Ok(())
}
