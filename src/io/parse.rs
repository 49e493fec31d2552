//! Custom input parsing with user-facing validation messages

use crate::io::configuration::{MAX_ELEMENTS, MAX_VALUE, MIN_VALUE};
use crate::io::error::ValidationError;
use crate::model::Sequence;

/// Bounds applied when reading custom input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    /// Maximum number of values
    pub max_elements: usize,
    /// Smallest accepted value
    pub min_value: u32,
    /// Largest accepted value
    pub max_value: u32,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_elements: MAX_ELEMENTS,
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
        }
    }
}

/// Parse a comma separated list of values
///
/// Whitespace around tokens is ignored and a single trailing comma is
/// tolerated. Every other empty token counts as non-numeric.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found, checking in order: empty
/// input, token syntax, value range, element count.
pub fn parse_custom_sequence(
    text: &str,
    limits: &InputLimits,
) -> Result<Sequence, ValidationError> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed);
    if trimmed.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    let values = trimmed
        .split(',')
        .map(|token| parse_value(token, limits))
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() > limits.max_elements {
        return Err(ValidationError::TooManyElements {
            count: values.len(),
            max: limits.max_elements,
        });
    }

    Ok(Sequence::new(values))
}

/// Parse the value a search page should look for
///
/// # Errors
///
/// Returns [`ValidationError::MissingTarget`] for blank input, otherwise
/// the same token errors as [`parse_custom_sequence`].
pub fn parse_target(text: &str, limits: &InputLimits) -> Result<u32, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::MissingTarget);
    }
    parse_value(text, limits)
}

fn parse_value(token: &str, limits: &InputLimits) -> Result<u32, ValidationError> {
    let token = token.trim();
    let value: i64 = token.parse().map_err(|_| ValidationError::NonNumeric {
        token: token.to_string(),
    })?;

    if value < i64::from(limits.min_value) || value > i64::from(limits.max_value) {
        return Err(ValidationError::OutOfRange {
            value,
            min: limits.min_value,
            max: limits.max_value,
        });
    }

    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        value,
        min: limits.min_value,
        max: limits.max_value,
    })
}
