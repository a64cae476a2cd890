//! Validation utilities for the Obras Inventory platform
//!
//! Every check used by the create and inline-edit operations of the pages and
//! by the cached material store lives here.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::ValidationError;

// ============================================================================
// Text
// ============================================================================

/// Trim a required text field, rejecting it when nothing is left
pub fn validate_required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed)
}

/// Trim an optional text field; blank input means the field is absent
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ============================================================================
// Numbers
// ============================================================================

/// Validate that an amount is zero or positive
pub fn validate_non_negative(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::Negative { field });
    }
    Ok(())
}

/// Convert a raw floating point input into a decimal, rejecting NaN and infinities
pub fn finite_decimal(field: &'static str, value: f64) -> Result<Decimal, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    Decimal::try_from(value).map_err(|_| ValidationError::NonFinite { field })
}

/// Floor a non-negative quantity to a whole number of units
pub fn whole_quantity(field: &'static str, value: Decimal) -> Result<u32, ValidationError> {
    validate_non_negative(field, value)?;
    value
        .floor()
        .to_u32()
        .ok_or(ValidationError::OutOfRange { field })
}

// ============================================================================
// Arithmetic
// ============================================================================

pub fn add_checked(field: &'static str, a: Decimal, b: Decimal) -> Result<Decimal, ValidationError> {
    a.checked_add(b).ok_or(ValidationError::OutOfRange { field })
}

pub fn sub_checked(field: &'static str, a: Decimal, b: Decimal) -> Result<Decimal, ValidationError> {
    a.checked_sub(b).ok_or(ValidationError::OutOfRange { field })
}

pub fn mul_checked(field: &'static str, a: Decimal, b: Decimal) -> Result<Decimal, ValidationError> {
    a.checked_mul(b).ok_or(ValidationError::OutOfRange { field })
}

/// Validate a work's budget against what has already been spent
pub fn validate_budget(budget: Decimal, spent: Decimal) -> Result<(), ValidationError> {
    validate_non_negative("budget", budget)?;
    validate_non_negative("spent", spent)?;
    if spent > budget {
        return Err(ValidationError::SpentExceedsBudget);
    }
    Ok(())
}
