//! # Validation Module: Cart-Edge Input Guards
//!
//! Validators for the two raw numbers a cashier can type: quantities and
//! discount percentages. They run **before** any business rule (stock
//! checks, totals) so a nonsense input never reaches the money math.
//!
//! Store mutations deliberately have no validators here. They are total
//! functions; bad input there becomes an audit record, not an error.

use crate::error::ValidationError;

/// Result alias for validation functions.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum discount in basis points (100%).
pub const MAX_DISCOUNT_BPS: u32 = 10_000;

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be at least 1 (a zero-quantity line is a removal, not an edit)
///
/// Stock availability is NOT checked here; the cart checks it against the
/// selected location.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }
    Ok(())
}

/// Validates a discount rate in basis points.
///
/// ## Rules
/// - At most 10,000 bps (100%) - a bill can be free, never negative
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_DISCOUNT_BPS {
        return Err(ValidationError::OutOfRange {
            field: "discount",
            min: 0,
            max: MAX_DISCOUNT_BPS as i64,
        });
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert_eq!(
            validate_quantity(0),
            Err(ValidationError::MustBePositive { field: "quantity" })
        );
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_discount_bps() {
        assert!(validate_discount_bps(0).is_ok());
        assert!(validate_discount_bps(500).is_ok());
        assert!(validate_discount_bps(10_000).is_ok());
        assert_eq!(
            validate_discount_bps(10_001),
            Err(ValidationError::OutOfRange { field: "discount", min: 0, max: 10_000 })
        );
    }
}
