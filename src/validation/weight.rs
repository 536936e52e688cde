use rust_decimal::Decimal;

use super::{Constraint, FieldViolation, Violations};
use crate::constants::pet;

/// Field name used in weight violations
pub const WEIGHT_FIELD: &str = "weight";

/// Smallest accepted weight, inclusive
pub fn min_weight() -> Decimal {
    Decimal::new(pet::MIN_WEIGHT_MANTISSA, pet::WEIGHT_SCALE)
}

/// Largest accepted weight, inclusive
pub fn max_weight() -> Decimal {
    Decimal::new(pet::MAX_WEIGHT_MANTISSA, pet::WEIGHT_SCALE)
}

/// Check a present weight against the DecimalMin, DecimalMax and Digits
/// rules. Every broken rule is reported.
pub fn validate_weight(weight: &Decimal) -> Result<(), Violations> {
    let mut violations = Violations::new();

    let min = min_weight();
    if *weight < min {
        violations.push(
            FieldViolation::new(
                WEIGHT_FIELD,
                Constraint::DecimalMin {
                    value: min,
                    inclusive: true,
                },
            )
            .rejecting(weight),
        );
    }

    let max = max_weight();
    if *weight > max {
        violations.push(
            FieldViolation::new(
                WEIGHT_FIELD,
                Constraint::DecimalMax {
                    value: max,
                    inclusive: true,
                },
            )
            .rejecting(weight),
        );
    }

    let (integer, fraction) = digit_counts(weight);
    if integer > pet::WEIGHT_INTEGER_DIGITS || fraction > pet::WEIGHT_FRACTION_DIGITS {
        violations.push(
            FieldViolation::new(
                WEIGHT_FIELD,
                Constraint::Digits {
                    integer: pet::WEIGHT_INTEGER_DIGITS,
                    fraction: pet::WEIGHT_FRACTION_DIGITS,
                },
            )
            .rejecting(weight),
        );
    }

    violations.into_result()
}

/// Absent weight is always valid.
pub fn validate_optional_weight(weight: Option<&Decimal>) -> Result<(), Violations> {
    match weight {
        Some(weight) => validate_weight(weight),
        None => Ok(()),
    }
}

/// Integer and fraction digit counts, ignoring sign and trailing zeros.
/// `0.5` has no integer digits.
fn digit_counts(value: &Decimal) -> (u32, u32) {
    let normalized = value.abs().normalize();
    let fraction = normalized.scale();

    let integral = normalized.trunc();
    let integer = if integral.is_zero() {
        0
    } else {
        integral.to_string().trim_start_matches('-').len() as u32
    };

    (integer, fraction)
}
