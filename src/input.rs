//! Caller-side validation of raw inputs. The calculators assume valid
//! input and never re-validate; every front-end must pass its arguments
//! through these checks before touching the core.

use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unit count must be positive")]
    InvalidUnitCount,
    #[error("sell percentage must be greater than 0 and at most 100: {0}")]
    InvalidPercent(Decimal),
    #[error("{name} must not be negative: {value}")]
    NegativePrice { name: &'static str, value: Decimal },
    #[error("{name} must be positive: {value}")]
    NonPositivePrice { name: &'static str, value: Decimal },
    #[error("{name} must be positive: {value}")]
    InvalidRate { name: &'static str, value: Decimal },
}

/// Unit counts must be positive
pub fn validate_unit_count(units: u64) -> Result<u64, ValidationError> {
    if units == 0 {
        return Err(ValidationError::InvalidUnitCount);
    }
    Ok(units)
}

/// Requested sell percentage must lie in (0, 100]
pub fn validate_percent(percent: Decimal) -> Result<Decimal, ValidationError> {
    if percent <= Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(ValidationError::InvalidPercent(percent));
    }
    Ok(percent)
}

/// Exercise price and fair-market value may be zero but never negative
pub fn validate_grant_price(
    name: &'static str,
    value: Decimal,
) -> Result<Decimal, ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativePrice { name, value });
    }
    Ok(value)
}

/// The buyback price must be strictly positive: the allocation resolver
/// divides monetary caps by it.
pub fn validate_buyback_price(value: Decimal) -> Result<Decimal, ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice {
            name: "buyback price",
            value,
        });
    }
    Ok(value)
}

/// Conversion rates and monetary caps must be strictly positive
pub fn validate_rate(name: &'static str, value: Decimal) -> Result<Decimal, ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::InvalidRate { name, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_units_rejected() {
        assert_eq!(validate_unit_count(0), Err(ValidationError::InvalidUnitCount));
        assert_eq!(validate_unit_count(1), Ok(1));
    }

    #[test]
    fn percent_bounds() {
        assert!(validate_percent(Decimal::ZERO).is_err());
        assert!(validate_percent(dec!(-5)).is_err());
        assert!(validate_percent(dec!(100.01)).is_err());
        assert_eq!(validate_percent(dec!(0.5)), Ok(dec!(0.5)));
        assert_eq!(validate_percent(dec!(100)), Ok(dec!(100)));
    }

    #[test]
    fn grant_prices_may_be_zero() {
        assert_eq!(
            validate_grant_price("exercise price", Decimal::ZERO),
            Ok(Decimal::ZERO)
        );
        assert_eq!(
            validate_grant_price("exercise price", dec!(-1)),
            Err(ValidationError::NegativePrice {
                name: "exercise price",
                value: dec!(-1)
            })
        );
    }

    #[test]
    fn buyback_price_must_be_positive() {
        assert!(validate_buyback_price(Decimal::ZERO).is_err());
        assert!(validate_buyback_price(dec!(-10)).is_err());
        assert_eq!(validate_buyback_price(dec!(60)), Ok(dec!(60)));
    }

    #[test]
    fn rates_must_be_positive() {
        assert!(validate_rate("conversion rate", Decimal::ZERO).is_err());
        assert_eq!(validate_rate("conversion rate", dec!(83.5)), Ok(dec!(83.5)));
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = validate_rate("monetary cap", dec!(-2)).unwrap_err();
        assert_eq!(err.to_string(), "monetary cap must be positive: -2");
    }
}
