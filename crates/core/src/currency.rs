//! Currency codes, exchange rates, and commission arithmetic.
//!
//! Tour prices are stored in minor units (cents) of [`BASE_CURRENCY`]. Each
//! display currency carries an exchange rate relative to the base and a
//! commission expressed in basis points that is added on top.

use crate::error::CoreError;

/// Currency all stored prices are denominated in.
pub const BASE_CURRENCY: &str = "USD";

/// 100% expressed in basis points.
pub const MAX_COMMISSION_BPS: i32 = 10_000;

/// Validate an ISO 4217 style code: exactly three ASCII uppercase letters.
pub fn validate_currency_code(code: &str) -> Result<(), CoreError> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid currency code '{code}'. Must be three uppercase letters"
        )))
    }
}

/// Validate an exchange rate: finite and strictly positive.
pub fn validate_exchange_rate(rate: f64) -> Result<(), CoreError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid exchange rate {rate}. Must be a positive number"
        )))
    }
}

/// Validate a commission in basis points (`0..=10000`).
pub fn validate_commission_bps(bps: i32) -> Result<(), CoreError> {
    if (0..=MAX_COMMISSION_BPS).contains(&bps) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid commission {bps} bps. Must be between 0 and {MAX_COMMISSION_BPS}"
        )))
    }
}

/// Price in the target currency's minor units, commission included.
///
/// `round(base_cents * exchange_rate * (1 + commission_bps / 10000))`,
/// rounding half away from zero.
pub fn quote_price(base_cents: i64, exchange_rate: f64, commission_bps: i32) -> i64 {
    let multiplier = 1.0 + f64::from(commission_bps) / f64::from(MAX_COMMISSION_BPS);
    (base_cents as f64 * exchange_rate * multiplier).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_code_format() {
        assert!(validate_currency_code("EUR").is_ok());
        assert!(validate_currency_code("eur").is_err());
        assert!(validate_currency_code("EURO").is_err());
        assert!(validate_currency_code("E1R").is_err());
    }

    #[test]
    fn exchange_rate_must_be_positive() {
        assert!(validate_exchange_rate(0.92).is_ok());
        assert!(validate_exchange_rate(0.0).is_err());
        assert!(validate_exchange_rate(-1.0).is_err());
        assert!(validate_exchange_rate(f64::NAN).is_err());
        assert!(validate_exchange_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn commission_range() {
        assert!(validate_commission_bps(0).is_ok());
        assert!(validate_commission_bps(MAX_COMMISSION_BPS).is_ok());
        assert!(validate_commission_bps(-1).is_err());
        assert!(validate_commission_bps(10_001).is_err());
    }

    #[test]
    fn quote_adds_commission() {
        assert_eq!(quote_price(10_000, 1.0, 1_000), 11_000);
        assert_eq!(quote_price(10_000, 1.0, 0), 10_000);
    }

    #[test]
    fn quote_converts_and_rounds() {
        // 49.99 USD at 0.5 with 2.5% commission = 25.619875 -> 25.62
        assert_eq!(quote_price(4_999, 0.5, 250), 2_562);
    }
}
