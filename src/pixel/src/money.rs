use std::str::FromStr;

use rust_decimal::Decimal;

record! {
    /// Monetary value with currency.
    ///
    /// `amount` travels as an IEEE-754 double and carries the usual binary
    /// rounding. Use [`Money::to_decimal`] before doing currency arithmetic.
    pub struct Money {
        pub amount: f64,
        /// Three-letter code, for example `USD`. Legacy and non-standard codes
        /// are passed through unchecked.
        pub currency_code: String,
    }
}

impl Money {
    pub fn new(amount: f64, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }

    /// Decimal view of `amount` using the shortest representation of the
    /// double. `None` for NaN, infinities and magnitudes outside `Decimal`.
    pub fn to_decimal(&self) -> Option<Decimal> {
        // f64's Display is the shortest string that reads back to the same double
        Decimal::from_str(&self.amount.to_string()).ok()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::Money;
    use crate::codec::encode_to_string;

    #[test]
    fn test_to_decimal() {
        let money = Money::new(19.99, "CAD");
        assert_eq!(money.to_decimal(), Some(Decimal::from_str("19.99").unwrap()));

        let sum = Money::new(0.1, "USD").to_decimal().unwrap() + Money::new(0.2, "USD").to_decimal().unwrap();
        assert_eq!(sum, Decimal::from_str("0.3").unwrap());

        assert_eq!(Money::new(f64::NAN, "USD").to_decimal(), None);
    }

    #[test]
    fn test_encode() {
        assert_eq!(
            encode_to_string(&Money::new(12.5, "EUR")),
            r#"{"amount":12.5,"currencyCode":"EUR"}"#
        );
        assert_eq!(
            encode_to_string(&Money::default()),
            r#"{"amount":0.0,"currencyCode":""}"#
        );
    }
}
