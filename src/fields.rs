// 🔢 Field Parsing - Typed values from receipt strings
// Amounts, dates and times are carried as strings until scoring needs them

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Amount,
    Date,
    Time,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Amount => "amount",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
        }
    }
}

/// A receipt field that could not be read as its expected type.
///
/// Non-fatal: the scoring rule that needed the field contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {input:?} as {}", .kind.as_str())]
pub struct ParseFailure {
    pub kind: FieldKind,
    pub input: String,
}

impl ParseFailure {
    fn new(kind: FieldKind, input: &str) -> Self {
        ParseFailure {
            kind,
            input: input.to_string(),
        }
    }
}

/// Parse a non-negative decimal amount such as "35.35" exactly
pub fn parse_amount(input: &str) -> Result<Decimal, ParseFailure> {
    let amount = Decimal::from_str(input).map_err(|_| ParseFailure::new(FieldKind::Amount, input))?;
    if amount < Decimal::ZERO {
        return Err(ParseFailure::new(FieldKind::Amount, input));
    }
    Ok(amount)
}

pub fn parse_purchase_date(input: &str) -> Result<NaiveDate, ParseFailure> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| ParseFailure::new(FieldKind::Date, input))
}

pub fn parse_purchase_time(input: &str) -> Result<NaiveTime, ParseFailure> {
    NaiveTime::parse_from_str(input, TIME_FORMAT).map_err(|_| ParseFailure::new(FieldKind::Time, input))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_amount_exact() {
        assert_eq!(parse_amount("35.35").unwrap(), Decimal::new(3535, 2));
        assert_eq!(parse_amount("9.00").unwrap(), Decimal::new(900, 2));
        assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        let failure = parse_amount("1.2.3").unwrap_err();
        assert_eq!(failure.kind, FieldKind::Amount);
        assert_eq!(failure.input, "1.2.3");

        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_negative() {
        assert!(parse_amount("-1.00").is_err());
    }

    #[test]
    fn test_parse_purchase_date() {
        let date = parse_purchase_date("2022-03-20").unwrap();
        assert_eq!(date.day(), 20);

        assert!(parse_purchase_date("2022-02-30").is_err());
        assert!(parse_purchase_date("03/20/2022").is_err());
    }

    #[test]
    fn test_parse_purchase_time() {
        let time = parse_purchase_time("14:33").unwrap();
        assert_eq!((time.hour(), time.minute()), (14, 33));

        assert!(parse_purchase_time("25:00").is_err());
        assert!(parse_purchase_time("2pm").is_err());
    }

    #[test]
    fn test_parse_failure_display() {
        let failure = parse_purchase_time("noon").unwrap_err();
        assert_eq!(failure.to_string(), "cannot parse \"noon\" as time");
    }
}
