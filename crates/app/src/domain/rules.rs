//! Field rules shared by the draft validators.

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use rust_decimal::Decimal;

#[expect(clippy::expect_used, reason = "pattern is a literal")]
static BARCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}\d{4}$").expect("barcode pattern compiles"));

#[expect(clippy::expect_used, reason = "pattern is a literal")]
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

const PASSWORD_SPECIALS: &str = "@$!%*?&";

const PASSWORD_MIN_LEN: usize = 4;

/// Whether `value` is empty or whitespace only.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Outcome of reading a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeric<T> {
    /// Nothing entered.
    Blank,

    /// Something entered that is not a number of the expected kind.
    Malformed,

    /// A number.
    Value(T),
}

/// Reads a whole number, e.g. a quantity.
#[must_use]
pub fn whole_number(value: &str) -> Numeric<i64> {
    number(value)
}

/// Reads a decimal number, e.g. a price.
#[must_use]
pub fn decimal(value: &str) -> Numeric<Decimal> {
    number(value)
}

fn number<T: FromStr>(value: &str) -> Numeric<T> {
    let value = value.trim();

    if value.is_empty() {
        return Numeric::Blank;
    }

    value.parse().map_or(Numeric::Malformed, Numeric::Value)
}

/// Four uppercase ASCII letters followed by four digits.
#[must_use]
pub fn is_barcode(value: &str) -> bool {
    BARCODE.is_match(value)
}

/// Something, an `@`, something, a dot, something; no whitespace.
#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// At least four characters drawn from ASCII letters, digits and `@$!%*?&`,
/// with at least one of each class.
#[must_use]
pub fn is_strong_password(value: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c);

    value.chars().count() >= PASSWORD_MIN_LEN
        && value.chars().all(allowed)
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}
