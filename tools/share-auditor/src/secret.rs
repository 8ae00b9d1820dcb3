//! Parsing of secrets written as text.

use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// What to do with a secret that has a non-zero fractional part.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonIntegerPolicy {
    /// Refuse the secret.
    #[default]
    Reject,

    /// Drop the fractional part.
    Truncate,
}

/// A secret could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    /// The text is not a decimal number.
    #[error("secret {0:?} is not a number")]
    NotANumber(String),

    /// The secret is negative.
    #[error("secret {0:?} is negative")]
    Negative(String),

    /// The secret doesn't fit in 64 bits.
    #[error("secret {0:?} does not fit in 64 bits")]
    TooLarge(String),

    /// The secret has a fractional part and the policy rejects those.
    #[error("secret {0:?} is not an integer")]
    NotAnInteger(String),
}

/// A secret as written in a configuration file, before the [NonIntegerPolicy] is applied.
///
/// Integral decimals such as `7.0` are plain integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretText {
    text: String,
    integral: u64,
    has_fraction: bool,
}

impl SecretText {
    /// Applies the policy and returns the secret.
    pub fn resolve(&self, policy: NonIntegerPolicy) -> Result<u64, SecretError> {
        match (self.has_fraction, policy) {
            (true, NonIntegerPolicy::Reject) => Err(SecretError::NotAnInteger(self.text.clone())),
            _ => Ok(self.integral),
        }
    }
}

impl FromStr for SecretText {
    type Err = SecretError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if trimmed.starts_with('-') {
            return Err(SecretError::Negative(trimmed.to_string()));
        }
        let (integral, fractional) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if integral.is_empty() || !is_digits(integral) || !is_digits(fractional) {
            return Err(SecretError::NotANumber(trimmed.to_string()));
        }
        let has_fraction = fractional.chars().any(|c| c != '0');
        let integral = integral.parse().map_err(|_| SecretError::TooLarge(trimmed.to_string()))?;
        Ok(Self { text: trimmed.to_string(), integral, has_fraction })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("123", NonIntegerPolicy::Reject, Ok(123))]
    #[case(" 42 ", NonIntegerPolicy::Reject, Ok(42))]
    #[case("7.0", NonIntegerPolicy::Reject, Ok(7))]
    #[case("7.", NonIntegerPolicy::Reject, Ok(7))]
    #[case("6.33", NonIntegerPolicy::Reject, Err(SecretError::NotAnInteger("6.33".into())))]
    #[case("6.33", NonIntegerPolicy::Truncate, Ok(6))]
    #[case("18446744073709551615", NonIntegerPolicy::Reject, Ok(u64::MAX))]
    fn resolution(#[case] text: &str, #[case] policy: NonIntegerPolicy, #[case] expected: Result<u64, SecretError>) {
        let secret: SecretText = text.parse().unwrap();
        assert_eq!(secret.resolve(policy), expected);
    }

    #[rstest]
    #[case("-5", SecretError::Negative("-5".into()))]
    #[case("abc", SecretError::NotANumber("abc".into()))]
    #[case(".5", SecretError::NotANumber(".5".into()))]
    #[case("1e3", SecretError::NotANumber("1e3".into()))]
    #[case("", SecretError::NotANumber("".into()))]
    #[case("18446744073709551616", SecretError::TooLarge("18446744073709551616".into()))]
    fn parse_errors(#[case] text: &str, #[case] expected: SecretError) {
        assert_eq!(text.parse::<SecretText>(), Err(expected));
    }
}
