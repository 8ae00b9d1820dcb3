//! Numbers read exactly as they were written.
//!
//! YAML integers are signed 64-bit values. Anything above `i64::MAX` reaches the deserializer as a float that
//! has already been rounded, so those values are refused and have to be quoted instead.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde_with::DeserializeAs;
use std::{fmt, str::FromStr};

/// Largest magnitude below which every integral float is exact.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Deserializes a value out of its textual form, accepting strings, integers and exactly representable floats.
pub struct ExactText;

/// Deserializes a value out of an unsigned integer, accepting integers, quoted integers and integral floats that
/// are exactly representable.
pub struct ExactInteger;

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, quoted when larger than 9223372036854775807")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if !value.is_finite() || value.abs() > MAX_EXACT_FLOAT {
            return Err(E::invalid_value(Unexpected::Float(value), &self));
        }
        Ok(value.to_string())
    }
}

struct IntegerVisitor;

impl<'de> Visitor<'de> for IntegerVisitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an unsigned integer, quoted when larger than 9223372036854775807")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.trim().parse().map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u64::try_from(value).map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(value)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if value.fract() != 0.0 || !(0.0..=MAX_EXACT_FLOAT).contains(&value) {
            return Err(E::invalid_value(Unexpected::Float(value), &self));
        }
        self.visit_str(&value.to_string())
    }
}

impl<'de, T> DeserializeAs<'de, T> for ExactText
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
        let text = deserializer.deserialize_any(TextVisitor)?;
        text.parse().map_err(de::Error::custom)
    }
}

impl<'de, T> DeserializeAs<'de, T> for ExactInteger
where
    T: TryFrom<u64>,
    T::Error: fmt::Display,
{
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
        let value = deserializer.deserialize_any(IntegerVisitor)?;
        T::try_from(value).map_err(de::Error::custom)
    }
}
