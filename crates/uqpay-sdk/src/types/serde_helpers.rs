/*
[INPUT]:  Money values sent as strings, numbers, null or empty strings
[OUTPUT]: rust_decimal::Decimal fields without binary floating point
[POS]:    Data layer - serde adapters shared by resource types
[UPDATE]: When the API changes how amounts are encoded
*/

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::{Number, Value};

fn parse_decimal<E: serde::de::Error>(value: Value) -> Result<Option<Decimal>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(raw) if raw.trim().is_empty() => Ok(None),
        Value::String(raw) => Decimal::from_str(raw.trim())
            .or_else(|_| Decimal::from_scientific(raw.trim()))
            .map(Some)
            .map_err(E::custom),
        Value::Number(number) => {
            let raw = number.to_string();
            Decimal::from_str(&raw)
                .or_else(|_| Decimal::from_scientific(&raw))
                .map(Some)
                .map_err(E::custom)
        }
        _ => Err(E::custom("invalid decimal value")),
    }
}

/// Accepts `"1.23"`, `1.23`, `null` or `""` (the last two as zero)
pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_decimal(value)?.unwrap_or(Decimal::ZERO))
}

/// Accepts `"1.23"`, `1.23`, `null` or `""` (the last two as `None`)
pub fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    parse_decimal(value)
}

pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn serialize_optional_decimal<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serializer.serialize_str(&value.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Writes the decimal as a JSON number for endpoints that reject strings.
///
/// serde_json is built with `arbitrary_precision`, so the decimal text is
/// written verbatim and never passes through `f64`.
pub fn serialize_decimal_as_number<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number = Number::from_str(&value.normalize().to_string()).map_err(serde::ser::Error::custom)?;
    serde::Serialize::serialize(&number, serializer)
}
