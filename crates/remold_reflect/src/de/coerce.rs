//! Scalar family coercions: the fixed rule table turning a source value
//! into each family's canonical representation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::boolean::string_to_boolean;
use crate::error::DeserializeError;
use crate::info::Type;
use crate::value::Value;

// -----------------------------------------------------------------------------
// Byte buffers

/// Coerces into raw bytes: text as UTF-8, bytes as-is, a sequence of
/// byte-range integers element-wise, and an integer `n` as `n` zero bytes.
pub(super) fn to_bytes(data: &Value, target: &Type) -> Result<Vec<u8>, DeserializeError> {
    match data {
        Value::Str(s) => Ok(s.clone().into_bytes()),
        Value::Bytes(b) => Ok(b.clone()),
        Value::Seq(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Int(i) if (0..=255).contains(i) => out.push(*i as u8),
                    other => {
                        return Err(DeserializeError::incompatible(
                            other.kind().as_str(),
                            target.name(),
                        ));
                    }
                }
            }
            Ok(out)
        }
        Value::Int(n) if *n >= 0 => Ok(vec![0; *n as usize]),
        other => Err(DeserializeError::incompatible(
            other.kind().as_str(),
            target.name(),
        )),
    }
}

// -----------------------------------------------------------------------------
// Boolean

/// Coerces into a boolean: text through the fixed vocabulary parser,
/// everything else by truthiness.
pub(super) fn to_bool(data: &Value) -> Result<bool, DeserializeError> {
    match data {
        Value::Str(s) => string_to_boolean(s).map_err(|e| DeserializeError::message(e.to_string())),
        other => Ok(other.is_truthy()),
    }
}

// -----------------------------------------------------------------------------
// Integer

/// Coerces into the canonical `i64`: booleans as 0/1, floats truncated
/// toward zero, text parsed.
pub(super) fn to_int(data: &Value, target: &Type) -> Result<i64, DeserializeError> {
    match data {
        Value::Bool(b) => Ok(*b as i64),
        Value::Int(i) => Ok(*i),
        Value::Float(f) if f.is_finite() => Ok(*f as i64),
        Value::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| DeserializeError::message(format!("invalid integer `{s}`: {e}"))),
        other => Err(DeserializeError::incompatible(
            other.kind().as_str(),
            target.name(),
        )),
    }
}

// -----------------------------------------------------------------------------
// Float

/// Coerces into the canonical `f64`: booleans as 0.0/1.0, integers
/// widened, text parsed.
pub(super) fn to_float(data: &Value, target: &Type) -> Result<f64, DeserializeError> {
    match data {
        Value::Bool(b) => Ok(*b as i64 as f64),
        Value::Int(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        Value::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| DeserializeError::message(format!("invalid float `{s}`: {e}"))),
        other => Err(DeserializeError::incompatible(
            other.kind().as_str(),
            target.name(),
        )),
    }
}

// -----------------------------------------------------------------------------
// Text

/// Coerces into text: scalars are rendered, bytes must be valid UTF-8.
pub(super) fn to_text(data: &Value, target: &Type) -> Result<String, DeserializeError> {
    match data {
        Value::Bool(b) => Ok(b.to_string()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::Str(s) => Ok(s.clone()),
        Value::Bytes(b) => String::from_utf8(b.clone())
            .map_err(|e| DeserializeError::message(format!("invalid UTF-8 bytes: {e}"))),
        other => Err(DeserializeError::incompatible(
            other.kind().as_str(),
            target.name(),
        )),
    }
}

// -----------------------------------------------------------------------------
// Date / time

/// The three fixed date-time interpretations: float = POSIX timestamp,
/// int = ordinal day count, text = ISO-8601.
pub(super) fn to_datetime(data: &Value, target: &Type) -> Result<NaiveDateTime, DeserializeError> {
    match data {
        Value::Float(f) => datetime_from_timestamp(*f)
            .ok_or_else(|| DeserializeError::message(format!("timestamp {f} is out of range"))),
        Value::Int(i) => date_from_ordinal(*i)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| DeserializeError::message(format!("ordinal {i} is out of range"))),
        Value::Str(s) => parse_iso_datetime(s)
            .ok_or_else(|| DeserializeError::message(format!("invalid ISO-8601 date-time `{s}`"))),
        other => Err(DeserializeError::incompatible(
            other.kind().as_str(),
            target.name(),
        )),
    }
}

/// The date-only interpretations of the same three source kinds.
pub(super) fn to_date(data: &Value, target: &Type) -> Result<NaiveDate, DeserializeError> {
    match data {
        Value::Float(f) => datetime_from_timestamp(*f)
            .map(|dt| dt.date())
            .ok_or_else(|| DeserializeError::message(format!("timestamp {f} is out of range"))),
        Value::Int(i) => date_from_ordinal(*i)
            .ok_or_else(|| DeserializeError::message(format!("ordinal {i} is out of range"))),
        Value::Str(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| DeserializeError::message(format!("invalid ISO-8601 date `{s}`"))),
        other => Err(DeserializeError::incompatible(
            other.kind().as_str(),
            target.name(),
        )),
    }
}

/// Time-of-day accepts ISO-8601 text only.
pub(super) fn to_time(data: &Value, target: &Type) -> Result<NaiveTime, DeserializeError> {
    match data {
        Value::Str(s) => {
            let s = s.trim();
            NaiveTime::parse_from_str(s, "%H:%M:%S%.f")
                .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
                .map_err(|_| DeserializeError::message(format!("invalid ISO-8601 time `{s}`")))
        }
        other => Err(DeserializeError::incompatible(
            other.kind().as_str(),
            target.name(),
        )),
    }
}

fn datetime_from_timestamp(seconds: f64) -> Option<NaiveDateTime> {
    if !seconds.is_finite() {
        return None;
    }
    let secs = seconds.floor();
    let nanos = ((seconds - secs) * 1_000_000_000.0) as u32;
    DateTime::from_timestamp(secs as i64, nanos).map(|dt| dt.naive_utc())
}

/// Day 1 is 0001-01-01, the proleptic-Gregorian ordinal epoch.
fn date_from_ordinal(ordinal: i64) -> Option<NaiveDate> {
    let days = i32::try_from(ordinal).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days)
}

fn parse_iso_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            // A bare date reads as midnight.
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn ty() -> Type {
        Type::of::<i64>()
    }

    #[test]
    fn int_coercions() {
        assert_eq!(to_int(&Value::Bool(true), &ty()).unwrap(), 1);
        assert_eq!(to_int(&Value::Float(3.9), &ty()).unwrap(), 3);
        assert_eq!(to_int(&Value::Float(-3.9), &ty()).unwrap(), -3);
        assert_eq!(to_int(&Value::from(" 42 "), &ty()).unwrap(), 42);
        assert!(to_int(&Value::from("x"), &ty()).is_err());
        assert!(to_int(&Value::seq([1]), &ty()).is_err());
    }

    #[test]
    fn bytes_coercions() {
        assert_eq!(to_bytes(&Value::from("ab"), &ty()).unwrap(), b"ab");
        assert_eq!(to_bytes(&Value::seq([104, 105]), &ty()).unwrap(), b"hi");
        assert_eq!(to_bytes(&Value::Int(3), &ty()).unwrap(), [0, 0, 0]);
        assert!(to_bytes(&Value::seq([300]), &ty()).is_err());
    }

    #[test]
    fn datetime_interpretations() {
        // Ordinal day 738156 is 2022-01-01.
        let dt = to_datetime(&Value::Int(738156), &ty()).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2022, 1, 1));

        let dt = to_datetime(&Value::from("2022-03-04T05:06:07"), &ty()).unwrap();
        assert_eq!(dt.hour(), 5);

        let dt = to_datetime(&Value::Float(0.0), &ty()).unwrap();
        assert_eq!(dt.year(), 1970);

        assert!(to_datetime(&Value::Bool(true), &ty()).is_err());
    }

    #[test]
    fn time_is_text_only() {
        let t = to_time(&Value::from("01:02:03.5"), &ty()).unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (1, 2, 3));
        assert!(to_time(&Value::Int(3), &ty()).is_err());
        assert!(to_time(&Value::from("not a time"), &ty()).is_err());
    }
}
