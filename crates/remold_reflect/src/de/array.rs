//! The bridge from raw 4-element array records to the codec.

use remold_ndarray::{ArrayRecord, NdArray};

use crate::error::{DeserializeError, ErrorKind};
use crate::value::Value;

/// Validates a raw ordered record positionally and rebuilds the array.
///
/// Element 0 must be iterable (the shape), element 1 text (the dtype
/// name), element 2 byte-like (the buffer), element 3 iterable (the
/// strides); violations name the offending position. Dtype and metadata
/// errors come from the codec unchanged.
pub(super) fn decode_record_seq(items: &[Value]) -> Result<NdArray, DeserializeError> {
    if items.len() != 4 {
        return Err(ErrorKind::RecordLength(items.len()).into());
    }

    let shape = match &items[0] {
        Value::Seq(values) => values
            .iter()
            .map(|v| match v {
                Value::Int(i) => usize::try_from(*i).ok(),
                _ => None,
            })
            .collect::<Option<Vec<usize>>>()
            .ok_or(ErrorKind::RecordField {
                position: 0,
                expected: "a sequence of non-negative integers",
            })?,
        _ => {
            return Err(ErrorKind::RecordField {
                position: 0,
                expected: "iterable",
            }
            .into());
        }
    };

    let dtype = match &items[1] {
        Value::Str(name) => name.clone(),
        _ => {
            return Err(ErrorKind::RecordField {
                position: 1,
                expected: "text",
            }
            .into());
        }
    };

    let buffer = match &items[2] {
        Value::Bytes(bytes) => bytes.clone(),
        _ => {
            return Err(ErrorKind::RecordField {
                position: 2,
                expected: "byte-like",
            }
            .into());
        }
    };

    let strides = match &items[3] {
        Value::Seq(values) => values
            .iter()
            .map(|v| match v {
                Value::Int(i) => isize::try_from(*i).ok(),
                _ => None,
            })
            .collect::<Option<Vec<isize>>>()
            .ok_or(ErrorKind::RecordField {
                position: 3,
                expected: "a sequence of integers",
            })?,
        _ => {
            return Err(ErrorKind::RecordField {
                position: 3,
                expected: "iterable",
            }
            .into());
        }
    };

    let record = ArrayRecord {
        shape,
        dtype,
        buffer,
        strides,
    };
    Ok(remold_ndarray::deserialize(&record)?)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::decode_record_seq;
    use crate::error::ErrorKind;
    use crate::value::Value;

    fn record_values() -> Vec<Value> {
        vec![
            Value::seq([1_i64]),
            Value::from("float32"),
            Value::Bytes(vec![0, 0, 128, 63]),
            Value::seq([4_i64]),
        ]
    }

    #[test]
    fn decodes_valid_record() {
        let array = decode_record_seq(&record_values()).unwrap();
        assert_eq!(array.shape(), &[1]);
        assert_eq!(array.dtype().name(), "float32");
    }

    #[test]
    fn wrong_arity() {
        let err = decode_record_seq(&record_values()[..3]).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::RecordLength(3));
    }

    #[test]
    fn positions_cited() {
        let mut values = record_values();
        values[0] = Value::Int(123);
        let err = decode_record_seq(&values).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::RecordField {
                position: 0,
                expected: "iterable"
            },
        );

        let mut values = record_values();
        values[1] = Value::Int(5);
        let err = decode_record_seq(&values).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::RecordField {
                position: 1,
                expected: "text"
            },
        );

        let mut values = record_values();
        values[2] = Value::from("not bytes");
        let err = decode_record_seq(&values).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::RecordField {
                position: 2,
                expected: "byte-like"
            },
        );

        let mut values = record_values();
        values[3] = Value::from(4.0);
        let err = decode_record_seq(&values).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::RecordField {
                position: 3,
                expected: "iterable"
            },
        );
    }

    #[test]
    fn dtype_errors_pass_through() {
        let mut values = record_values();
        values[1] = Value::from("not-a-real-dtype");
        let err = decode_record_seq(&values).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::UnsupportedDtype("not-a-real-dtype".into()),
        );

        let mut values = record_values();
        values[1] = Value::from("");
        let err = decode_record_seq(&values).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::EmptyDtype);
    }
}
