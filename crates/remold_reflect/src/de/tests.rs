use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::bytes::{ByteBuf, Bytes};
use crate::de::{deserialize, deserialize_any, deserialize_value, DEFAULT_ROOT_KEY};
use crate::derive::Remold;
use crate::error::{DeserializeError, ErrorKind};
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{TypeInfo, Typed, UnionInfo};
use crate::interface::DeserializeInPlace;
use crate::ops::{DynamicList, DynamicMap};
use crate::value::Value;

// -----------------------------------------------------------------------------
// Scalars

#[test]
fn scalar_coercion() {
    assert_eq!(deserialize::<i64>(&Value::Int(5)).unwrap(), Some(5));
    assert_eq!(deserialize::<i32>(&Value::from("42")).unwrap(), Some(42));
    assert_eq!(deserialize::<u8>(&Value::Bool(true)).unwrap(), Some(1));
    assert_eq!(deserialize::<f64>(&Value::from("3.5")).unwrap(), Some(3.5));
    assert_eq!(deserialize::<f32>(&Value::Int(2)).unwrap(), Some(2.0));
    assert_eq!(
        deserialize::<String>(&Value::Int(7)).unwrap(),
        Some("7".to_owned()),
    );
}

#[test]
fn integer_out_of_range() {
    let err = deserialize::<u8>(&Value::Int(300)).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn boolean_text_never_reaches_truthiness() {
    // The text path must go through the fixed vocabulary, not the
    // integer family and not truthiness ("false" is non-empty).
    assert_eq!(deserialize::<bool>(&Value::from("false")).unwrap(), Some(false));
    assert_eq!(deserialize::<bool>(&Value::from("Yes")).unwrap(), Some(true));
    assert!(deserialize::<bool>(&Value::from("maybe")).is_err());

    // Non-text sources coerce by truthiness.
    assert_eq!(deserialize::<bool>(&Value::Int(1)).unwrap(), Some(true));
    assert_eq!(deserialize::<bool>(&Value::Int(0)).unwrap(), Some(false));
    assert_eq!(deserialize::<bool>(&Value::seq([] as [i64; 0])).unwrap(), Some(false));
}

#[test]
fn byte_buffers() {
    let bytes = deserialize::<Bytes>(&Value::from("ab")).unwrap().unwrap();
    assert_eq!(bytes.as_slice(), b"ab");

    let buf = deserialize::<ByteBuf>(&Value::seq([104_i64, 105])).unwrap().unwrap();
    assert_eq!(buf.as_slice(), b"hi");

    let zeros = deserialize::<Bytes>(&Value::Int(4)).unwrap().unwrap();
    assert_eq!(zeros.as_slice(), [0, 0, 0, 0]);

    assert!(deserialize::<Bytes>(&Value::Float(1.5)).is_err());
}

// -----------------------------------------------------------------------------
// Absence and the hint layer

#[test]
fn absence_short_circuits() {
    assert_eq!(deserialize::<i64>(&Value::Null).unwrap(), None);
    assert_eq!(deserialize::<String>(&Value::Null).unwrap(), None);
    assert_eq!(deserialize::<Vec<i64>>(&Value::Null).unwrap(), None);

    // Optional targets reify the absence as their own `None`.
    assert_eq!(deserialize::<Option<i64>>(&Value::Null).unwrap(), Some(None));
    assert_eq!(
        deserialize::<Option<i64>>(&Value::Int(5)).unwrap(),
        Some(Some(5)),
    );
}

struct IntOrText;

impl Typed for IntOrText {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Union(UnionInfo::new::<IntOrText>(
                &[i64::type_info, String::type_info],
                false,
            ))
        })
    }
}

struct JustInt;

impl Typed for JustInt {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Union(UnionInfo::new::<JustInt>(&[i64::type_info], true))
        })
    }
}

#[test]
fn union_stripping() {
    // Two or more concrete alternatives cannot be deduced.
    let err = deserialize_any(&Value::Int(5), IntOrText::type_info(), DEFAULT_ROOT_KEY)
        .err()
        .unwrap();
    assert_eq!(err.kind(), &ErrorKind::UnionAmbiguity);

    // Exactly one concrete alternative dispatches directly.
    let out = deserialize_any(&Value::Int(5), JustInt::type_info(), DEFAULT_ROOT_KEY)
        .unwrap()
        .unwrap();
    assert_eq!(*out.downcast::<i64>().unwrap(), 5);

    // Null always short-circuits, even for an ambiguous union.
    assert!(
        deserialize_any(&Value::Null, IntOrText::type_info(), DEFAULT_ROOT_KEY)
            .unwrap()
            .is_none()
    );
}

// -----------------------------------------------------------------------------
// Sequences

#[test]
fn sequence_order_preserved() {
    let out = deserialize::<Vec<i64>>(&Value::seq([3_i64, 1, 2])).unwrap().unwrap();
    assert_eq!(out, [3, 1, 2]);
}

#[test]
fn scalar_becomes_single_element_sequence() {
    let out = deserialize::<Vec<i64>>(&Value::Int(9)).unwrap().unwrap();
    assert_eq!(out, [9]);
}

#[test]
fn mapping_iterates_as_keys() {
    let data = Value::map([("a", 1_i64), ("b", 2)]);
    let out = deserialize::<Vec<String>>(&data).unwrap().unwrap();
    assert_eq!(out, ["a", "b"]);
}

#[test]
fn null_element_is_incompatible_with_required_items() {
    let data = Value::Seq(vec![Value::Int(1), Value::Null]);
    let err = deserialize::<Vec<i64>>(&data).unwrap_err();
    assert_eq!(err.path(), [DEFAULT_ROOT_KEY, "[1]"]);
}

#[test]
fn optional_elements_accept_null() {
    let data = Value::Seq(vec![Value::Int(1), Value::Null]);
    let out = deserialize::<Vec<Option<i64>>>(&data).unwrap().unwrap();
    assert_eq!(out, [Some(1), None]);
}

// -----------------------------------------------------------------------------
// Mappings

#[test]
fn mapping_merge_asymmetry() {
    // Items-shaped source: set-if-absent, first-seen wins.
    let items = Value::Map(vec![
        ("k".to_owned(), Value::Int(1)),
        ("k".to_owned(), Value::Int(2)),
    ]);
    let out = deserialize::<HashMap<String, i64>>(&items).unwrap().unwrap();
    assert_eq!(out["k"], 1);

    // Attribute-shaped source: plain assignment, last-seen wins.
    let attrs = Value::Object(vec![
        ("k".to_owned(), Value::Int(1)),
        ("k".to_owned(), Value::Int(2)),
    ]);
    let out = deserialize::<HashMap<String, i64>>(&attrs).unwrap().unwrap();
    assert_eq!(out["k"], 2);
}

#[test]
fn sequence_promotes_to_indexed_mapping() {
    let data = Value::seq([10_i64, 20]);
    let out = deserialize::<HashMap<String, i64>>(&data).unwrap().unwrap();
    assert_eq!(out["0"], 10);
    assert_eq!(out["1"], 20);
}

#[test]
fn scalar_promotes_to_single_entry_mapping() {
    let out = deserialize::<HashMap<String, i64>>(&Value::Int(7)).unwrap().unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out["0"], 7);
}

#[test]
fn fast_hash_map_target() {
    use remold_utils::hash::{FixedHashState, HashMap as FastHashMap};

    let data = Value::map([("a", 1_i64)]);
    let out = deserialize::<FastHashMap<String, i64, FixedHashState>>(&data)
        .unwrap()
        .unwrap();
    assert_eq!(out["a"], 1);
}

// -----------------------------------------------------------------------------
// Tuples

#[test]
fn tuple_positional() {
    let data = Value::Seq(vec![Value::Int(1), Value::from("x")]);
    let out = deserialize::<(i64, String)>(&data).unwrap().unwrap();
    assert_eq!(out, (1, "x".to_owned()));
}

#[test]
fn tuple_wraps_non_iterable() {
    let out = deserialize::<(i64,)>(&Value::Int(5)).unwrap().unwrap();
    assert_eq!(out, (5,));
}

#[test]
fn tuple_arity_checked() {
    let err = deserialize::<(i64, i64)>(&Value::seq([1_i64])).unwrap_err();
    assert!(err.to_string().contains("expects 2 elements"));
}

#[derive(Remold, Debug, PartialEq)]
struct Pair(i64, String);

#[test]
fn named_tuple_spreads_positionally() {
    let data = Value::Seq(vec![Value::Int(1), Value::from("x")]);
    let out = deserialize::<Pair>(&data).unwrap().unwrap();
    assert_eq!(out, Pair(1, "x".to_owned()));

    // A named fixed tuple rejects non-iterable sources.
    let err = deserialize::<Pair>(&Value::Int(1)).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Incompatible { .. }));
}

// -----------------------------------------------------------------------------
// Records

#[derive(Remold, Debug, PartialEq)]
struct Config {
    name: String,
    retries: i32,
    timeout: Option<f64>,
}

#[test]
fn record_from_map_source() {
    let data = Value::map([
        ("name", Value::from("primary")),
        ("retries", Value::from(3)),
        ("timeout", Value::from(1.5)),
    ]);
    let out = deserialize::<Config>(&data).unwrap().unwrap();
    assert_eq!(
        out,
        Config {
            name: "primary".into(),
            retries: 3,
            timeout: Some(1.5),
        },
    );
}

#[test]
fn record_from_object_source() {
    let data = Value::object([("name", Value::from("x")), ("retries", Value::Int(0))]);
    let out = deserialize::<Config>(&data).unwrap().unwrap();
    assert_eq!(out.timeout, None);
}

#[test]
fn record_missing_required_field() {
    let data = Value::map([("name", Value::from("x"))]);
    let err = deserialize::<Config>(&data).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MissingField("retries".into()));
    assert_eq!(err.path(), [DEFAULT_ROOT_KEY]);
}

#[test]
fn record_field_type_hint_drives_coercion() {
    // "3" deserializes as the declared i32, not as text.
    let data = Value::map([
        ("name", Value::from("x")),
        ("retries", Value::from("3")),
    ]);
    let out = deserialize::<Config>(&data).unwrap().unwrap();
    assert_eq!(out.retries, 3);
}

#[derive(Remold, Debug, PartialEq)]
struct Holder {
    a: Vec<i64>,
}

#[test]
fn error_path_reads_root_to_leaf() {
    let data = Value::map([("a", Value::Seq(vec![Value::Int(1), Value::from("x")]))]);
    let err = deserialize::<Holder>(&data).unwrap_err();
    assert_eq!(err.path(), [DEFAULT_ROOT_KEY, "a", "[1]"]);
    assert_eq!(err.path_string(), "<root>.a[1]");
}

#[derive(Remold, Debug, PartialEq)]
struct Nested {
    inner: Config,
    tags: Vec<String>,
}

#[test]
fn nested_records() {
    let data = Value::map([
        (
            "inner",
            Value::map([
                ("name", Value::from("n")),
                ("retries", Value::Int(1)),
            ]),
        ),
        ("tags", Value::seq(["a", "b"])),
    ]);
    let out = deserialize::<Nested>(&data).unwrap().unwrap();
    assert_eq!(out.inner.name, "n");
    assert_eq!(out.tags, ["a", "b"]);
}

#[derive(Remold, Debug, PartialEq)]
struct Wrap<T> {
    inner: T,
}

#[test]
fn generic_record() {
    let data = Value::map([("inner", Value::Int(5))]);
    let out = deserialize::<Wrap<i64>>(&data).unwrap().unwrap();
    assert_eq!(out, Wrap { inner: 5 });

    let data = Value::map([("inner", Value::from("s"))]);
    let out = deserialize::<Wrap<String>>(&data).unwrap().unwrap();
    assert_eq!(out.inner, "s");
}

// -----------------------------------------------------------------------------
// Plain objects

#[derive(Remold, Default, Debug, PartialEq)]
#[remold(default)]
struct Settings {
    level: i32,
    label: String,
}

#[test]
fn object_keeps_defaults_for_missing_fields() {
    let data = Value::object([("level", Value::Int(3))]);
    let out = deserialize::<Settings>(&data).unwrap().unwrap();
    assert_eq!(out, Settings { level: 3, label: String::new() });
}

#[test]
fn object_explicit_null_keeps_default() {
    let data = Value::object([("level", Value::Null), ("label", Value::from("x"))]);
    let out = deserialize::<Settings>(&data).unwrap().unwrap();
    assert_eq!(out, Settings { level: 0, label: "x".into() });
}

// -----------------------------------------------------------------------------
// Enumerations

#[derive(Remold, Debug, PartialEq)]
enum Color {
    Red = 1,
    Green = 2,
    Blue = 4,
}

#[test]
fn enum_by_value() {
    assert_eq!(deserialize::<Color>(&Value::Int(4)).unwrap(), Some(Color::Blue));
    assert_eq!(
        deserialize::<Color>(&Value::from("Green")).unwrap(),
        Some(Color::Green),
    );

    let err = deserialize::<Color>(&Value::Int(3)).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Incompatible { .. }));
}

// -----------------------------------------------------------------------------
// Self-deserializing types

#[derive(Remold, Default, Debug, PartialEq)]
#[remold(custom)]
struct Csv(Vec<String>);

impl DeserializeInPlace for Csv {
    fn deserialize_in_place(&mut self, raw: &Value) -> Result<(), DeserializeError> {
        let Value::Str(text) = raw else {
            return Err(DeserializeError::message("expected comma-separated text"));
        };
        self.0 = text.split(',').map(str::to_owned).collect();
        Ok(())
    }
}

#[test]
fn custom_interface_owns_interpretation() {
    let out = deserialize::<Csv>(&Value::from("a,b")).unwrap().unwrap();
    assert_eq!(out, Csv(vec!["a".into(), "b".into()]));

    let err = deserialize::<Csv>(&Value::Int(1)).unwrap_err();
    assert_eq!(err.path(), [DEFAULT_ROOT_KEY]);
}

// -----------------------------------------------------------------------------
// Date / time targets

#[test]
fn temporal_targets() {
    let dt = deserialize::<NaiveDateTime>(&Value::from("2022-03-04T05:06:07"))
        .unwrap()
        .unwrap();
    assert_eq!((dt.year(), dt.hour()), (2022, 5));

    let dt = deserialize::<NaiveDateTime>(&Value::Float(0.0)).unwrap().unwrap();
    assert_eq!(dt.year(), 1970);

    let date = deserialize::<NaiveDate>(&Value::Int(738156)).unwrap().unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2022, 1, 1));

    let err = deserialize::<chrono::NaiveTime>(&Value::Int(5)).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Incompatible { .. }));
}

// -----------------------------------------------------------------------------
// Dynamic fallback

#[test]
fn dynamic_primitives_pass_through() {
    let out = deserialize_value(&Value::Int(5)).unwrap().unwrap();
    assert_eq!(*out.downcast::<i64>().unwrap(), 5);

    let out = deserialize_value(&Value::from("s")).unwrap().unwrap();
    assert_eq!(*out.downcast::<String>().unwrap(), "s");

    assert!(deserialize_value(&Value::Null).unwrap().is_none());
}

#[test]
fn dynamic_containers() {
    let data = Value::map([
        ("nums", Value::seq([1_i64, 2])),
        ("name", Value::from("x")),
    ]);
    let out = deserialize_value(&data).unwrap().unwrap();
    let map = out.downcast_ref::<DynamicMap>().unwrap();

    let nums = map.get_as::<DynamicList>("nums").unwrap();
    assert_eq!(nums.get_as::<i64>(0), Some(&1));
    assert_eq!(map.get_as::<String>("name").map(String::as_str), Some("x"));
}

#[test]
fn dynamic_object_copies_attributes() {
    let data = Value::object([("a", Value::Int(1))]);
    let out = deserialize_value(&data).unwrap().unwrap();
    let map = out.downcast_ref::<DynamicMap>().unwrap();
    assert_eq!(map.get_as::<i64>("a"), Some(&1));
}

#[test]
fn typed_dynamic_targets() {
    let data = Value::map([("a", 1_i64), ("b", 2)]);
    let out = deserialize::<DynamicMap>(&data).unwrap().unwrap();
    assert_eq!(out.keys().collect::<Vec<_>>(), ["a", "b"]);

    let out = deserialize::<DynamicList>(&Value::seq([1_i64, 2])).unwrap().unwrap();
    assert_eq!(out.len(), 2);
}

// -----------------------------------------------------------------------------
// Array buffers

#[cfg(feature = "ndarray")]
mod ndarray {
    use remold_ndarray::NdArray;

    use super::*;
    use crate::de::has_ndarray;

    fn as_record_value(array: &NdArray) -> Value {
        let record = remold_ndarray::serialize(array).unwrap();
        Value::Seq(vec![
            Value::Seq(record.shape.iter().map(|&d| Value::Int(d as i64)).collect()),
            Value::Str(record.dtype.clone()),
            Value::Bytes(record.buffer.clone()),
            Value::Seq(record.strides.iter().map(|&s| Value::Int(s as i64)).collect()),
        ])
    }

    #[test]
    fn capability_present() {
        assert!(has_ndarray());
    }

    #[test]
    fn array_round_trip_through_engine() {
        let array = NdArray::from_vec(vec![1.0_f32, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let out = deserialize::<NdArray>(&as_record_value(&array)).unwrap().unwrap();

        assert_eq!(out.shape(), array.shape());
        assert_eq!(out.strides(), array.strides());
        assert_eq!(out.dtype(), array.dtype());
        assert_eq!(out.buffer(), array.buffer());
    }

    #[test]
    fn array_requires_sequence_shape() {
        let err = deserialize::<NdArray>(&Value::Int(1)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Incompatible { .. }));
    }

    #[test]
    fn malformed_record_cites_position() {
        let data = Value::Seq(vec![
            Value::Int(123),
            Value::from("float32"),
            Value::Bytes(vec![0, 0, 0, 0]),
            Value::seq([4_i64]),
        ]);
        let err = deserialize::<NdArray>(&data).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::RecordField {
                position: 0,
                expected: "iterable"
            },
        );
    }
}
