//! The deserialization engine: a recursive dispatcher over an untyped
//! [`Value`] and a target [`TypeInfo`] descriptor.
//!
//! ## Dispatch order
//!
//! Strictly, per call:
//!
//! 1. The hint layer: an `Optional` descriptor strips to its single
//!    concrete alternative (reifying null as the target's own `None`); a
//!    `Union` descriptor strips its null branch and is rejected when two
//!    or more alternatives remain.
//! 2. Null data short-circuits to absence for every other target.
//! 3. Family dispatch in the fixed [`TypeKind`](crate::info::TypeKind)
//!    priority: byte buffers, boolean, integer, float, text, the
//!    array-buffer codec, date-time, date, time, enumerations, fixed
//!    tuples, self-deserializing types, mappings, sequences, records,
//!    plain objects.
//! 4. A `Dynamic` target deduces the shape purely from the data:
//!    primitives pass through (`bool`, `i64`, `f64`, `String`,
//!    `Vec<u8>`), mapping-shaped data recurses into a
//!    [`DynamicMap`](crate::ops::DynamicMap), iterable data into a
//!    [`DynamicList`](crate::ops::DynamicList).
//!
//! Do not reorder the family arms: boolean text must never reach the
//! integer family, and text/byte targets parse their own way before any
//! numeric coercion sees the data.
//!
//! ## Error paths
//!
//! Every recursion frame prepends its key label to a failing error, so
//! the surfaced [`DeserializeError`] reads root-to-leaf:
//!
//! ```
//! use remold_reflect::{derive::Remold, deserialize, Value};
//!
//! #[derive(Remold, Debug)]
//! struct Holder {
//!     a: Vec<i32>,
//! }
//!
//! let data = Value::map([("a", Value::seq([Value::Int(1), Value::from("x")]))]);
//! let err = deserialize::<Holder>(&data).unwrap_err();
//!
//! assert_eq!(err.path(), ["<root>", "a", "[1]"]);
//! ```

use core::any::Any;

use crate::error::{DeserializeError, ErrorKind};
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicInfo, TypeInfo, Typed, UnionInfo};
use crate::value::Value;

// -----------------------------------------------------------------------------
// Modules

mod coerce;
mod container;

#[cfg(feature = "ndarray")]
mod array;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Entry points

/// The path label of the outermost recursion frame.
pub const DEFAULT_ROOT_KEY: &str = "<root>";

/// Deserializes an untyped value into `T`.
///
/// Returns `Ok(None)` when the data is null — absence always
/// short-circuits, whatever the target.
///
/// # Examples
///
/// ```
/// use remold_reflect::{deserialize, Value};
///
/// assert_eq!(deserialize::<i64>(&Value::Int(5)).unwrap(), Some(5));
/// assert_eq!(deserialize::<i64>(&Value::Null).unwrap(), None);
///
/// // Optional targets reify the absence instead.
/// assert_eq!(deserialize::<Option<i64>>(&Value::Null).unwrap(), Some(None));
/// ```
pub fn deserialize<T: Typed>(data: &Value) -> Result<Option<T>, DeserializeError> {
    match deserialize_any(data, T::type_info(), DEFAULT_ROOT_KEY)? {
        None => Ok(None),
        Some(boxed) => match boxed.downcast::<T>() {
            Ok(value) => Ok(Some(*value)),
            Err(_) => Err(DeserializeError::message(format!(
                "deserialized value does not match requested type `{}`",
                core::any::type_name::<T>(),
            ))),
        },
    }
}

/// Deserializes with the shape deduced purely from the data.
///
/// Primitives pass through unchanged (boxed as `bool`, `i64`, `f64`,
/// `String`, or `Vec<u8>`); mapping- and attribute-shaped data becomes a
/// [`DynamicMap`](crate::ops::DynamicMap), iterable data a
/// [`DynamicList`](crate::ops::DynamicList).
///
/// # Examples
///
/// ```
/// use remold_reflect::{deserialize_value, ops::DynamicMap, Value};
///
/// let data = Value::map([("a", 1_i64), ("b", 2)]);
/// let out = deserialize_value(&data).unwrap().unwrap();
/// let map = out.downcast_ref::<DynamicMap>().unwrap();
///
/// assert_eq!(map.get_as::<i64>("a"), Some(&1));
/// ```
pub fn deserialize_value(data: &Value) -> Result<Option<Box<dyn Any>>, DeserializeError> {
    deserialize_any(data, untyped_info(), DEFAULT_ROOT_KEY)
}

/// Whether the array-buffer runtime is available to this process.
///
/// Checked lazily and cached for the process lifetime; array-family
/// dispatch fails fast with
/// [`ErrorKind::MissingCapability`](crate::ErrorKind::MissingCapability)
/// when this is `false`.
#[cfg(feature = "ndarray")]
pub fn has_ndarray() -> bool {
    remold_ndarray::registry_available()
}

/// Whether the array-buffer runtime is available to this process.
#[cfg(not(feature = "ndarray"))]
pub fn has_ndarray() -> bool {
    false
}

/// The shared descriptor for "no usable type information".
pub(crate) fn untyped_info() -> &'static TypeInfo {
    struct Untyped;

    static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
    CELL.get_or_init(|| TypeInfo::Dynamic(DynamicInfo::new::<Untyped>()))
}

// -----------------------------------------------------------------------------
// Recursive dispatch

/// One recursion frame: dispatches and annotates failures with `key`.
///
/// `Ok(None)` is absence; `Ok(Some(_))` always boxes exactly the
/// descriptor's concrete type.
pub fn deserialize_any(
    data: &Value,
    info: &'static TypeInfo,
    key: &str,
) -> Result<Option<Box<dyn Any>>, DeserializeError> {
    crate::cfg::debug! {
        log::trace!(
            "deserializing `{}` value into {} `{}` at `{}`",
            data.kind(),
            info.kind(),
            info.ty().name(),
            key,
        );
    }

    dispatch(data, info).map_err(|mut err| {
        err.prepend(key);
        err
    })
}

fn dispatch(
    data: &Value,
    info: &'static TypeInfo,
) -> Result<Option<Box<dyn Any>>, DeserializeError> {
    match info {
        // The hint layer resolves before anything else. `Optional`
        // reifies null as the target's own `None` so record fields
        // always construct.
        TypeInfo::Optional(opt) => {
            let inner = if data.is_null() {
                None
            } else {
                dispatch(data, opt.some_info())?
            };
            Ok(Some(opt.wrap(inner)?))
        }
        TypeInfo::Union(union) => dispatch_union(data, union),

        // Absence short-circuits for every concrete family.
        _ if data.is_null() => Ok(None),

        TypeInfo::Bytes(bytes) => Ok(Some(bytes.make(coerce::to_bytes(data, bytes.ty())?))),
        TypeInfo::Bool(boolean) => Ok(Some(boolean.make(coerce::to_bool(data)?))),
        TypeInfo::Int(int) => {
            let value = coerce::to_int(data, int.ty())?;
            int.make(value).map(Some).ok_or_else(|| {
                DeserializeError::message(format!(
                    "{value} is out of range for `{}`",
                    int.ty().name(),
                ))
            })
        }
        TypeInfo::Float(float) => Ok(Some(float.make(coerce::to_float(data, float.ty())?))),
        TypeInfo::Text(text) => Ok(Some(text.make(coerce::to_text(data, text.ty())?))),
        TypeInfo::NdArray(array) => dispatch_ndarray(data, array.ty().name()),
        TypeInfo::DateTime(dt) => Ok(Some(dt.make(coerce::to_datetime(data, dt.ty())?))),
        TypeInfo::Date(date) => Ok(Some(date.make(coerce::to_date(data, date.ty())?))),
        TypeInfo::Time(time) => Ok(Some(time.make(coerce::to_time(data, time.ty())?))),
        TypeInfo::Enum(enumeration) => {
            enumeration.from_value(data).map(Some).ok_or_else(|| {
                DeserializeError::incompatible(data.kind().as_str(), enumeration.ty().name())
            })
        }
        TypeInfo::Tuple(tuple) => container::deserialize_tuple(data, tuple).map(Some),
        TypeInfo::Custom(custom) => {
            let mut target = custom.make();
            custom.fill(target.as_mut(), data)?;
            Ok(Some(target))
        }
        TypeInfo::Map(map) => container::deserialize_mapping_any(data, map).map(Some),
        TypeInfo::List(list) => container::deserialize_sequence_any(data, list).map(Some),
        TypeInfo::Struct(record) => container::deserialize_record(data, record).map(Some),
        TypeInfo::Object(object) => container::deserialize_object(data, object).map(Some),
        TypeInfo::Dynamic(_) => container::deserialize_dynamic(data).map(Some),
    }
}

/// Union stripping: drop the null branch, accept exactly one remaining
/// concrete alternative, reject two or more.
fn dispatch_union(
    data: &Value,
    info: &UnionInfo,
) -> Result<Option<Box<dyn Any>>, DeserializeError> {
    if data.is_null() {
        return Ok(None);
    }

    let mut alternatives = info.alternatives();
    match (alternatives.next(), alternatives.next()) {
        (Some(only), None) => dispatch(data, only),
        (Some(_), Some(_)) => Err(ErrorKind::UnionAmbiguity.into()),
        _ => Err(DeserializeError::incompatible(
            data.kind().as_str(),
            info.ty().name(),
        )),
    }
}

#[cfg(feature = "ndarray")]
fn dispatch_ndarray(
    data: &Value,
    target: &'static str,
) -> Result<Option<Box<dyn Any>>, DeserializeError> {
    if !has_ndarray() {
        return Err(ErrorKind::MissingCapability.into());
    }
    match data {
        // The array family accepts the ordered 4-element record shape only.
        Value::Seq(items) => array::decode_record_seq(items)
            .map(|array| Some(Box::new(array) as Box<dyn Any>)),
        other => Err(DeserializeError::incompatible(
            other.kind().as_str(),
            target,
        )),
    }
}

#[cfg(not(feature = "ndarray"))]
fn dispatch_ndarray(
    _data: &Value,
    _target: &'static str,
) -> Result<Option<Box<dyn Any>>, DeserializeError> {
    Err(ErrorKind::MissingCapability.into())
}
