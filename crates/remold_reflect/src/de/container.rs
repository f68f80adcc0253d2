//! The container recursor: mapping, sequence, tuple, record, object, and
//! data-driven recursion.

use core::any::Any;

use crate::de::{deserialize_any, untyped_info};
use crate::error::DeserializeError;
use crate::info::{ListInfo, MapInfo, ObjectInfo, StructInfo, TupleInfo, Typed};
use crate::ops::{DynamicList, DynamicMap, ElementBag, FieldBag};
use crate::value::Value;

/// The key synthesized for a scalar promoted into a single-entry mapping,
/// and the first key of a sequence promoted into a mapping.
pub(super) const FIRST_INDEX_KEY: &str = "0";

static NULL: Value = Value::Null;

// -----------------------------------------------------------------------------
// Mapping recursion

/// Deserializes any source shape into a mapping target.
///
/// Non-mapping sources are promoted first: a sequence becomes entries
/// keyed by string indices, a scalar becomes a single entry keyed `"0"`.
pub(super) fn deserialize_mapping_any(
    data: &Value,
    info: &MapInfo,
) -> Result<Box<dyn Any>, DeserializeError> {
    match data {
        Value::Map(entries) => {
            let pairs: Vec<(String, &Value)> =
                entries.iter().map(|(k, v)| (k.clone(), v)).collect();
            deserialize_mapping_items(&pairs, info)
        }
        Value::Object(attrs) => {
            let pairs: Vec<(String, &Value)> = attrs.iter().map(|(k, v)| (k.clone(), v)).collect();
            deserialize_mapping_keys(&pairs, info)
        }
        Value::Seq(items) => {
            let pairs: Vec<(String, &Value)> = items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect();
            deserialize_mapping_items(&pairs, info)
        }
        other => {
            let pairs = vec![(FIRST_INDEX_KEY.to_owned(), other)];
            deserialize_mapping_items(&pairs, info)
        }
    }
}

/// The items path: insert-if-absent, so a duplicate key keeps the
/// first-seen value.
fn deserialize_mapping_items(
    pairs: &[(String, &Value)],
    info: &MapInfo,
) -> Result<Box<dyn Any>, DeserializeError> {
    let ops = info.ops();
    let mut result = (ops.make)();
    for (key, value) in pairs {
        let elem_info = info.value_info().unwrap_or_else(untyped_info);
        let elem = deserialize_any(value, elem_info, key)?;
        (ops.insert_absent)(result.as_mut(), key, elem).map_err(|mut err| {
            err.prepend(key.clone());
            err
        })?;
    }
    Ok(result)
}

/// The keys path: plain assignment, so a duplicate key keeps the
/// last-seen value.
fn deserialize_mapping_keys(
    pairs: &[(String, &Value)],
    info: &MapInfo,
) -> Result<Box<dyn Any>, DeserializeError> {
    let ops = info.ops();
    let mut result = (ops.make)();
    for (key, value) in pairs {
        let elem_info = info.value_info().unwrap_or_else(untyped_info);
        let elem = deserialize_any(value, elem_info, key)?;
        (ops.insert)(result.as_mut(), key, elem).map_err(|mut err| {
            err.prepend(key.clone());
            err
        })?;
    }
    Ok(result)
}

// -----------------------------------------------------------------------------
// Sequence recursion

/// Deserializes any source shape into a sequence target, preserving
/// source order exactly.
///
/// A mapping iterates as its keys (plain iteration order); a
/// non-iterable source is treated as a single-element sequence.
pub(super) fn deserialize_sequence_any(
    data: &Value,
    info: &ListInfo,
) -> Result<Box<dyn Any>, DeserializeError> {
    let keys_storage: Vec<Value>;
    let items: Vec<&Value> = match data {
        Value::Seq(items) => items.iter().collect(),
        Value::Map(entries) => {
            keys_storage = entries
                .iter()
                .map(|(k, _)| Value::Str(k.clone()))
                .collect();
            keys_storage.iter().collect()
        }
        other => vec![other],
    };

    let ops = info.ops();
    let mut result = (ops.make)();
    for (index, value) in items.into_iter().enumerate() {
        let label = format!("[{index}]");
        let elem_info = info.item_info().unwrap_or_else(untyped_info);
        let elem = deserialize_any(value, elem_info, &label)?;
        (ops.push)(result.as_mut(), elem).map_err(|mut err| {
            err.prepend(label);
            err
        })?;
    }
    Ok(result)
}

// -----------------------------------------------------------------------------
// Tuple recursion

/// Deserializes an iterable source positionally into a fixed tuple.
pub(super) fn deserialize_tuple(
    data: &Value,
    info: &TupleInfo,
) -> Result<Box<dyn Any>, DeserializeError> {
    let keys_storage: Vec<Value>;
    let items: Vec<&Value> = match data {
        Value::Seq(items) => items.iter().collect(),
        Value::Map(entries) => {
            keys_storage = entries
                .iter()
                .map(|(k, _)| Value::Str(k.clone()))
                .collect();
            keys_storage.iter().collect()
        }
        other if info.is_named() => {
            // A named fixed tuple spreads positionally and accepts
            // iterable sources only.
            return Err(DeserializeError::incompatible(
                other.kind().as_str(),
                info.ty().name(),
            ));
        }
        other => vec![other],
    };

    if items.len() != info.field_len() {
        return Err(DeserializeError::message(format!(
            "`{}` expects {} elements, got {}",
            info.ty().name(),
            info.field_len(),
            items.len(),
        )));
    }

    let mut elements = ElementBag::new();
    for (index, (value, field)) in items.into_iter().zip(info.fields()).enumerate() {
        let label = format!("[{index}]");
        elements.push(deserialize_any(value, field.type_info(), &label)?);
    }
    info.construct(&mut elements)
}

// -----------------------------------------------------------------------------
// Record recursion

/// Looks up a declared field in the source; `Map` entries resolve
/// first-seen, `Object` attributes last-seen, everything else is absent.
fn lookup<'a>(data: &'a Value, name: &str) -> Option<&'a Value> {
    match data {
        Value::Map(entries) => entries.iter().find(|(k, _)| k == name).map(|(_, v)| v),
        Value::Object(attrs) => attrs.iter().rev().find(|(k, _)| k == name).map(|(_, v)| v),
        _ => None,
    }
}

/// Deserializes every declared field, then constructs the record by
/// supplying all fields at once.
pub(super) fn deserialize_record(
    data: &Value,
    info: &StructInfo,
) -> Result<Box<dyn Any>, DeserializeError> {
    let mut fields = FieldBag::new();
    for field in info.iter() {
        let value = lookup(data, field.name()).unwrap_or(&NULL);
        let elem = deserialize_any(value, field.type_info(), field.name())?;
        fields.put(field.name(), elem);
    }
    info.construct(&mut fields)
}

// -----------------------------------------------------------------------------
// Object recursion

/// Instantiates with no arguments, then assigns discovered attributes
/// one by one; fields absent from the source keep their defaults.
pub(super) fn deserialize_object(
    data: &Value,
    info: &ObjectInfo,
) -> Result<Box<dyn Any>, DeserializeError> {
    let mut target = info.make();
    for field in info.iter() {
        let Some(value) = lookup(data, field.name()) else {
            continue;
        };
        match deserialize_any(value, field.type_info(), field.name())? {
            Some(elem) => {
                info.set(target.as_mut(), field.name(), elem)
                    .map_err(|mut err| {
                        err.prepend(field.name());
                        err
                    })?;
            }
            // An explicit null leaves the default in place.
            None => {}
        }
    }
    Ok(target)
}

// -----------------------------------------------------------------------------
// Data-driven recursion

/// Deduces the output shape purely from the data: primitives pass
/// through, mapping- and attribute-shaped data becomes a [`DynamicMap`],
/// iterable data a [`DynamicList`].
pub(super) fn deserialize_dynamic(data: &Value) -> Result<Box<dyn Any>, DeserializeError> {
    match data {
        Value::Bool(b) => Ok(Box::new(*b)),
        Value::Int(i) => Ok(Box::new(*i)),
        Value::Float(f) => Ok(Box::new(*f)),
        Value::Str(s) => Ok(Box::new(s.clone())),
        Value::Bytes(b) => Ok(Box::new(b.clone())),
        Value::Map(_) | Value::Object(_) => {
            let info = DynamicMap::type_info()
                .as_map()
                .ok_or_else(|| DeserializeError::message("dynamic map descriptor is not a map"))?;
            deserialize_mapping_any(data, info)
        }
        Value::Seq(_) => {
            let info = DynamicList::type_info()
                .as_list()
                .ok_or_else(|| DeserializeError::message("dynamic list descriptor is not a list"))?;
            deserialize_sequence_any(data, info)
        }
        // Null short-circuits in the dispatcher before reaching here.
        Value::Null => Err(DeserializeError::incompatible("none", "dynamic")),
    }
}
