use core::any::Any;
use std::collections::BTreeMap;
use std::collections::HashMap as StdHashMap;

use remold_utils::hash::{FixedHashState, HashMap as FastHashMap};

use crate::error::DeserializeError;
use crate::impls::GenericTypeInfoCell;
use crate::info::{ListInfo, ListOps, MapInfo, MapOps, OptionalInfo, TypeInfo, Typed};
use crate::ops::downcast_target;

/// Unwraps a deserialized element, rejecting explicit nulls for targets
/// that cannot represent them.
fn require_element<T: Any>(value: Option<Box<dyn Any>>) -> Result<T, DeserializeError> {
    let Some(boxed) = value else {
        return Err(DeserializeError::incompatible(
            "none",
            core::any::type_name::<T>(),
        ));
    };
    match boxed.downcast::<T>() {
        Ok(value) => Ok(*value),
        Err(_) => Err(DeserializeError::message(format!(
            "element constructed with unexpected type (expected `{}`)",
            core::any::type_name::<T>(),
        ))),
    }
}

// -----------------------------------------------------------------------------
// Sequences

fn vec_push<T: Typed>(
    target: &mut dyn Any,
    value: Option<Box<dyn Any>>,
) -> Result<(), DeserializeError> {
    let vec = downcast_target::<Vec<T>>(target)?;
    vec.push(require_element::<T>(value)?);
    Ok(())
}

impl<T: Typed> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::List(ListInfo::new::<Self, T>(ListOps {
                make: || Box::new(Vec::<T>::new()),
                push: vec_push::<T>,
            }))
        })
    }
}

// -----------------------------------------------------------------------------
// Mappings

// One insertion pair per concrete map type: the engine picks
// `insert_absent` for items-shaped sources (first-seen wins) and `insert`
// for attribute-shaped sources (last-seen wins).
macro_rules! impl_typed_map {
    ($absent:ident, $assign:ident, $map:ident $(, $state:ty)?) => {
        fn $absent<V: Typed>(
            target: &mut dyn Any,
            key: &str,
            value: Option<Box<dyn Any>>,
        ) -> Result<(), DeserializeError> {
            let map = downcast_target::<$map<String, V $(, $state)?>>(target)?;
            let value = require_element::<V>(value)?;
            map.entry(key.to_owned()).or_insert(value);
            Ok(())
        }

        fn $assign<V: Typed>(
            target: &mut dyn Any,
            key: &str,
            value: Option<Box<dyn Any>>,
        ) -> Result<(), DeserializeError> {
            let map = downcast_target::<$map<String, V $(, $state)?>>(target)?;
            map.insert(key.to_owned(), require_element::<V>(value)?);
            Ok(())
        }

        impl<V: Typed> Typed for $map<String, V $(, $state)?> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::Map(MapInfo::new::<Self, V>(MapOps {
                        make: || Box::new(<$map<String, V $(, $state)?>>::default()),
                        insert_absent: $absent::<V>,
                        insert: $assign::<V>,
                    }))
                })
            }
        }
    };
}

impl_typed_map!(std_hash_absent, std_hash_assign, StdHashMap);
impl_typed_map!(btree_absent, btree_assign, BTreeMap);
impl_typed_map!(fast_hash_absent, fast_hash_assign, FastHashMap, FixedHashState);

// -----------------------------------------------------------------------------
// Optional

fn option_wrap<T: Typed>(
    inner: Option<Box<dyn Any>>,
) -> Result<Box<dyn Any>, DeserializeError> {
    match inner {
        None => Ok(Box::new(None::<T>)),
        Some(boxed) => match boxed.downcast::<T>() {
            Ok(value) => Ok(Box::new(Some(*value))),
            Err(_) => Err(DeserializeError::message(format!(
                "optional inner value has unexpected type (expected `{}`)",
                core::any::type_name::<T>(),
            ))),
        },
    }
}

impl<T: Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Optional(OptionalInfo::new::<Self, T>(option_wrap::<T>))
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::info::{TypeKind, Typed};

    #[test]
    fn container_kinds() {
        assert_eq!(<Vec<i32>>::type_info().kind(), TypeKind::List);
        assert_eq!(
            <std::collections::HashMap<String, i32>>::type_info().kind(),
            TypeKind::Map,
        );
        assert_eq!(<Option<String>>::type_info().kind(), TypeKind::Optional);
    }

    #[test]
    fn generic_cell_distinguishes_instantiations() {
        let a = <Vec<i32>>::type_info();
        let b = <Vec<String>>::type_info();
        assert!(!core::ptr::eq(a, b));
        assert_ne!(a.ty(), b.ty());
    }
}
