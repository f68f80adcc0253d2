use core::any::Any;

use crate::error::DeserializeError;
use crate::info::{InfoFn, Type, TypeInfo};

// -----------------------------------------------------------------------------
// MapOps

/// The insertion capability table a mapping adapter must provide.
///
/// Both insertion flavors exist because the two mapping-shaped sources
/// merge differently: items-shaped entries keep the first-seen value,
/// attribute-shaped entries keep the last-seen one. A `None` value is the
/// deserialized form of an explicit null entry; adapters that cannot
/// represent it report the incompatibility themselves.
#[derive(Clone, Copy, Debug)]
pub struct MapOps {
    /// Constructs an empty instance of the mapping.
    pub make: fn() -> Box<dyn Any>,
    /// Inserts only when the key is absent (first-seen wins).
    pub insert_absent: fn(&mut dyn Any, &str, Option<Box<dyn Any>>) -> Result<(), DeserializeError>,
    /// Inserts unconditionally (last-seen wins).
    pub insert: fn(&mut dyn Any, &str, Option<Box<dyn Any>>) -> Result<(), DeserializeError>,
}

// -----------------------------------------------------------------------------
// MapInfo

/// A container for compile-time mapping info.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use remold_reflect::info::Typed;
///
/// let info = <HashMap<String, i32> as Typed>::type_info().as_map().unwrap();
/// assert!(info.value_info().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    // `None` marks an unparametrized mapping: element types are then
    // deduced from the data itself.
    value_info: Option<InfoFn>,
    ops: MapOps,
}

impl MapInfo {
    /// Creates a new [`MapInfo`] with a value element binding.
    pub fn new<TMap: Any, TValue: crate::info::Typed>(ops: MapOps) -> Self {
        Self {
            ty: Type::of::<TMap>(),
            value_info: Some(TValue::type_info),
            ops,
        }
    }

    /// Creates a new [`MapInfo`] without a value element binding.
    pub fn untyped<TMap: Any>(ops: MapOps) -> Self {
        Self {
            ty: Type::of::<TMap>(),
            value_info: None,
            ops,
        }
    }

    /// Returns the [`Type`] identity.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the value element's [`TypeInfo`], if parametrized.
    #[inline]
    pub fn value_info(&self) -> Option<&'static TypeInfo> {
        self.value_info.map(|f| f())
    }

    /// Returns the insertion capability table.
    #[inline]
    pub const fn ops(&self) -> &MapOps {
        &self.ops
    }
}
