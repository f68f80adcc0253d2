use core::any::Any;

use crate::info::Type;

// -----------------------------------------------------------------------------
// DynamicInfo

/// A container for targets whose shape follows the data.
///
/// Covers structurally-typed targets and the engine's data-driven
/// fallback: primitives pass through unchanged, mapping- and
/// attribute-shaped data becomes a [`DynamicMap`](crate::ops::DynamicMap),
/// iterable data a [`DynamicList`](crate::ops::DynamicList).
#[derive(Clone, Debug)]
pub struct DynamicInfo {
    ty: Type,
}

impl DynamicInfo {
    /// Creates a new [`DynamicInfo`].
    pub fn new<T: Any>() -> Self {
        Self { ty: Type::of::<T>() }
    }

    /// Returns the [`Type`] identity.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }
}
