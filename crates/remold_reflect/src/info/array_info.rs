use core::any::Any;

use crate::info::Type;

// -----------------------------------------------------------------------------
// NdArrayInfo

/// A container for compile-time array-buffer info.
///
/// The family has no construction vtable of its own: conversion is fully
/// delegated to the `remold_ndarray` codec, and the engine fails with a
/// missing-capability error when that runtime is unavailable.
#[derive(Clone, Debug)]
pub struct NdArrayInfo {
    ty: Type,
}

impl NdArrayInfo {
    /// Creates a new [`NdArrayInfo`].
    pub fn new<T: Any>() -> Self {
        Self { ty: Type::of::<T>() }
    }

    /// Returns the [`Type`] identity.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }
}
