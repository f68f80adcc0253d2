//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed):
//!
//! - [`NonGenericTypeInfoCell`]: one [`OnceLock`] per non-generic type,
//!   almost no additional expense.
//! - [`GenericTypeInfoCell`]: the `static CELL` inside a generic impl is
//!   shared by every instantiation, so the cell keys leaked entries by
//!   [`TypeId`] behind an [`RwLock`].

use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use remold_utils::TypeIdMap;

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// Container for static storage of non-generic type information.
///
/// ## Example
///
/// ```
/// use remold_reflect::impls::NonGenericTypeInfoCell;
/// use remold_reflect::info::{DynamicInfo, TypeInfo, Typed};
///
/// struct A;
///
/// impl Typed for A {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Dynamic(DynamicInfo::new::<A>()))
///     }
/// }
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the `TypeInfo` stored in the cell.
    ///
    /// If there is no entry found, a new one will be generated from the
    /// given function.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

impl Default for NonGenericTypeInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// GenericTypeInfoCell

/// Container for static storage of type information with generics.
///
/// If the type contains generics, the `static CELL` in the function may be
/// shared by multiple types, therefore the interior of the container is a
/// [`TypeIdMap`] wrapped in [`RwLock`], and entries are leaked to obtain
/// the `'static` lifetime.
///
/// ## Example
///
/// ```
/// use remold_reflect::impls::GenericTypeInfoCell;
/// use remold_reflect::info::{DynamicInfo, TypeInfo, Typed};
///
/// struct A<T>(T);
///
/// impl<T: Typed> Typed for A<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Dynamic(DynamicInfo::new::<Self>()))
///     }
/// }
/// ```
pub struct GenericTypeInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns a reference to the `TypeInfo` stored in the cell.
    ///
    /// This method will then return the correct `TypeInfo` reference for
    /// the given type `G`. If there is no entry found, a new one will be
    /// generated from the given function.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &'static TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &'static TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &'static TypeInfo {
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

impl Default for GenericTypeInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
