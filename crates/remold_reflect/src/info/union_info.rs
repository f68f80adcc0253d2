use core::any::Any;

use crate::error::DeserializeError;
use crate::info::{InfoFn, Type, TypeInfo};

// -----------------------------------------------------------------------------
// OptionalInfo

/// A container for compile-time optional info: a union of exactly one
/// concrete alternative and null.
///
/// `Optional` is the only union shape the engine deduces. Null data is
/// reified as the target's own `None` rather than propagated as engine
/// absence, so optional fields inside records always construct.
#[derive(Clone, Debug)]
pub struct OptionalInfo {
    ty: Type,
    some: InfoFn,
    wrap: fn(Option<Box<dyn Any>>) -> Result<Box<dyn Any>, DeserializeError>,
}

impl OptionalInfo {
    /// Creates a new [`OptionalInfo`].
    ///
    /// `wrap` receives the deserialized inner value (or `None` for null
    /// data) and produces the concrete optional target.
    pub fn new<TOptional: Any, TSome: crate::info::Typed>(
        wrap: fn(Option<Box<dyn Any>>) -> Result<Box<dyn Any>, DeserializeError>,
    ) -> Self {
        Self {
            ty: Type::of::<TOptional>(),
            some: TSome::type_info,
            wrap,
        }
    }

    /// Returns the [`Type`] identity.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the single non-null alternative's [`TypeInfo`].
    #[inline]
    pub fn some_info(&self) -> &'static TypeInfo {
        (self.some)()
    }

    /// Wraps a deserialized inner value into the concrete optional.
    #[inline]
    pub fn wrap(&self, inner: Option<Box<dyn Any>>) -> Result<Box<dyn Any>, DeserializeError> {
        (self.wrap)(inner)
    }
}

// -----------------------------------------------------------------------------
// UnionInfo

/// A container for compile-time union info with two or more non-null
/// alternatives.
///
/// The engine supports optional-of-one-type only, never discriminated
/// unions: after the null branch is stripped, a descriptor still naming
/// two or more alternatives fails with
/// [`ErrorKind::UnionAmbiguity`](crate::ErrorKind::UnionAmbiguity), while
/// exactly one remaining alternative is dispatched directly. The variant
/// exists so hand-built hints can express what they were asked for and
/// get the documented rejection.
#[derive(Clone, Debug)]
pub struct UnionInfo {
    ty: Type,
    alternatives: Box<[InfoFn]>,
    nullable: bool,
}

impl UnionInfo {
    /// Creates a new [`UnionInfo`] over the non-null alternatives.
    ///
    /// `T` is the marker type giving the hint its identity. `nullable`
    /// records a stripped null branch.
    pub fn new<T: Any>(alternatives: &[InfoFn], nullable: bool) -> Self {
        Self {
            ty: Type::of::<T>(),
            alternatives: alternatives.to_vec().into_boxed_slice(),
            nullable,
        }
    }

    /// Returns the [`Type`] identity.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the non-null alternatives.
    pub fn alternatives(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> {
        self.alternatives.iter().map(|f| f())
    }

    /// Returns the number of non-null alternatives.
    #[inline]
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns `true` when no non-null alternative remains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Returns whether a null branch was stripped.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }
}
