use core::any::{Any, TypeId};

use crate::info::{InfoFn, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct or object) field.
///
/// # Examples
///
/// ```
/// use remold_reflect::{derive::Remold, info::Typed};
///
/// #[derive(Remold)]
/// struct Foo {
///     field_a: f32,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let field = info.field_at(0).unwrap();
///
/// assert!(field.type_is::<f32>());
/// assert_eq!(field.name(), "field_a");
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: InfoFn,
}

impl NamedField {
    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

// -----------------------------------------------------------------------------
// UnnamedField

/// Information for an unnamed (tuple) field.
///
/// # Examples
///
/// ```
/// use remold_reflect::{derive::Remold, info::Typed};
///
/// #[derive(Remold)]
/// struct Foo(f32);
///
/// let info = Foo::type_info().as_tuple().unwrap();
/// let field = info.field_at(0).unwrap();
///
/// assert!(field.type_is::<f32>());
/// assert_eq!(field.index(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct UnnamedField {
    ty_id: TypeId,
    index: usize,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: InfoFn,
}

impl UnnamedField {
    /// Creates a new [`UnnamedField`] for the field at `index` with type `T`.
    #[inline]
    pub const fn new<T: Typed>(index: usize) -> Self {
        Self {
            index,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field index (position in the tuple).
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
