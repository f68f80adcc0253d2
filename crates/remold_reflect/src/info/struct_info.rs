use core::any::Any;

use crate::error::DeserializeError;
use crate::info::{NamedField, Type};
use crate::ops::FieldBag;

/// Builds the concrete record from a filled [`FieldBag`], supplying all
/// fields at once.
pub type ConstructFn = fn(&mut FieldBag) -> Result<Box<dyn Any>, DeserializeError>;

// -----------------------------------------------------------------------------
// StructInfo

/// A container for compile-time record (named struct) info.
///
/// A record target is built in one step: every declared field is
/// deserialized into the bag first, then `construct` consumes the bag and
/// produces the whole value.
///
/// # Examples
///
/// ```rust
/// use remold_reflect::{derive::Remold, info::Typed};
///
/// #[derive(Remold)]
/// struct A {
///     val: f32,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 1);
/// assert_eq!(info.index_of("val"), Some(0));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    construct: ConstructFn,
}

impl StructInfo {
    /// Creates a new [`StructInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: Any>(fields: &[NamedField], construct: ConstructFn) -> Self {
        Self {
            ty: Type::of::<T>(),
            fields: fields.to_vec().into_boxed_slice(),
            construct,
        }
    }

    /// Returns the [`Type`] identity.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the index for the given field `name`, if present.
    ///
    /// This is O(N) complexity.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Builds the record from a filled [`FieldBag`].
    #[inline]
    pub fn construct(&self, fields: &mut FieldBag) -> Result<Box<dyn Any>, DeserializeError> {
        (self.construct)(fields)
    }
}
