use core::any::Any;

use crate::error::DeserializeError;
use crate::info::{Type, UnnamedField};
use crate::ops::ElementBag;

/// Builds the concrete tuple from a filled [`ElementBag`].
pub type TupleConstructFn = fn(&mut ElementBag) -> Result<Box<dyn Any>, DeserializeError>;

// -----------------------------------------------------------------------------
// TupleInfo

/// A container for compile-time fixed-tuple info.
///
/// Covers both plain tuples (`(A, B)`) and *named* fixed tuples — tuple
/// structs, where the positional constructor carries the type's name. The
/// distinction matters for non-iterable sources: a plain tuple wraps the
/// value as a single-element sequence first, a named tuple rejects it.
///
/// # Examples
///
/// ```
/// use remold_reflect::info::Typed;
///
/// let info = <(i32, String) as Typed>::type_info().as_tuple().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert!(!info.is_named());
/// ```
#[derive(Clone, Debug)]
pub struct TupleInfo {
    ty: Type,
    named: bool,
    fields: Box<[UnnamedField]>,
    construct: TupleConstructFn,
}

impl TupleInfo {
    /// Creates a new [`TupleInfo`] for a plain tuple.
    pub fn new<T: Any>(fields: &[UnnamedField], construct: TupleConstructFn) -> Self {
        Self {
            ty: Type::of::<T>(),
            named: false,
            fields: fields.to_vec().into_boxed_slice(),
            construct,
        }
    }

    /// Creates a new [`TupleInfo`] for a named fixed tuple (tuple struct).
    pub fn named<T: Any>(fields: &[UnnamedField], construct: TupleConstructFn) -> Self {
        Self {
            ty: Type::of::<T>(),
            named: true,
            fields: fields.to_vec().into_boxed_slice(),
            construct,
        }
    }

    /// Returns the [`Type`] identity.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns whether this is a named fixed tuple.
    #[inline]
    pub const fn is_named(&self) -> bool {
        self.named
    }

    /// Returns the fields in positional order.
    #[inline]
    pub fn fields(&self) -> &[UnnamedField] {
        &self.fields
    }

    /// Returns the [`UnnamedField`] at the given index, if present.
    pub fn field_at(&self, index: usize) -> Option<&UnnamedField> {
        self.fields.get(index)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Builds the tuple from a filled [`ElementBag`].
    #[inline]
    pub fn construct(&self, elements: &mut ElementBag) -> Result<Box<dyn Any>, DeserializeError> {
        (self.construct)(elements)
    }
}
