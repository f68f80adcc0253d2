use core::any::Any;

use crate::error::DeserializeError;
use crate::info::{InfoFn, Type, TypeInfo};

// -----------------------------------------------------------------------------
// ListOps

/// The insertion capability table a sequence adapter must provide.
///
/// Elements arrive in source order and are appended at the current end.
/// A `None` element is the deserialized form of an explicit null; adapters
/// that cannot represent it report the incompatibility themselves.
#[derive(Clone, Copy, Debug)]
pub struct ListOps {
    /// Constructs an empty instance of the sequence.
    pub make: fn() -> Box<dyn Any>,
    /// Appends one element at the current end.
    pub push: fn(&mut dyn Any, Option<Box<dyn Any>>) -> Result<(), DeserializeError>,
}

// -----------------------------------------------------------------------------
// ListInfo

/// A container for compile-time sequence info.
///
/// # Examples
///
/// ```
/// use remold_reflect::info::Typed;
///
/// let info = <Vec<i32> as Typed>::type_info().as_list().unwrap();
/// assert!(info.item_info().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    // `None` marks an unparametrized sequence: element types are then
    // deduced from the data itself.
    item_info: Option<InfoFn>,
    ops: ListOps,
}

impl ListInfo {
    /// Creates a new [`ListInfo`] with an item element binding.
    pub fn new<TList: Any, TItem: crate::info::Typed>(ops: ListOps) -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_info: Some(TItem::type_info),
            ops,
        }
    }

    /// Creates a new [`ListInfo`] without an item element binding.
    pub fn untyped<TList: Any>(ops: ListOps) -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_info: None,
            ops,
        }
    }

    /// Returns the [`Type`] identity.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the item element's [`TypeInfo`], if parametrized.
    #[inline]
    pub fn item_info(&self) -> Option<&'static TypeInfo> {
        self.item_info.map(|f| f())
    }

    /// Returns the insertion capability table.
    #[inline]
    pub const fn ops(&self) -> &ListOps {
        &self.ops
    }
}
