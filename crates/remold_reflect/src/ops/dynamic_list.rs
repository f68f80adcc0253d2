use core::any::Any;
use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ListInfo, ListOps, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// Dynamic List

/// A dynamic container representing a sequence.
///
/// `DynamicList` stores type-erased elements in source order; an element
/// holding `None` represents an explicit null. It is the sequence the
/// engine produces when the data is iterable but no concrete target type
/// is known.
///
/// # Examples
///
/// ```
/// use remold_reflect::ops::DynamicList;
///
/// let mut list = DynamicList::new();
/// list.push(Some(Box::new(1_i64)));
/// list.push(Some(Box::new("two".to_owned())));
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get_as::<i64>(0), Some(&1));
/// assert_eq!(list.get_as::<String>(1).map(String::as_str), Some("two"));
/// ```
#[derive(Default)]
pub struct DynamicList {
    values: Vec<Option<Box<dyn Any>>>,
}

impl Typed for DynamicList {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::List(ListInfo::untyped::<Self>(ListOps {
                make: || Box::new(Self::new()),
                push: |target, value| {
                    super::bag::downcast_target::<Self>(target)?.push(value);
                    Ok(())
                },
            }))
        })
    }
}

impl DynamicList {
    /// Creates an empty `DynamicList`.
    #[inline]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends an element at the current end.
    #[inline]
    pub fn push(&mut self, value: Option<Box<dyn Any>>) {
        self.values.push(value);
    }

    /// Returns the type-erased element at `index`, if present and non-null.
    pub fn get(&self, index: usize) -> Option<&dyn Any> {
        self.values.get(index).and_then(|v| v.as_deref())
    }

    /// Returns the element at `index` downcast to `T`.
    pub fn get_as<T: Any>(&self, index: usize) -> Option<&T> {
        self.get(index).and_then(<dyn Any>::downcast_ref)
    }

    /// Returns whether the element at `index` is an explicit null.
    pub fn is_null(&self, index: usize) -> bool {
        matches!(self.values.get(index), Some(None))
    }

    /// Returns the elements in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Option<&dyn Any>> {
        self.values.iter().map(|v| v.as_deref())
    }
}

impl fmt::Debug for DynamicList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for value in &self.values {
            match value {
                Some(_) => list.entry(&"<any>"),
                None => list.entry(&"<null>"),
            };
        }
        list.finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::DynamicList;

    #[test]
    fn push_preserves_order() {
        let mut list = DynamicList::new();
        for v in [3_i64, 1, 2] {
            list.push(Some(Box::new(v)));
        }
        let values: Vec<_> = (0..3).map(|i| *list.get_as::<i64>(i).unwrap()).collect();
        assert_eq!(values, [3, 1, 2]);
    }

    #[test]
    fn null_elements() {
        let mut list = DynamicList::new();
        list.push(None);
        assert!(list.is_null(0));
        assert!(list.get(0).is_none());
    }
}
