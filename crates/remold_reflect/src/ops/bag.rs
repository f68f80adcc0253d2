use core::any::Any;

use remold_utils::hash::HashMap;

use crate::error::{DeserializeError, ErrorKind};

/// Downcasts a vtable's `&mut dyn Any` target to its concrete container.
///
/// The engine always passes the container the vtable was built for, so a
/// mismatch means a broken `Typed` impl rather than bad input.
pub(crate) fn downcast_target<T: Any>(target: &mut dyn Any) -> Result<&mut T, DeserializeError> {
    target.downcast_mut::<T>().ok_or_else(|| {
        DeserializeError::message(format!(
            "container vtable received unexpected target (expected `{}`)",
            core::any::type_name::<T>(),
        ))
    })
}

// -----------------------------------------------------------------------------
// FieldBag

/// The staging area for record construction.
///
/// The engine deserializes every declared field into the bag, then the
/// generated constructor takes them out by name, all at once. An entry
/// holding `None` (or missing entirely) is an absent field: taking it as
/// a required value reports
/// [`ErrorKind::MissingField`](crate::ErrorKind::MissingField).
#[derive(Default)]
pub struct FieldBag {
    entries: HashMap<&'static str, Option<Box<dyn Any>>>,
}

impl FieldBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self {
            entries: HashMap::default(),
        }
    }

    /// Stores the deserialized value for a field.
    pub fn put(&mut self, name: &'static str, value: Option<Box<dyn Any>>) {
        self.entries.insert(name, value);
    }

    /// Takes the required field `name` as `T`.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::MissingField`](crate::ErrorKind::MissingField) when
    /// the field is absent or null; a wrapped message when the stored
    /// value has an unexpected type.
    pub fn take<T: Any>(&mut self, name: &str) -> Result<T, DeserializeError> {
        match self.entries.remove(name) {
            Some(Some(boxed)) => match boxed.downcast::<T>() {
                Ok(value) => Ok(*value),
                Err(_) => Err(DeserializeError::message(format!(
                    "field `{name}` constructed with unexpected type (expected `{}`)",
                    core::any::type_name::<T>(),
                ))),
            },
            Some(None) | None => Err(DeserializeError::new(ErrorKind::MissingField(name.into()))),
        }
    }
}

// -----------------------------------------------------------------------------
// ElementBag

/// The staging area for fixed-tuple construction, indexed by position.
#[derive(Default)]
pub struct ElementBag {
    values: Vec<Option<Box<dyn Any>>>,
}

impl ElementBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Appends the deserialized value for the next position.
    pub fn push(&mut self, value: Option<Box<dyn Any>>) {
        self.values.push(value);
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the bag holds no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Takes the required element at `index` as `T`.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::MissingField`](crate::ErrorKind::MissingField) when
    /// the position is absent or null; a wrapped message when the stored
    /// value has an unexpected type.
    pub fn take_at<T: Any>(&mut self, index: usize) -> Result<T, DeserializeError> {
        match self.values.get_mut(index).and_then(Option::take) {
            Some(boxed) => match boxed.downcast::<T>() {
                Ok(value) => Ok(*value),
                Err(_) => Err(DeserializeError::message(format!(
                    "element [{index}] constructed with unexpected type (expected `{}`)",
                    core::any::type_name::<T>(),
                ))),
            },
            None => Err(DeserializeError::new(ErrorKind::MissingField(format!(
                "[{index}]"
            )))),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{ElementBag, FieldBag};
    use crate::error::ErrorKind;

    #[test]
    fn field_round_trip() {
        let mut bag = FieldBag::new();
        bag.put("a", Some(Box::new(7_i32)));
        assert_eq!(bag.take::<i32>("a").unwrap(), 7);

        let err = bag.take::<i32>("a").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MissingField("a".into()));
    }

    #[test]
    fn element_round_trip() {
        let mut bag = ElementBag::new();
        bag.push(Some(Box::new("x".to_owned())));
        bag.push(None);

        assert_eq!(bag.take_at::<String>(0).unwrap(), "x");
        assert!(bag.take_at::<String>(1).is_err());
        assert!(bag.take_at::<String>(9).is_err());
    }
}
