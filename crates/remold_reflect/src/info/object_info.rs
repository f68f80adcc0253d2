use core::any::Any;

use crate::error::DeserializeError;
use crate::info::{NamedField, Type};

/// Assigns one deserialized value to the named field of the target.
pub type SetFieldFn = fn(&mut dyn Any, &str, Box<dyn Any>) -> Result<(), DeserializeError>;

// -----------------------------------------------------------------------------
// ObjectInfo

/// A container for compile-time plain-object info.
///
/// The object path applies to default-constructible types: the engine
/// instantiates with no arguments and assigns discovered attributes one by
/// one; fields absent from the source keep their default value. Declared
/// with `#[derive(Remold)]` and `#[remold(default)]`.
///
/// # Examples
///
/// ```
/// use remold_reflect::{derive::Remold, deserialize, Value};
///
/// #[derive(Remold, Default, Debug, PartialEq)]
/// #[remold(default)]
/// struct Settings {
///     level: i32,
///     label: String,
/// }
///
/// // `label` is missing from the source and keeps its default.
/// let data = Value::object([("level", Value::Int(3))]);
/// let settings: Settings = deserialize(&data).unwrap().unwrap();
///
/// assert_eq!(settings, Settings { level: 3, label: String::new() });
/// ```
#[derive(Clone, Debug)]
pub struct ObjectInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    make: fn() -> Box<dyn Any>,
    set: SetFieldFn,
}

impl ObjectInfo {
    /// Creates a new [`ObjectInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: Any>(
        fields: &[NamedField],
        make: fn() -> Box<dyn Any>,
        set: SetFieldFn,
    ) -> Self {
        Self {
            ty: Type::of::<T>(),
            fields: fields.to_vec().into_boxed_slice(),
            make,
            set,
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

    /// Returns an iterator over the fields in **declaration order**.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Instantiates the target with no arguments.
    #[inline]
    pub fn make(&self) -> Box<dyn Any> {
        (self.make)()
    }

    /// Assigns one deserialized value to the named field.
    #[inline]
    pub fn set(
        &self,
        target: &mut dyn Any,
        name: &str,
        value: Box<dyn Any>,
    ) -> Result<(), DeserializeError> {
        (self.set)(target, name, value)
    }
}
