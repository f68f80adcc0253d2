use core::any::Any;

use crate::info::Type;
use crate::value::Value;

// -----------------------------------------------------------------------------
// VariantInfo

/// Information for one unit variant of an enumeration.
#[derive(Clone, Debug)]
pub struct VariantInfo {
    name: &'static str,
    value: i64,
}

impl VariantInfo {
    /// Creates a new [`VariantInfo`] with the variant's discriminant value.
    #[inline]
    pub const fn new(name: &'static str, value: i64) -> Self {
        Self { name, value }
    }

    /// Returns the variant name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the discriminant value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

// -----------------------------------------------------------------------------
// EnumInfo

/// A container for compile-time enumeration info.
///
/// An enumeration target is built from the member whose *value* equals
/// the data: an integer source matches discriminants, a text source
/// matches variant names (the textual value of a unit variant).
///
/// # Examples
///
/// ```
/// use remold_reflect::{derive::Remold, deserialize, Value};
///
/// #[derive(Remold, Debug, PartialEq)]
/// enum Color {
///     Red = 1,
///     Green = 2,
/// }
///
/// assert_eq!(deserialize::<Color>(&Value::Int(2)).unwrap(), Some(Color::Green));
/// assert_eq!(deserialize::<Color>(&Value::from("Red")).unwrap(), Some(Color::Red));
/// ```
#[derive(Clone, Debug)]
pub struct EnumInfo {
    ty: Type,
    variants: Box<[VariantInfo]>,
    from_value: fn(&Value) -> Option<Box<dyn Any>>,
}

impl EnumInfo {
    /// Creates a new [`EnumInfo`].
    ///
    /// The order of internal variants is fixed, depends on the input order.
    pub fn new<T: Any>(
        variants: &[VariantInfo],
        from_value: fn(&Value) -> Option<Box<dyn Any>>,
    ) -> Self {
        Self {
            ty: Type::of::<T>(),
            variants: variants.to_vec().into_boxed_slice(),
            from_value,
        }
    }

    /// Returns the [`Type`] identity.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the variants in declaration order.
    #[inline]
    pub fn variants(&self) -> &[VariantInfo] {
        &self.variants
    }

    /// Returns the [`VariantInfo`] for the given `name`, if present.
    pub fn variant(&self, name: &str) -> Option<&VariantInfo> {
        self.variants.iter().find(|v| v.name() == name)
    }

    /// Builds the member whose value equals `data`, `None` on no match.
    #[inline]
    pub fn from_value(&self, data: &Value) -> Option<Box<dyn Any>> {
        (self.from_value)(data)
    }
}
