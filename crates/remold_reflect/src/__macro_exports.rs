//! Helpers consumed by the code `#[derive(Remold)]` generates.
//!
//! Not public API; the module is exported for the macro's benefit only.

use core::any::Any;

use crate::error::DeserializeError;

/// Downcasts a deserialized field value to its declared type.
pub fn take_value<T: Any>(value: Box<dyn Any>, name: &str) -> Result<T, DeserializeError> {
    match value.downcast::<T>() {
        Ok(value) => Ok(*value),
        Err(_) => Err(DeserializeError::message(format!(
            "field `{name}` constructed with unexpected type (expected `{}`)",
            core::any::type_name::<T>(),
        ))),
    }
}
