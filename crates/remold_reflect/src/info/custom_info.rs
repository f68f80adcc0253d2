use core::any::Any;

use crate::error::DeserializeError;
use crate::info::Type;
use crate::interface::DeserializeInPlace;
use crate::value::Value;

// -----------------------------------------------------------------------------
// CustomInfo

/// A container for compile-time self-deserializing type info.
///
/// The vtable is filled from the [`DeserializeInPlace`] impl: `make`
/// instantiates with no arguments, `fill` hands the raw value to the
/// type's own hook.
#[derive(Clone, Debug)]
pub struct CustomInfo {
    ty: Type,
    make: fn() -> Box<dyn Any>,
    fill: fn(&mut dyn Any, &Value) -> Result<(), DeserializeError>,
}

impl CustomInfo {
    /// Creates a new [`CustomInfo`] from the type's interface impls.
    pub fn new<T: DeserializeInPlace + Any>() -> Self {
        Self {
            ty: Type::of::<T>(),
            make: || Box::new(T::default()),
            fill: |target, raw| match target.downcast_mut::<T>() {
                Some(target) => target.deserialize_in_place(raw),
                None => Err(DeserializeError::message(
                    "self-deserializing target has unexpected type",
                )),
            },
        }
    }

    /// Returns the [`Type`] identity.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Instantiates the target with no arguments.
    #[inline]
    pub fn make(&self) -> Box<dyn Any> {
        (self.make)()
    }

    /// Invokes the target's in-place hook with the raw value.
    #[inline]
    pub fn fill(&self, target: &mut dyn Any, raw: &Value) -> Result<(), DeserializeError> {
        (self.fill)(target, raw)
    }
}
