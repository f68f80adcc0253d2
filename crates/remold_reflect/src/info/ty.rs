use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// Type

/// The identity of a Rust type: its [`TypeId`] plus a display name.
///
/// Every `*Info` descriptor carries one, so diagnostics can name the
/// target without re-deriving it from generics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Type {
    id: TypeId,
    name: &'static str,
}

impl Type {
    /// Returns the identity of `T`.
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the name with module segments stripped, for diagnostics.
    pub fn short_name(&self) -> &'static str {
        // Generic arguments keep their own paths; only the outermost
        // segment is trimmed.
        match self.name.split('<').next() {
            Some(head) => match head.rsplit("::").next() {
                Some(ident) => &self.name[head.len() - ident.len()..],
                None => self.name,
            },
            None => self.name,
        }
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Type;

    #[test]
    fn identity() {
        assert_eq!(Type::of::<i32>(), Type::of::<i32>());
        assert_ne!(Type::of::<i32>(), Type::of::<u32>());
        assert!(Type::of::<String>().is::<String>());
    }

    #[test]
    fn short_name_strips_modules() {
        assert_eq!(Type::of::<String>().short_name(), "String");
        assert_eq!(Type::of::<i32>().short_name(), "i32");
        assert!(Type::of::<Vec<String>>().short_name().starts_with("Vec<"));
    }
}
