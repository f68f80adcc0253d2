use core::any::TypeId;
use core::fmt::Debug;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A specialized map container with [`TypeId`] as the fixed key type.
///
/// [`TypeId`] is already a high-quality hash, so the map uses a
/// pass-through hasher ([`NoOpHashState`]) instead of rehashing it.
///
/// The container's interface is fully abstracted, exposing no [`HashMap`]
/// specific APIs. This allows for potential future changes to the underlying
/// implementation without breaking external code.
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty `TypeIdMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use remold_utils::TypeIdMap;
    /// let map = TypeIdMap::<i32>::new();
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Creates an empty `TypeIdMap` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity_and_hasher(capacity, NoOpHashState))
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the value for the given key, if present.
    #[inline]
    pub fn get(&self, key: &TypeId) -> Option<&V> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value for the given key, if present.
    #[inline]
    pub fn get_mut(&mut self, key: &TypeId) -> Option<&mut V> {
        self.0.get_mut(key)
    }

    /// Inserts a key-value pair, returning the previous value if the key
    /// was already present.
    #[inline]
    pub fn insert(&mut self, key: TypeId, value: V) -> Option<V> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value for `key`, inserting the value
    /// produced by `f` first if the key is absent.
    pub fn get_or_insert(&mut self, key: TypeId, f: impl FnOnce() -> V) -> &V {
        self.0.entry(key).or_insert_with(f)
    }

    /// Removes the value for the given key, returning it if present.
    #[inline]
    pub fn remove(&mut self, key: &TypeId) -> Option<V> {
        self.0.remove(key)
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::TypeIdMap;
    use core::any::TypeId;

    #[test]
    fn insert_and_get() {
        let mut map = TypeIdMap::new();
        map.insert(TypeId::of::<i32>(), 1);
        map.insert(TypeId::of::<u32>(), 2);

        assert_eq!(map.get(&TypeId::of::<i32>()), Some(&1));
        assert_eq!(map.get(&TypeId::of::<u32>()), Some(&2));
        assert_eq!(map.get(&TypeId::of::<i64>()), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn get_or_insert() {
        let mut map = TypeIdMap::new();
        assert_eq!(*map.get_or_insert(TypeId::of::<i32>(), || 1), 1);
        // A present key keeps the first value.
        assert_eq!(*map.get_or_insert(TypeId::of::<i32>(), || 2), 1);
    }
}
