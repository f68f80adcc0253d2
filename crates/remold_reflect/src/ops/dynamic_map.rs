use core::any::Any;
use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{MapInfo, MapOps, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// Dynamic Map

/// A dynamic container representing a string-keyed mapping.
///
/// `DynamicMap` preserves insertion order and stores type-erased values;
/// an entry holding `None` represents an explicit null. It is the mapping
/// the engine produces when the data is mapping-shaped but no concrete
/// target type is known.
///
/// # Examples
///
/// ```
/// use remold_reflect::ops::DynamicMap;
///
/// let mut map = DynamicMap::new();
/// map.insert("a", Some(Box::new(1_i64)));
/// map.insert("b", None);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get_as::<i64>("a"), Some(&1));
/// assert!(map.is_null("b"));
/// ```
#[derive(Default)]
pub struct DynamicMap {
    entries: Vec<(String, Option<Box<dyn Any>>)>,
}

impl Typed for DynamicMap {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Map(MapInfo::untyped::<Self>(MapOps {
                make: || Box::new(Self::new()),
                insert_absent: |target, key, value| {
                    let map = super::bag::downcast_target::<Self>(target)?;
                    map.insert_absent(key, value);
                    Ok(())
                },
                insert: |target, key, value| {
                    let map = super::bag::downcast_target::<Self>(target)?;
                    map.insert(key, value);
                    Ok(())
                },
            }))
        })
    }
}

impl DynamicMap {
    /// Creates an empty `DynamicMap`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts unconditionally, replacing any present value (last-seen
    /// wins).
    pub fn insert(&mut self, key: impl Into<String>, value: Option<Box<dyn Any>>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Inserts only when the key is absent (first-seen wins).
    pub fn insert_absent(&mut self, key: impl Into<String>, value: Option<Box<dyn Any>>) {
        let key = key.into();
        if !self.contains_key(&key) {
            self.entries.push((key, value));
        }
    }

    /// Returns whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Returns the type-erased value for `key`, if present and non-null.
    pub fn get(&self, key: &str) -> Option<&dyn Any> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Returns the value for `key` downcast to `T`.
    pub fn get_as<T: Any>(&self, key: &str) -> Option<&T> {
        self.get(key).and_then(<dyn Any>::downcast_ref)
    }

    /// Returns whether `key` is present with an explicit null value.
    pub fn is_null(&self, key: &str) -> bool {
        self.entries
            .iter()
            .any(|(k, v)| k == key && v.is_none())
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, Option<&dyn Any>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl fmt::Debug for DynamicMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.entries {
            match value {
                Some(_) => map.entry(key, &"<any>"),
                None => map.entry(key, &"<null>"),
            };
        }
        map.finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::DynamicMap;

    #[test]
    fn merge_flavors() {
        let mut map = DynamicMap::new();
        map.insert_absent("k", Some(Box::new(1_i64)));
        map.insert_absent("k", Some(Box::new(2_i64)));
        assert_eq!(map.get_as::<i64>("k"), Some(&1));

        map.insert("k", Some(Box::new(3_i64)));
        assert_eq!(map.get_as::<i64>("k"), Some(&3));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut map = DynamicMap::new();
        map.insert("b", None);
        map.insert("a", None);
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["b", "a"]);
    }
}
