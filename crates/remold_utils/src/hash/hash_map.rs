//! A [`HashMap`] alias with a fixed default hash state.

use crate::hash::FixedHashState;

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// Hash results depend only on the inserted keys, so iteration order and
/// collision behavior are reproducible between runs.
///
/// # Examples
///
/// ```
/// use remold_utils::hash::HashMap;
///
/// let mut map: HashMap<&str, i32> = HashMap::default();
/// map.insert("a", 1);
///
/// assert_eq!(map.get("a"), Some(&1));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;
