/*!
 * Map Lookup Helpers
 */

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Associative containers that can be searched by a (possibly borrowed) key
pub trait MapLookup<Q: ?Sized> {
    type Value;

    fn lookup(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, Q, S> MapLookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> MapLookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

/// Value stored under `key`, or `default` when the key is absent
///
/// ```
/// use bubbles::get_or_default;
/// use std::collections::HashMap;
///
/// let ports: HashMap<String, u16> = [("http".to_string(), 80)].into_iter().collect();
/// assert_eq!(get_or_default(&ports, "http", 0), 80);
/// assert_eq!(get_or_default(&ports, "gopher", 70), 70);
/// ```
#[inline]
pub fn get_or_default<M, Q>(map: &M, key: &Q, default: M::Value) -> M::Value
where
    M: MapLookup<Q> + ?Sized,
    M::Value: Clone,
    Q: ?Sized,
{
    map.lookup(key).cloned().unwrap_or(default)
}

/// Like [`get_or_default`], computing the fallback only when needed
#[inline]
pub fn get_or_else<M, Q, F>(map: &M, key: &Q, fallback: F) -> M::Value
where
    M: MapLookup<Q> + ?Sized,
    M::Value: Clone,
    Q: ?Sized,
    F: FnOnce() -> M::Value,
{
    map.lookup(key).cloned().unwrap_or_else(fallback)
}
