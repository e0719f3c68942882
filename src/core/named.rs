/*!
 * Named Values
 * Strict typedefs: a value wrapped under a distinguishing tag type
 */

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A value of type `T` that only converts to and from `T` explicitly
///
/// Two `NamedValue`s over the same `T` but different tags are different
/// types, so arguments cannot be swapped by accident:
///
/// ```
/// use bubbles::NamedValue;
///
/// struct HeightTag;
/// struct WidthTag;
/// type Height = NamedValue<f64, HeightTag>;
/// type Width = NamedValue<f64, WidthTag>;
///
/// fn area(h: Height, w: Width) -> f64 {
///     h.get() * w.get()
/// }
///
/// assert_eq!(area(Height::new(2.0), Width::new(3.0)), 6.0);
/// ```
///
/// Comparison, ordering and hashing use the wrapped value and place no
/// requirement on `Tag`. Serializes as the bare value.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct NamedValue<T, Tag> {
    value: T,
    #[serde(skip)]
    _tag: PhantomData<fn() -> Tag>,
}

impl<T, Tag> NamedValue<T, Tag> {
    /// Wrap a value
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Borrow the wrapped value
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Unwrap, consuming the named value
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Default, Tag> Default for NamedValue<T, Tag> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone, Tag> Clone for NamedValue<T, Tag> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, Tag> Copy for NamedValue<T, Tag> {}

impl<T: PartialEq, Tag> PartialEq for NamedValue<T, Tag> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, Tag> Eq for NamedValue<T, Tag> {}

impl<T: PartialOrd, Tag> PartialOrd for NamedValue<T, Tag> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, Tag> Ord for NamedValue<T, Tag> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, Tag> Hash for NamedValue<T, Tag> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug, Tag> fmt::Debug for NamedValue<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NamedValue").field(&self.value).finish()
    }
}
