//! Fixed-size mapping keyed by [`BoundaryKind`]

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryKind;

/// One value per habitable zone boundary.
///
/// Backed by an array indexed by [`BoundaryKind::index`], so every boundary
/// is always present and iteration follows [`BoundaryKind::ALL`].
///
/// Serializes as a map keyed by the snake_case boundary name:
///
/// ```
/// use habitable_zone::{BoundaryKind, BoundaryMap};
///
/// let map = BoundaryMap::from_fn(|kind| kind.index() as f64);
/// assert_eq!(map[BoundaryKind::InnerOptimistic], 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryMap<T> {
    values: [T; BoundaryKind::COUNT],
}

impl<T> BoundaryMap<T> {
    /// Build a map by evaluating `f` for each boundary in canonical order
    pub fn from_fn(f: impl FnMut(BoundaryKind) -> T) -> Self {
        Self {
            values: BoundaryKind::ALL.map(f),
        }
    }

    /// Build a map from a fallible function.
    ///
    /// Stops at the first boundary (in canonical order) for which `f` fails
    /// and returns that error; no partial map is produced.
    pub fn try_from_fn<E>(mut f: impl FnMut(BoundaryKind) -> Result<T, E>) -> Result<Self, E> {
        let [ic, oc, io, oo] = BoundaryKind::ALL;
        Ok(Self {
            values: [f(ic)?, f(oc)?, f(io)?, f(oo)?],
        })
    }

    pub fn get(&self, kind: BoundaryKind) -> &T {
        &self.values[kind.index()]
    }

    /// `(kind, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (BoundaryKind, &T)> {
        BoundaryKind::ALL.into_iter().zip(self.values.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(BoundaryKind, &T) -> U) -> BoundaryMap<U> {
        BoundaryMap::from_fn(|kind| f(kind, self.get(kind)))
    }

    pub fn try_map<U, E>(
        &self,
        mut f: impl FnMut(BoundaryKind, &T) -> Result<U, E>,
    ) -> Result<BoundaryMap<U>, E> {
        BoundaryMap::try_from_fn(|kind| f(kind, self.get(kind)))
    }
}

impl<T> Index<BoundaryKind> for BoundaryMap<T> {
    type Output = T;

    fn index(&self, kind: BoundaryKind) -> &T {
        self.get(kind)
    }
}

impl<T: fmt::Display> fmt::Display for BoundaryMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (kind, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", kind, value)?;
        }
        Ok(())
    }
}

impl<T: Serialize> Serialize for BoundaryMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(BoundaryKind::COUNT))?;
        for (kind, value) in self.iter() {
            map.serialize_entry(&kind, value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for BoundaryMap<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut entries = BTreeMap::<BoundaryKind, T>::deserialize(deserializer)?;
        Self::try_from_fn(|kind| {
            entries.remove(&kind).ok_or_else(|| {
                <D::Error as de::Error>::custom(format!("missing boundary `{}`", kind))
            })
        })
    }
}
