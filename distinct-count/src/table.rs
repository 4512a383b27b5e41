use alloc::vec::Vec;

use crate::TableKind;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
type PositionMap = HashMap<u32, usize>;
#[cfg(not(feature = "std"))]
type PositionMap = BTreeMap<u32, usize>;

/// Value -> most recent position seen by the sweep.
///
/// Entries are only ever inserted or overwritten; the domain never shrinks during a solve.
#[derive(Clone, Debug)]
pub(crate) enum LastOccurrence {
    Dense(Vec<Option<usize>>),
    Sparse(PositionMap),
}

impl LastOccurrence {
    /// A direct-indexed table for values in `0..value_limit`.
    pub(crate) fn dense(value_limit: u32) -> Self {
        Self::Dense(alloc::vec![None; value_limit as usize])
    }

    /// A map-backed table; `len` is the array length and only sizes the initial allocation.
    pub(crate) fn sparse(len: usize) -> Self {
        #[cfg(feature = "std")]
        let map = PositionMap::with_capacity(len);
        #[cfg(not(feature = "std"))]
        let map = {
            let _ = len;
            PositionMap::new()
        };
        Self::Sparse(map)
    }

    pub(crate) fn kind(&self) -> TableKind {
        match self {
            Self::Dense(_) => TableKind::Dense,
            Self::Sparse(_) => TableKind::Sparse,
        }
    }

    /// Records `position` as the last occurrence of `value`, returning the previous one.
    pub(crate) fn replace(&mut self, value: u32, position: usize) -> Option<usize> {
        match self {
            Self::Dense(slots) => slots[value as usize].replace(position),
            Self::Sparse(map) => map.insert(value, position),
        }
    }
}
