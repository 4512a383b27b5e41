use crate::{Error, TableKind};

/// The value domain bound used by default: values must be `< 1_000_000`.
pub const DEFAULT_VALUE_LIMIT: u32 = 1_000_000;

/// Below this many table entries, `TableKind::Auto` always picks the dense table.
pub(crate) const DENSE_AUTO_FLOOR: usize = 1 << 16;
/// `TableKind::Auto` picks the dense table while `value_limit <= DENSE_AUTO_FACTOR * len`.
pub(crate) const DENSE_AUTO_FACTOR: usize = 4;

/// Configuration for [`crate::Solver`].
///
/// The value domain is a knob rather than a constant: callers with a small known domain keep
/// the direct-indexed table, callers with large or sparse values fall back to a map.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverOptions {
    /// Exclusive upper bound on array values. `None` accepts any `u32`.
    pub value_limit: Option<u32>,

    /// Maximum accepted array length. `None` means no limit.
    pub max_len: Option<usize>,

    /// How last occurrences are tracked during the sweep.
    pub table: TableKind,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverOptions {
    /// Options with the default value domain (`0..1_000_000`), no length limit and an
    /// automatically chosen table.
    pub fn new() -> Self {
        Self {
            value_limit: Some(DEFAULT_VALUE_LIMIT),
            max_len: None,
            table: TableKind::Auto,
        }
    }

    /// Options accepting any `u32` value, tracked with a sparse table.
    pub fn unbounded() -> Self {
        Self {
            value_limit: None,
            max_len: None,
            table: TableKind::Sparse,
        }
    }

    pub fn with_value_limit(mut self, value_limit: Option<u32>) -> Self {
        self.value_limit = value_limit;
        self
    }

    pub fn with_max_len(mut self, max_len: Option<usize>) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn with_table(mut self, table: TableKind) -> Self {
        self.table = table;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.table == TableKind::Dense && self.value_limit.is_none() {
            return Err(Error::DenseTableWithoutLimit);
        }
        Ok(())
    }

    /// Resolves `TableKind::Auto` for an array of `len` values.
    pub(crate) fn table_for(&self, len: usize) -> TableKind {
        match (self.table, self.value_limit) {
            (TableKind::Auto, Some(limit)) => {
                let budget = len.saturating_mul(DENSE_AUTO_FACTOR).max(DENSE_AUTO_FLOOR);
                if limit as usize <= budget {
                    TableKind::Dense
                } else {
                    TableKind::Sparse
                }
            }
            (TableKind::Auto, None) => TableKind::Sparse,
            (kind, _) => kind,
        }
    }
}
