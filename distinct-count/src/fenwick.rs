use alloc::vec::Vec;
use core::cmp;

/// A point-update / prefix-sum Fenwick tree over positions `0..len`.
///
/// The tree owns its cells and never exposes them: the only way to observe the stored values
/// is through [`Fenwick::prefix_sum`] and [`Fenwick::range_sum`].
///
/// All operations run in `O(log n)` and never allocate after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fenwick {
    tree: Vec<i64>, // 1-indexed, tree[0] unused
}

impl Fenwick {
    /// Creates a tree over `n` positions, all zero.
    pub fn new(n: usize) -> Self {
        Self {
            tree: alloc::vec![0; n + 1],
        }
    }

    /// Builds a tree whose position `i` holds `values[i]`.
    ///
    /// Runs in `O(n)` by pushing each cell into its parent once, instead of `n` calls to
    /// [`Fenwick::add`].
    pub fn from_values(values: &[i64]) -> Self {
        let n = values.len();
        let mut tree = alloc::vec![0i64; n + 1];
        tree[1..].copy_from_slice(values);
        for i in 1..=n {
            let j = i + lsb(i);
            if j <= n {
                tree[j] += tree[i];
            }
        }
        Self { tree }
    }

    /// Number of positions in the tree.
    pub fn len(&self) -> usize {
        self.tree.len().saturating_sub(1)
    }

    /// Whether the tree covers no positions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `delta` to position `index` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn add(&mut self, index: usize, delta: i64) {
        let n = self.len();
        assert!(
            index < n,
            "Fenwick::add: index out of bounds (index={index}, len={n})"
        );
        let mut i = index + 1;
        while i <= n {
            self.tree[i] += delta;
            i += lsb(i);
        }
    }

    /// Returns the sum of the first `count` positions, i.e. positions `0..count`.
    ///
    /// `prefix_sum(0)` is the empty prefix and always returns `0`. `count` is clamped to
    /// `len()`.
    pub fn prefix_sum(&self, count: usize) -> i64 {
        let mut i = cmp::min(count, self.len());
        let mut sum = 0i64;
        while i > 0 {
            sum += self.tree[i];
            i &= i - 1;
        }
        sum
    }

    /// Returns the sum over the inclusive range `[start, end]`.
    ///
    /// Returns `0` when `start > end`.
    pub fn range_sum(&self, start: usize, end: usize) -> i64 {
        if start > end {
            return 0;
        }
        self.prefix_sum(end.saturating_add(1)) - self.prefix_sum(start)
    }

    /// Returns the sum over all positions.
    pub fn total(&self) -> i64 {
        self.prefix_sum(self.len())
    }
}

fn lsb(i: usize) -> usize {
    i & i.wrapping_neg()
}
