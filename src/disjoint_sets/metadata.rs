use std::cell::Cell;

/// This provides additional information about a given element in the `UnionFind`.
///
/// For each element in the `UnionFind` we store a `Metadata`.
#[cfg(not(feature = "compact"))]
#[derive(Clone, Debug, Default)]
pub(crate) struct Metadata {
    /// The parent of the element in its sets tree.
    /// These form an upside down tree where each child has the index of its parent.
    parent: Cell<usize>,
    /// A link to another index.
    /// These form a circular linked list in its subset.
    link: Cell<usize>,
    /// An upper bound on the height of the tree below this element.
    rank: Cell<usize>,
}

#[cfg(not(feature = "compact"))]
impl Metadata {
    /// Create a new `Metadata` for an element with the given index.
    pub(crate) fn new(index: usize) -> Self {
        Self {
            parent: Cell::new(index),
            link: Cell::new(index),
            rank: Cell::new(0),
        }
    }

    /// Return the `parent` variable.
    pub(crate) fn parent(&self) -> usize {
        self.parent.get()
    }

    /// Set the `parent` variable.
    pub(crate) fn set_parent(&self, value: usize) {
        self.parent.set(value);
    }

    /// Return the `link` variable.
    pub(crate) fn link(&self) -> usize {
        self.link.get()
    }

    /// Set the `link` variable.
    pub(crate) fn set_link(&self, value: usize) {
        self.link.set(value);
    }

    /// Return the `rank` variable.
    pub(crate) fn rank(&self) -> usize {
        self.rank.get()
    }

    /// Set the `rank` variable.
    pub(crate) fn set_rank(&self, value: usize) {
        self.rank.set(value);
    }
}

// A root of rank n is only created by joining two roots of rank n - 1, so a tree of rank n
// holds at least 2 ^ n elements and a rank never exceeds the bit width of a `usize`.
// Storing a value from 0 up to that width takes log2(width) + 1 bits, which we divide over the
// low bits of both the parent and the link.
#[cfg(all(feature = "compact", target_pointer_width = "16"))]
const RANK_BITS: usize = 3;
#[cfg(all(feature = "compact", target_pointer_width = "32"))]
const RANK_BITS: usize = 3;
#[cfg(all(feature = "compact", target_pointer_width = "64"))]
const RANK_BITS: usize = 4;
#[cfg(feature = "compact")]
const USIZE_BITS: usize = 8 * std::mem::size_of::<usize>();
#[cfg(feature = "compact")]
const MASK: usize = (1 << RANK_BITS) - 1;
#[cfg(feature = "compact")]
const MAX: usize = (1 << (USIZE_BITS - RANK_BITS)) - 1;

/// This provides additional information about a given element in the `UnionFind`.
///
/// For each element in the `UnionFind` we store a `Metadata`.
#[cfg(feature = "compact")]
#[derive(Clone, Debug, Default)]
pub(crate) struct Metadata {
    /// The parent of the element in its sets tree, shifted left by `RANK_BITS`.
    /// The low bits hold the low half of the rank.
    parent: Cell<usize>,
    /// A link to another index, shifted left by `RANK_BITS`.
    /// The low bits hold the high half of the rank.
    link: Cell<usize>,
}

#[cfg(feature = "compact")]
impl Metadata {
    /// Create a new `Metadata` for an element with the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is above the maximum amount of elements a `UnionFind` can store
    /// with the compact representation.
    pub(crate) fn new(index: usize) -> Self {
        if index > MAX {
            panic!("A UnionFind can only hold {} elements.", MAX)
        }

        Self {
            parent: Cell::new(index << RANK_BITS),
            link: Cell::new(index << RANK_BITS),
        }
    }

    /// Return the `parent` variable.
    pub(crate) fn parent(&self) -> usize {
        self.parent.get() >> RANK_BITS
    }

    /// Set the `parent` variable.
    pub(crate) fn set_parent(&self, value: usize) {
        let old = self.parent.get();
        self.parent.set((old & MASK) | (value << RANK_BITS));
    }

    /// Return the `link` variable.
    pub(crate) fn link(&self) -> usize {
        self.link.get() >> RANK_BITS
    }

    /// Set the `link` variable.
    pub(crate) fn set_link(&self, value: usize) {
        let old = self.link.get();
        self.link.set((old & MASK) | (value << RANK_BITS));
    }

    /// Return the `rank` variable.
    pub(crate) fn rank(&self) -> usize {
        let high = self.link.get() & MASK;
        let low = self.parent.get() & MASK;
        (high << RANK_BITS) | low
    }

    /// Set the `rank` variable.
    pub(crate) fn set_rank(&self, value: usize) {
        let old = self.parent.get();
        self.parent.set((old & !MASK) | (value & MASK));
        let old = self.link.get();
        self.link.set((old & !MASK) | ((value >> RANK_BITS) & MASK));
    }
}

#[cfg(test)]
mod tests {
    use super::Metadata;

    #[test]
    fn new_metadata_is_a_singleton_root() {
        let meta = Metadata::new(7);

        assert_eq!(meta.parent(), 7);
        assert_eq!(meta.link(), 7);
        assert_eq!(meta.rank(), 0);
    }

    #[test]
    fn fields_are_independent() {
        let meta = Metadata::new(3);

        meta.set_rank(5);
        meta.set_parent(11);
        meta.set_link(2);
        assert_eq!(meta.rank(), 5);
        assert_eq!(meta.parent(), 11);
        assert_eq!(meta.link(), 2);

        meta.set_rank(8 * std::mem::size_of::<usize>());
        assert_eq!(meta.rank(), 8 * std::mem::size_of::<usize>());
        assert_eq!(meta.parent(), 11);
        assert_eq!(meta.link(), 2);
    }
}
