//! Contains the implementation of the [disjoint-sets/union-find].
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure

mod metadata;
pub mod union_find;

/// How the roots of two different sets are joined by `union`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Linking {
    /// The root of the second element is always placed under the root of the first element.
    ///
    /// This does not bound the height of the trees. No ranks are kept.
    Simple,
    /// The root with the lower rank is placed under the root with the higher rank.
    ///
    /// On a tie the root of the first element stays the root and its rank goes up by one.
    #[default]
    ByRank,
}

/// The configuration of a [`UnionFind`].
///
/// The default uses union-by-rank together with path compression which gives the
/// `O(α(n))` amortized bound.
///
/// [`UnionFind`]: union_find::UnionFind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Config {
    /// The linking strategy used by `union`.
    pub linking: Linking,
    /// Whether `find` points every element it visits directly at the root.
    pub path_compression: bool,
}

impl Config {
    /// Plain linking without path compression.
    pub const PLAIN: Config = Config {
        linking: Linking::Simple,
        path_compression: false,
    };

    /// Plain linking with path compression.
    pub const COMPRESSED: Config = Config {
        linking: Linking::Simple,
        path_compression: true,
    };

    /// Union-by-rank with path compression.
    pub const EFFICIENT: Config = Config {
        linking: Linking::ByRank,
        path_compression: true,
    };
}

impl Default for Config {
    fn default() -> Self {
        Config::EFFICIENT
    }
}
