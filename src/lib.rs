//! A [disjoint-sets/union-find] implementation with path compression and union-by-rank, and
//! [Kruskal's algorithm] for minimum spanning trees built on top of it.
//!
//! The main struct of this crate is [`UnionFind<K>`] which divides a universe of element
//! identifiers in disjoint sets.
//! The elements each start in their own set and these sets can be joined with the `union`
//! method. The representative of a set is given by `find` and you can check if elements share a
//! set with the `connected` method.
//! With union-by-rank and path compression these methods have an amortized complexity of
//! `O(α(n))` where 'α' is the inverse Ackermann function and `n` the amount of elements.
//! The `α(n)` has value below 5 for any `n` that can be written in the observable universe.
//! The plain linking strategy, where the second root is always placed under the first, is
//! available as well through [`Config`].
//!
//! A key use is keeping track of the connected components of an undirected graph, to determine
//! whether adding an edge between two vertices would result in a cycle.
//! This is what [`kruskal`] does to find a minimum spanning forest of a [`WeightedGraph`]:
//! it takes the edges from light to heavy and keeps those that join two different components.
//!
//! ```
//! use kruskal_forest::{kruskal, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_edge("a", "b", 4);
//! graph.add_edge("b", "c", 1);
//! graph.add_edge("a", "c", 2);
//! graph.add_edge("d", "e", 7);
//!
//! let forest = kruskal(&graph).unwrap();
//!
//! assert_eq!(forest.total_weight(), 10);
//! assert_eq!(forest.tree_count(), 2);
//! assert!(!forest.connected(&"a", &"d").unwrap());
//! ```
//!
//! For each element of a [`UnionFind<K>`] we store three additional `usize` values.
//! A more compact implementation is included that has the same functionality but only needs to
//! store an additional two `usize` values.
//! This is done by using a few bits of these two values to store the third.
//! This is a feature and can be enabled by adding the following to your `Cargo.toml` file:
//! ```toml
//! [dependencies.kruskal_forest]
//! version = "0.1"
//! features = ["compact"]
//! ```
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [Kruskal's algorithm]: https://en.wikipedia.org/wiki/Kruskal%27s_algorithm
//! [`UnionFind<K>`]: disjoint_sets/union_find/struct.UnionFind.html
//! [`Config`]: disjoint_sets/struct.Config.html
//! [`kruskal`]: kruskal/fn.kruskal.html
//! [`WeightedGraph`]: graph/trait.WeightedGraph.html

/// We count the amount of expresions given to this macro.
#[doc(hidden)]
#[macro_export]
macro_rules! union_find_count_expr {
    () => { 0usize };
    ($_single: expr) => { 1usize };
    // Even amount of expresions.
    ($($first: expr, $_second: expr),*) => {
        ($crate::union_find_count_expr![$($first),*] << 1usize)
    };
    // Odd amount of expresions.
    ($_single: expr, $($first: expr, $_second: expr),*) => {
        ($crate::union_find_count_expr![$($first),*] << 1usize) | 1
    };
}

/// A convenient macro to create a `BitVec` similar to `vec!`.
macro_rules! bit_vec {
    ($element: expr; $len: expr) => {
        bit_vec::BitVec::from_elem($len, $element)
    };
}

mod error;
pub mod disjoint_sets;
pub mod graph;
pub mod kruskal;

pub use {
    error::Error,
    disjoint_sets::{
        union_find::UnionFind,
        Config,
        Linking,
    },
    graph::{
        Edge,
        Graph,
        WeightedGraph,
    },
    kruskal::{
        kruskal,
        Kruskal,
        LogObserver,
        Observer,
        SpanningForest,
    },
};
