//! Hooks that are called at every step of Kruskal's algorithm.

use {
    std::fmt::Debug,
    log::{
        log,
        Level,
    },
    crate::{
        Edge,
        UnionFind,
    },
};

/// Receives the intermediate states of a run of [`Kruskal`].
///
/// Every method has an empty default so an observer only implements what it needs.
/// The steps are numbered from 1 in the order the sorted edges are processed.
/// `()` is the observer that ignores everything.
///
/// # Examples
///
/// ```
/// use kruskal_forest::{Edge, Graph, Kruskal, Observer};
///
/// #[derive(Default)]
/// struct Rejected(Vec<(usize, Edge<u32, u32>)>);
///
/// impl Observer<u32, u32> for Rejected {
///     fn on_reject(&mut self, step: usize, edge: &Edge<u32, u32>) {
///         self.0.push((step, *edge));
///     }
/// }
///
/// let graph: Graph<u32, u32> = vec![(1, 2, 1), (2, 3, 2), (1, 3, 3)].into_iter().collect();
/// let mut rejected = Rejected::default();
/// Kruskal::new().all_edges().run_with_observer(&graph, &mut rejected).unwrap();
///
/// assert_eq!(rejected.0, vec![(3, Edge::new(1, 3, 3))]);
/// ```
///
/// [`Kruskal`]: struct.Kruskal.html
pub trait Observer<V, W> {
    /// Called once every vertex has been placed in its own set.
    fn on_make_set(&mut self, _union_find: &UnionFind<V>) {}

    /// Called after the representative of an endpoint of the current edge was found.
    fn on_find(&mut self, _step: usize, _vertex: &V, _root: &V) {}

    /// Called after the sets of the endpoints of an accepted edge were joined.
    fn on_union(&mut self, _step: usize, _edge: &Edge<V, W>, _union_find: &UnionFind<V>) {}

    /// Called when an edge becomes part of the forest.
    fn on_accept(&mut self, _step: usize, _edge: &Edge<V, W>) {}

    /// Called when an edge is skipped because it would close a cycle.
    fn on_reject(&mut self, _step: usize, _edge: &Edge<V, W>) {}
}

impl<V, W> Observer<V, W> for () {}

/// An [`Observer`] that writes every step to the `log` facade.
///
/// The decisions are written at the configured level and the parent map after every
/// union at `Level::Trace`.
///
/// [`Observer`]: trait.Observer.html
#[derive(Clone, Copy, Debug)]
pub struct LogObserver {
    level: Level,
}

impl LogObserver {
    /// Creates an observer that logs the decisions at `level`.
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl<V, W> Observer<V, W> for LogObserver where V: Debug, W: Debug {
    fn on_make_set(&mut self, union_find: &UnionFind<V>) {
        log!(self.level, "[make-set] {} singleton sets", union_find.len());
    }

    fn on_find(&mut self, step: usize, vertex: &V, root: &V) {
        log!(Level::Trace, "[step {}] find({:?}) = {:?}", step, vertex, root);
    }

    fn on_union(&mut self, step: usize, _edge: &Edge<V, W>, union_find: &UnionFind<V>) {
        if log::log_enabled!(Level::Trace) {
            let parents: Vec<_> = union_find.parents().collect();
            log!(Level::Trace, "[step {}] parents {:?}", step, parents);
        }
    }

    fn on_accept(&mut self, step: usize, edge: &Edge<V, W>) {
        log!(
            self.level,
            "[step {}] accept {:?} - {:?} weight {:?}",
            step,
            edge.source,
            edge.target,
            edge.weight,
        );
    }

    fn on_reject(&mut self, step: usize, edge: &Edge<V, W>) {
        log!(
            self.level,
            "[step {}] reject {:?} - {:?} weight {:?}, it closes a cycle",
            step,
            edge.source,
            edge.target,
            edge.weight,
        );
    }
}
