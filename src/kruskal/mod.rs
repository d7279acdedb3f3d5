//! [Kruskal's algorithm] for minimum spanning trees and forests, built on [`UnionFind`].
//!
//! Every vertex starts in its own set. The edges are processed from light to heavy and an
//! edge is accepted if its endpoints are in different sets, after which these sets are joined.
//! An edge between two vertices of the same set would close a cycle and is rejected.
//!
//! [Kruskal's algorithm]: https://en.wikipedia.org/wiki/Kruskal%27s_algorithm
//! [`UnionFind`]: ../disjoint_sets/union_find/struct.UnionFind.html

mod forest;
mod observer;

use {
    std::cmp::Ordering,
    log::{
        debug,
        trace,
    },
    crate::{
        Config,
        Edge,
        Error,
        UnionFind,
        WeightedGraph,
    },
};

pub use self::{
    forest::SpanningForest,
    observer::{
        LogObserver,
        Observer,
    },
};

/// Builds a minimum spanning forest of `graph` with the default [`Kruskal`] options.
///
/// If the graph is connected the result is a minimum spanning tree.
/// Otherwise it holds one minimum spanning tree for every connected component.
///
/// # Errors
///
/// Returns [`Error::MissingVertex`] or [`Error::IncomparableWeight`] for a malformed graph.
/// Nothing is computed in that case.
///
/// # Examples
///
/// ```
/// use kruskal_forest::{kruskal, Edge, Graph};
///
/// let graph: Graph<u32, u32> = vec![
///     (1, 2, 5), (1, 3, 4), (2, 3, 2),
///     (2, 4, 7), (3, 4, 6), (3, 5, 11),
///     (4, 5, 3), (4, 6, 8), (5, 6, 8),
/// ].into_iter().collect();
///
/// let forest = kruskal(&graph).unwrap();
///
/// assert!(forest.is_spanning_tree());
/// assert_eq!(forest.total_weight(), 23);
/// assert_eq!(forest.edges(), &[
///     Edge::new(2, 3, 2),
///     Edge::new(4, 5, 3),
///     Edge::new(1, 3, 4),
///     Edge::new(3, 4, 6),
///     Edge::new(4, 6, 8),
/// ]);
/// ```
///
/// [`Kruskal`]: struct.Kruskal.html
/// [`Error::MissingVertex`]: ../enum.Error.html#variant.MissingVertex
/// [`Error::IncomparableWeight`]: ../enum.Error.html#variant.IncomparableWeight
pub fn kruskal<G>(graph: &G) -> Result<SpanningForest<G::Vertex, G::Weight>, Error<G::Vertex>> where
    G: WeightedGraph + ?Sized,
{
    Kruskal::default().run(graph)
}

/// The options of a run of Kruskal's algorithm.
///
/// Edges of equal weight are processed in the order they are returned by
/// [`WeightedGraph::edges`], which makes the result deterministic.
///
/// # Examples
///
/// ```
/// use kruskal_forest::{Config, Graph, Kruskal};
///
/// let graph: Graph<&str, f64> = vec![
///     ("a", "b", 1.5),
///     ("b", "c", 0.5),
///     ("a", "c", 1.0),
/// ].into_iter().collect();
///
/// let forest = Kruskal::new()
///     .config(Config::PLAIN)
///     .all_edges()
///     .run(&graph)
///     .unwrap();
///
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest.total_weight(), 1.5);
/// ```
///
/// [`WeightedGraph::edges`]: ../graph/trait.WeightedGraph.html#tymethod.edges
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Kruskal {
    config: Config,
    stop_when_spanning: bool,
}

impl Kruskal {
    /// Creates the default options: union-by-rank with path compression, stopping as soon as
    /// the vertex count minus one edges have been accepted.
    #[inline]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            stop_when_spanning: true,
        }
    }

    /// Sets the configuration of the [`UnionFind`] that tracks the trees.
    ///
    /// [`UnionFind`]: ../disjoint_sets/union_find/struct.UnionFind.html
    #[inline]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets whether the run stops once the forest has become a single spanning tree.
    #[inline]
    pub fn stop_when_spanning(mut self, stop: bool) -> Self {
        self.stop_when_spanning = stop;
        self
    }

    /// Processes every edge, even after the forest has become a single spanning tree.
    #[inline]
    pub fn all_edges(self) -> Self {
        self.stop_when_spanning(false)
    }

    /// Builds a minimum spanning forest of `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] or [`Error::IncomparableWeight`] for a malformed graph.
    ///
    /// [`Error::MissingVertex`]: ../enum.Error.html#variant.MissingVertex
    /// [`Error::IncomparableWeight`]: ../enum.Error.html#variant.IncomparableWeight
    pub fn run<G>(&self, graph: &G) -> Result<SpanningForest<G::Vertex, G::Weight>, Error<G::Vertex>> where
        G: WeightedGraph + ?Sized,
    {
        self.run_with_observer(graph, &mut ())
    }

    /// Builds a minimum spanning forest of `graph` and reports every step to `observer`.
    ///
    /// The graph is validated before the observer is called for the first time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] or [`Error::IncomparableWeight`] for a malformed graph.
    ///
    /// [`Error::MissingVertex`]: ../enum.Error.html#variant.MissingVertex
    /// [`Error::IncomparableWeight`]: ../enum.Error.html#variant.IncomparableWeight
    pub fn run_with_observer<G, O>(
        &self,
        graph: &G,
        observer: &mut O,
    ) -> Result<SpanningForest<G::Vertex, G::Weight>, Error<G::Vertex>> where
        G: WeightedGraph + ?Sized,
        O: Observer<G::Vertex, G::Weight> + ?Sized,
    {
        let mut union_find: UnionFind<G::Vertex> = UnionFind::with_config(self.config);
        union_find.make_set(graph.vertices());

        let mut edges: Vec<_> = graph.edges().collect();
        validate(&union_find, &edges)?;

        debug!("kruskal: {} vertices, {} edges", union_find.len(), edges.len());
        observer.on_make_set(&union_find);

        // Every weight is comparable after validation and the sort is stable.
        edges.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

        let spanning = union_find.len().saturating_sub(1);
        let total = edges.len();
        let mut accepted = Vec::with_capacity(spanning);

        for (step, edge) in (1 ..).zip(edges) {
            if self.stop_when_spanning && accepted.len() == spanning {
                debug!("kruskal: spanning tree complete, skipping {} edges", total + 1 - step);
                break
            }

            let separate = {
                let source_root = union_find.find(&edge.source)?;
                observer.on_find(step, &edge.source, source_root);
                let target_root = union_find.find(&edge.target)?;
                observer.on_find(step, &edge.target, target_root);

                source_root != target_root
            };

            if separate {
                union_find.union(&edge.source, &edge.target)?;
                observer.on_union(step, &edge, &union_find);

                trace!("kruskal: step {} accepted", step);
                observer.on_accept(step, &edge);
                accepted.push(edge);
            } else {
                trace!("kruskal: step {} closes a cycle", step);
                observer.on_reject(step, &edge);
            }
        }

        debug!(
            "kruskal: accepted {} edges forming {} trees",
            accepted.len(),
            union_find.amount_of_sets(),
        );

        Ok(SpanningForest {
            edges: accepted,
            union_find,
        })
    }
}

impl Default for Kruskal {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks that every edge joins two known vertices and has an ordered weight.
fn validate<V, W>(union_find: &UnionFind<V>, edges: &[Edge<V, W>]) -> Result<(), Error<V>> where
    V: Eq + std::hash::Hash + Clone,
    W: PartialOrd,
{
    for (position, edge) in edges.iter().enumerate() {
        for vertex in [&edge.source, &edge.target] {
            if !union_find.contains(vertex) {
                return Err(Error::MissingVertex {
                    edge: position,
                    vertex: vertex.clone(),
                })
            }
        }

        // A weight like `NaN` is not even equal to itself.
        if edge.weight.partial_cmp(&edge.weight) != Some(Ordering::Equal) {
            return Err(Error::IncomparableWeight { edge: position })
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        proptest::prelude::*,
        crate::{
            kruskal,
            Config,
            Edge,
            Error,
            Graph,
            Kruskal,
            Linking,
            Observer,
            UnionFind,
            WeightedGraph,
        },
    };

    /// A graph that does not add the endpoints of its edges to its vertices.
    struct Listed<W> {
        vertices: Vec<u32>,
        edges: Vec<Edge<u32, W>>,
    }

    impl<W> WeightedGraph for Listed<W> where W: PartialOrd + Clone {
        type Vertex = u32;
        type Weight = W;

        fn vertices(&self) -> impl Iterator<Item = u32> + '_ {
            self.vertices.iter().copied()
        }

        fn edges(&self) -> impl Iterator<Item = Edge<u32, W>> + '_ {
            self.edges.iter().cloned()
        }
    }

    /// Counts every call of every hook.
    #[derive(Default)]
    struct Calls(usize);

    impl<W> Observer<u32, W> for Calls {
        fn on_make_set(&mut self, _union_find: &UnionFind<u32>) {
            self.0 += 1;
        }

        fn on_find(&mut self, _step: usize, _vertex: &u32, _root: &u32) {
            self.0 += 1;
        }

        fn on_accept(&mut self, _step: usize, _edge: &Edge<u32, W>) {
            self.0 += 1;
        }

        fn on_reject(&mut self, _step: usize, _edge: &Edge<u32, W>) {
            self.0 += 1;
        }
    }

    /// The graph of six vertices and nine edges used throughout the documentation.
    fn reference() -> Graph<u32, u32> {
        vec![
            (1, 2, 5), (1, 3, 4), (2, 3, 2),
            (2, 4, 7), (3, 4, 6), (3, 5, 11),
            (4, 5, 3), (4, 6, 8), (5, 6, 8),
        ].into_iter().collect()
    }

    fn all_configs() -> Vec<Config> {
        vec![
            Config::PLAIN,
            Config::COMPRESSED,
            Config::EFFICIENT,
            Config { linking: Linking::ByRank, path_compression: false },
        ]
    }

    /// The smallest total weight of any spanning forest, found by trying every edge subset.
    fn brute_force_weight(n: u32, edges: &[(u32, u32, u32)]) -> (usize, u32) {
        let mut components = UnionFind::new();
        components.make_set(0 .. n);
        for &(u, v, _) in edges {
            components.union(&u, &v).unwrap();
        }
        let needed = n as usize - components.amount_of_sets();

        let mut best = None;
        for mask in 0u32 .. 1 << edges.len() {
            if mask.count_ones() as usize != needed {
                continue
            }

            let mut forest = UnionFind::new();
            forest.make_set(0 .. n);
            let mut weight = 0;
            let mut acyclic = true;

            for (i, &(u, v, w)) in edges.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    acyclic &= forest.union(&u, &v).unwrap();
                    weight += w;
                }
            }

            if acyclic {
                best = Some(best.map_or(weight, |best: u32| best.min(weight)));
            }
        }

        (needed, best.unwrap_or(0))
    }

    fn small_graph() -> impl Strategy<Value = (u32, Vec<(u32, u32, u32)>)> {
        (1u32 .. 7).prop_flat_map(|n| {
            (Just(n), prop::collection::vec((0 .. n, 0 .. n, 0u32 .. 20), 0 .. 10))
        })
    }

    #[derive(Default)]
    struct Recorder {
        made: usize,
        finds: Vec<(usize, u32, u32)>,
        unions: usize,
        accepted: Vec<usize>,
        rejected: Vec<usize>,
    }

    impl Observer<u32, u32> for Recorder {
        fn on_make_set(&mut self, union_find: &UnionFind<u32>) {
            self.made = union_find.len();
        }

        fn on_find(&mut self, step: usize, vertex: &u32, root: &u32) {
            self.finds.push((step, *vertex, *root));
        }

        fn on_union(&mut self, step: usize, edge: &Edge<u32, u32>, union_find: &UnionFind<u32>) {
            assert!(union_find.connected(&edge.source, &edge.target).unwrap());
            assert_eq!(self.accepted.len(), self.unions);
            assert!(!self.accepted.contains(&step));
            self.unions += 1;
        }

        fn on_accept(&mut self, step: usize, _edge: &Edge<u32, u32>) {
            self.accepted.push(step);
        }

        fn on_reject(&mut self, step: usize, _edge: &Edge<u32, u32>) {
            self.rejected.push(step);
        }
    }

    #[test]
    fn reference_graph_has_weight_23() {
        for config in all_configs() {
            let forest = Kruskal::new().config(config).run(&reference()).unwrap();

            assert_eq!(forest.len(), 5);
            assert_eq!(forest.total_weight(), 23);
            assert_eq!(forest.tree_count(), 1);
            assert!(forest.is_spanning_tree());
            assert!(forest.edges()[4].connects(&4, &6));
        }
    }

    #[test]
    fn observer_sees_every_step() {
        let mut recorder = Recorder::default();
        Kruskal::new().all_edges().run_with_observer(&reference(), &mut recorder).unwrap();

        assert_eq!(recorder.made, 6);
        assert_eq!(recorder.finds.len(), 18);
        assert_eq!(recorder.unions, 5);
        // Sorted by weight: 2, 3, 4, 5, 6, 7, 8, 8, 11.
        assert_eq!(recorder.accepted, vec![1, 2, 3, 5, 7]);
        assert_eq!(recorder.rejected, vec![4, 6, 8, 9]);
        // The first step looks up the endpoints of (2, 3, 2) which are both their own root.
        assert_eq!(&recorder.finds[.. 2], &[(1, 2, 2), (1, 3, 3)]);
    }

    #[test]
    fn early_stop_skips_the_remaining_edges() {
        let mut recorder = Recorder::default();
        let forest = Kruskal::new().run_with_observer(&reference(), &mut recorder).unwrap();

        assert_eq!(recorder.accepted, vec![1, 2, 3, 5, 7]);
        assert_eq!(recorder.rejected, vec![4, 6]);
        assert_eq!(forest.total_weight(), 23);
    }

    #[test]
    fn disconnected_graph_gives_a_forest() {
        let mut graph: Graph<char, u32> = vec![
            ('a', 'b', 1), ('b', 'c', 2), ('a', 'c', 3),
            ('x', 'y', 4),
        ].into_iter().collect();
        graph.add_vertex('z');

        let forest = kruskal(&graph).unwrap();

        assert_eq!(forest.len(), 3);
        assert_eq!(forest.total_weight(), 7);
        assert_eq!(forest.tree_count(), 3);
        assert!(!forest.is_spanning_tree());
        assert!(forest.connected(&'a', &'c').unwrap());
        assert!(!forest.connected(&'a', &'x').unwrap());
        assert!(!forest.connected(&'y', &'z').unwrap());

        let components: Vec<Vec<char>> = forest
            .components()
            .into_iter()
            .map(|tree| {
                let mut tree: Vec<char> = tree.into_iter().cloned().collect();
                tree.sort();
                tree
            })
            .collect();
        assert_eq!(components, vec![vec!['a', 'b', 'c'], vec!['x', 'y'], vec!['z']]);
    }

    #[test]
    fn empty_and_edgeless_graphs() {
        let empty: Graph<u32, u32> = Graph::new();
        let forest = kruskal(&empty).unwrap();
        assert!(forest.is_empty());
        assert_eq!(forest.tree_count(), 0);
        assert!(!forest.is_spanning_tree());

        let mut lonely: Graph<u32, u32> = Graph::new();
        lonely.add_vertex(1);
        lonely.add_vertex(2);
        lonely.add_vertex(3);
        let forest = kruskal(&lonely).unwrap();
        assert!(forest.is_empty());
        assert_eq!(forest.tree_count(), 3);
        assert_eq!(forest.total_weight(), 0);
    }

    #[test]
    fn loops_are_never_selected() {
        let graph: Graph<u32, u32> = vec![(1, 1, 0), (1, 2, 5), (2, 2, 1), (1, 2, 3)]
            .into_iter()
            .collect();

        let forest = Kruskal::new().all_edges().run(&graph).unwrap();

        assert_eq!(forest.edges(), &[Edge::new(1, 2, 3)]);
    }

    #[test]
    fn equal_weights_keep_input_order() {
        let graph: Graph<u32, u32> = vec![(3, 1, 1), (1, 2, 1), (2, 3, 1)].into_iter().collect();

        let forest = kruskal(&graph).unwrap();

        assert_eq!(forest.edges(), &[Edge::new(3, 1, 1), Edge::new(1, 2, 1)]);
    }

    #[test]
    fn invalid_input_is_reported_before_running() {
        let missing = Listed {
            vertices: vec![1, 2],
            edges: vec![Edge::new(1, 2, 1.0), Edge::new(2, 7, 2.0)],
        };
        let mut calls = Calls::default();
        let error = Kruskal::new().run_with_observer(&missing, &mut calls);
        assert_eq!(error.err(), Some(Error::MissingVertex { edge: 1, vertex: 7 }));
        assert_eq!(calls.0, 0);

        let nan = Listed {
            vertices: vec![1, 2, 3],
            edges: vec![Edge::new(1, 2, 1.0), Edge::new(2, 3, f64::NAN)],
        };
        assert_eq!(kruskal(&nan).err(), Some(Error::IncomparableWeight { edge: 1 }));
    }

    proptest! {
        #[test]
        fn forest_is_minimal((n, edges) in small_graph()) {
            let graph = {
                let mut graph = Graph::new();
                for vertex in 0 .. n {
                    graph.add_vertex(vertex);
                }
                graph.extend(edges.iter().cloned());
                graph
            };
            let (needed, weight) = brute_force_weight(n, &edges);

            for config in all_configs() {
                for stop in [true, false] {
                    let forest = Kruskal::new()
                        .config(config)
                        .stop_when_spanning(stop)
                        .run(&graph)
                        .unwrap();

                    prop_assert_eq!(forest.len(), needed);
                    prop_assert_eq!(forest.len(), n as usize - forest.tree_count());
                    prop_assert_eq!(forest.total_weight(), weight);

                    // The accepted edges are acyclic.
                    let mut check = UnionFind::new();
                    check.make_set(0 .. n);
                    for edge in forest.edges() {
                        prop_assert!(check.union(&edge.source, &edge.target).unwrap());
                    }
                }
            }
        }

        #[test]
        fn edges_across_trees_do_not_exist((n, edges) in small_graph()) {
            let mut graph = Graph::new();
            for vertex in 0 .. n {
                graph.add_vertex(vertex);
            }
            graph.extend(edges.iter().cloned());

            let forest = kruskal(&graph).unwrap();

            for &(u, v, _) in &edges {
                prop_assert!(forest.connected(&u, &v).unwrap());
            }
        }
    }

    #[cfg(feature = "proptest")]
    proptest! {
        #[test]
        fn arbitrary_graphs_give_forests(
            graph in any_with::<Graph<u8, u8>>((
                proptest::collection::SizeRange::from(1 .. 30),
                proptest::collection::SizeRange::from(0 .. 60),
            )),
        ) {
            let forest = kruskal(&graph).unwrap();

            prop_assert_eq!(forest.len() + forest.tree_count(), graph.vertex_count());
        }
    }
}
