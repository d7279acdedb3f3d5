//! Weighted undirected graphs as they are consumed by Kruskal's algorithm.
//!
//! The algorithm only needs a [`WeightedGraph`]: something that can list its vertices and its
//! weighted edges. [`Graph`] is a small owned implementation of it.
//!
//! [`WeightedGraph`]: trait.WeightedGraph.html
//! [`Graph`]: struct.Graph.html

use {
    std::hash::Hash,
    indexmap::IndexSet,
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// An undirected edge between `source` and `target` with a `weight`.
///
/// The edge `(a, b, w)` and the edge `(b, a, w)` describe the same connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Edge<V, W> {
    /// One endpoint of the edge.
    pub source: V,
    /// The other endpoint of the edge.
    pub target: V,
    /// The weight of the edge.
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    /// Creates an edge between `source` and `target`.
    #[inline]
    pub fn new(source: V, target: V, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the same edge with its endpoints swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }

    /// Returns `true` if this edge connects `a` and `b` in either direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_forest::Edge;
    ///
    /// let edge = Edge::new(1, 2, 0.5);
    ///
    /// assert!(edge.connects(&1, &2));
    /// assert!(edge.connects(&2, &1));
    /// assert!(!edge.connects(&1, &3));
    /// ```
    pub fn connects(&self, a: &V, b: &V) -> bool where V: PartialEq {
        (self.source == *a && self.target == *b) || (self.source == *b && self.target == *a)
    }

    /// Returns `true` if both endpoints are the same vertex.
    #[inline]
    pub fn is_loop(&self) -> bool where V: PartialEq {
        self.source == self.target
    }
}

impl<V, W> From<(V, V, W)> for Edge<V, W> {
    fn from((source, target, weight): (V, V, W)) -> Self {
        Self::new(source, target, weight)
    }
}

/// A source of vertices and weighted undirected edges.
///
/// Multi-edges and loops are allowed. Every endpoint of an edge is expected to be
/// one of the vertices, which [`Kruskal`] checks before running.
///
/// [`Kruskal`]: ../kruskal/struct.Kruskal.html
pub trait WeightedGraph {
    /// The identifier of a vertex.
    type Vertex: Eq + Hash + Clone;
    /// The weight of an edge.
    type Weight: PartialOrd + Clone;

    /// Returns every vertex of the graph.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Returns every edge of the graph.
    fn edges(&self) -> impl Iterator<Item = Edge<Self::Vertex, Self::Weight>> + '_;
}

/// An owned weighted undirected graph.
///
/// The vertices are kept in insertion order without duplicates.
/// Adding an edge also adds its endpoints.
///
/// # Examples
///
/// ```
/// use kruskal_forest::{Graph, WeightedGraph};
///
/// let mut graph = Graph::new();
/// graph.add_edge('a', 'b', 3);
/// graph.add_edge('b', 'c', 1);
/// graph.add_vertex('d');
///
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.vertices().collect::<Vec<_>>(), vec!['a', 'b', 'c', 'd']);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<V, W> where V: Eq + Hash {
    vertices: IndexSet<V>,
    edges: Vec<Edge<V, W>>,
}

impl<V, W> Graph<V, W> where V: Eq + Hash + Clone {
    /// Constructs a new graph without vertices and edges.
    #[inline]
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: Vec::new(),
        }
    }

    /// Constructs a new, empty graph with room for the given amount of vertices and edges.
    #[inline]
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: IndexSet::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Adds a vertex, returns `false` if it was already present.
    #[inline]
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.vertices.insert(vertex)
    }

    /// Adds an edge between `source` and `target` and adds both endpoints as vertices.
    pub fn add_edge(&mut self, source: V, target: V, weight: W) {
        self.vertices.insert(source.clone());
        self.vertices.insert(target.clone());
        self.edges.push(Edge::new(source, target, weight));
    }

    /// Returns `true` if `vertex` is part of the graph.
    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Returns the amount of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the amount of edges, counting every multi-edge and loop.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in the order they were added.
    #[inline]
    pub fn edge_list(&self) -> &[Edge<V, W>] {
        &self.edges
    }
}

impl<V, W> Default for Graph<V, W> where V: Eq + Hash + Clone {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> WeightedGraph for Graph<V, W> where
    V: Eq + Hash + Clone,
    W: PartialOrd + Clone,
{
    type Vertex = V;
    type Weight = W;

    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.vertices.iter().cloned()
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V, W>> + '_ {
        self.edges.iter().cloned()
    }
}

impl<V, W> Extend<Edge<V, W>> for Graph<V, W> where V: Eq + Hash + Clone {
    fn extend<I>(&mut self, iter: I) where I: IntoIterator<Item = Edge<V, W>> {
        for edge in iter {
            self.add_edge(edge.source, edge.target, edge.weight);
        }
    }
}

impl<V, W> Extend<(V, V, W)> for Graph<V, W> where V: Eq + Hash + Clone {
    fn extend<I>(&mut self, iter: I) where I: IntoIterator<Item = (V, V, W)> {
        self.extend(iter.into_iter().map(Edge::from));
    }
}

impl<V, W> FromIterator<Edge<V, W>> for Graph<V, W> where V: Eq + Hash + Clone {
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = Edge<V, W>> {
        let mut graph = Self::new();
        graph.extend(iter);

        graph
    }
}

impl<V, W> FromIterator<(V, V, W)> for Graph<V, W> where V: Eq + Hash + Clone {
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = (V, V, W)> {
        iter.into_iter().map(Edge::from).collect()
    }
}

#[cfg(feature = "rayon")]
impl<V, W> ParallelExtend<Edge<V, W>> for Graph<V, W> where
    V: Eq + Hash + Clone + Send,
    W: Send,
{
    fn par_extend<I>(&mut self, par_iter: I) where I: IntoParallelIterator<Item = Edge<V, W>> {
        // The edges are gathered in parallel, the vertex set is filled in their order.
        let edges: Vec<Edge<V, W>> = par_iter.into_par_iter().collect();

        self.extend(edges);
    }
}

#[cfg(feature = "rayon")]
impl<V, W> FromParallelIterator<Edge<V, W>> for Graph<V, W> where
    V: Eq + Hash + Clone + Send,
    W: Send,
{
    fn from_par_iter<I>(par_iter: I) -> Self where I: IntoParallelIterator<Item = Edge<V, W>> {
        let par_iter = par_iter.into_par_iter();

        let mut graph = if let Some(len) = par_iter.opt_len() {
            Self::with_capacity(0, len)
        } else {
            Self::new()
        };

        graph.par_extend(par_iter);

        graph
    }
}

#[cfg(feature = "proptest")]
impl<W> Arbitrary for Graph<u8, W> where
    W: Arbitrary + PartialOrd + Clone,
    W::Strategy: 'static,
{
    /// The amount of vertices and the amount of edges.
    type Parameters = (proptest::collection::SizeRange, proptest::collection::SizeRange);
    type Strategy = BoxedStrategy<Self>;

    /// Generates graphs over the vertices `0 .. n` where `n` is taken from the first range.
    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        let (vertices, edges) = params;
        let range = vertices.start() .. vertices.end_excl().min(256);

        range.prop_flat_map(move |n| {
            let n = n.max(1) as u8;
            let n_vertices = n as usize;

            (proptest::collection::vec((0 .. n, 0 .. n, any::<W>()), edges.clone()))
                .prop_map(move |list| {
                    let mut graph = Self::with_capacity(n_vertices, list.len());
                    graph.vertices.extend(0 .. n);
                    graph.extend(list);

                    graph
                })
        }).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_become_vertices_once() {
        let graph: Graph<u32, u32> = vec![(1, 2, 5), (2, 1, 3), (3, 3, 1)].into_iter().collect();

        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.edge_list()[2].is_loop());
        assert!(graph.edge_list()[1].connects(&1, &2));
    }

    #[test]
    fn reversed_edge_connects_the_same_vertices() {
        let edge = Edge::new("x", "y", 2);
        let reversed = edge.reversed();

        assert_eq!(reversed, Edge::new("y", "x", 2));
        assert!(reversed.connects(&"x", &"y"));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn collects_from_parallel_iterator() {
        let graph: Graph<usize, usize> = (0 .. 100usize)
            .into_par_iter()
            .map(|i| Edge::new(i, i + 1, i))
            .collect();

        assert_eq!(graph.edge_count(), 100);
        assert_eq!(graph.vertex_count(), 101);
        assert_eq!(graph.edge_list()[42], Edge::new(42, 43, 42));
    }
}
