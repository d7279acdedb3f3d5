use {
    std::{
        borrow::Borrow,
        hash::Hash,
        iter::Sum,
    },
    crate::{
        Edge,
        Error,
        UnionFind,
    },
};

/// A minimum spanning forest as it is built by [`Kruskal`].
///
/// It holds the accepted edges in the order they were accepted, each logical edge once and in
/// the orientation it had in the input. It also keeps the final [`UnionFind`] over the vertices
/// so the trees of the forest can be queried.
///
/// [`Kruskal`]: struct.Kruskal.html
/// [`UnionFind`]: ../disjoint_sets/union_find/struct.UnionFind.html
#[derive(Clone, Debug)]
pub struct SpanningForest<V, W> {
    pub(crate) edges: Vec<Edge<V, W>>,
    pub(crate) union_find: UnionFind<V>,
}

impl<V, W> SpanningForest<V, W> {
    /// Returns the accepted edges in the order they were accepted.
    #[inline]
    pub fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }

    /// Returns the accepted edges.
    #[inline]
    pub fn into_edges(self) -> Vec<Edge<V, W>> {
        self.edges
    }

    /// Returns the amount of accepted edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if no edge was accepted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the sum of the weights of the accepted edges.
    pub fn total_weight(&self) -> W where W: Sum + Clone {
        self.edges.iter().map(|edge| edge.weight.clone()).sum()
    }

    /// Returns the amount of trees in the forest, which is the amount of connected
    /// components of the graph.
    ///
    /// Every vertex without accepted edges is a tree on its own.
    #[inline]
    pub fn tree_count(&self) -> usize {
        self.union_find.amount_of_sets()
    }

    /// Returns `true` if the forest is a single tree that spans every vertex.
    ///
    /// A graph without vertices has no spanning tree.
    #[inline]
    pub fn is_spanning_tree(&self) -> bool {
        self.tree_count() == 1
    }

    /// Returns the sets of vertices that make up the trees of the forest.
    ///
    /// The trees are given in the order of their first vertex.
    pub fn components(&self) -> Vec<Vec<&V>> {
        self.union_find.all_sets().map(|set| set.collect()).collect()
    }

    /// Returns the final state of the union-find over the vertices.
    #[inline]
    pub fn union_find(&self) -> &UnionFind<V> {
        &self.union_find
    }
}

impl<V, W> SpanningForest<V, W> where V: Eq + Hash + Clone {
    /// Returns `true` if `first` and `second` are in the same tree of the forest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedElement`] if either vertex is not part of the graph.
    ///
    /// [`Error::UndefinedElement`]: ../enum.Error.html#variant.UndefinedElement
    pub fn connected<Q1, Q2>(&self, first: &Q1, second: &Q2) -> Result<bool, Error<V>> where
        V: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ToOwned<Owned = V> + ?Sized,
        Q2: Eq + Hash + ToOwned<Owned = V> + ?Sized,
    {
        self.union_find.connected(first, second)
    }
}
