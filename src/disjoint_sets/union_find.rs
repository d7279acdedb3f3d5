//! A [disjoint-sets/union-find] implementation over a universe of element identifiers.
//!
//! See [`UnionFind<K>`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`UnionFind<K>`]: struct.UnionFind.html

use {
    std::{
        borrow::Borrow,
        cmp::Ordering,
        collections::HashMap,
        hash::Hash,
        iter::FusedIterator,
        ops,
    },
    crate::{
        disjoint_sets::{
            metadata::Metadata,
            Config,
            Linking,
        },
        Error,
    },
};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A [disjoint-sets/union-find] forest over elements of type `K`.
///
/// Every element is registered once with [`make_set`] or [`insert`] and starts in its own set.
/// Sets are joined with [`union`] and the representative of a set is found with [`find`].
/// Any element identifier that implements `Eq`, `Hash` and `Clone` can be used and lookups
/// accept any borrowed form of it, so a `UnionFind<String>` can be queried with a `&str`.
///
/// Each element is assigned an index into an arena of parent pointers, ranks and links.
/// The links form a circular linked list of the set the element is in.
/// This allows for fast iteration of a set using the [`set`] method.
///
/// [`find`] takes `&self` and still compresses the path it walks.
/// Because of this a `UnionFind` is not `Sync` and can not be shared between threads
/// while it is being queried.
///
/// # Examples
///
/// ```
/// use kruskal_forest::UnionFind;
///
/// let mut union_find = UnionFind::new();
/// union_find.make_set(1 ..= 6);
///
/// union_find.union(&1, &2).unwrap();
/// union_find.union(&2, &3).unwrap();
/// union_find.union(&2, &4).unwrap();
/// union_find.union(&5, &6).unwrap();
///
/// assert!(union_find.connected(&1, &4).unwrap());
/// assert!(!union_find.connected(&4, &5).unwrap());
/// assert_eq!(union_find.amount_of_sets(), 2);
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
/// [`make_set`]: #method.make_set
/// [`insert`]: #method.insert
/// [`union`]: #method.union
/// [`find`]: #method.find
/// [`set`]: #method.set
#[derive(Clone)]
pub struct UnionFind<K> {
    /// Maps each element to its index in `elements` and `meta`.
    indices: HashMap<K, usize>,
    /// The elements in the order they were registered.
    elements: Vec<K>,
    /// The metadata for each element, this vec will always have the same size as `elements`.
    meta: Vec<Metadata>,
    config: Config,
}

/// Creates a [`UnionFind`] containing the arguments.
///
/// There are two forms of the `union_find!` macro:
///
/// - Create a [`UnionFind`] containing a given list of elements all in distinct sets:
///
/// ```
/// # #[macro_use]
/// # extern crate kruskal_forest;
/// #
/// # fn main() {
/// let union_find = union_find!['a', 'b', 'c'];
///
/// assert!(union_find.is_singleton(&'a').unwrap());
/// assert!(union_find.is_singleton(&'b').unwrap());
/// assert!(union_find.is_singleton(&'c').unwrap());
/// # }
/// ```
///
/// - Create a [`UnionFind`] containing a given list of elements in the sets specified:
///
/// ```
/// # #[macro_use]
/// # extern crate kruskal_forest;
/// #
/// # fn main() {
/// let union_find = union_find![
///     'a' => 0,
///     'b' => 1,
///     'c' => 2,
///     'd' => 1,
///     'e' => 0,
/// ];
///
/// assert!(union_find.connected(&'a', &'e').unwrap());
/// assert!(union_find.connected(&'b', &'d').unwrap());
/// assert!(union_find.is_singleton(&'c').unwrap());
/// # }
/// ```
///
/// You can use any set identifiers that implement `Hash` and `Eq`.
/// These identifiers are only used while constructing the [`UnionFind`] and are not stored.
///
/// [`UnionFind`]: disjoint_sets/union_find/struct.UnionFind.html
#[macro_export]
macro_rules! union_find {
    ($($elem: expr),*) => {
        {
            let len = $crate::union_find_count_expr![$($elem),*];
            let mut union_find = $crate::UnionFind::with_capacity(len);

            $(
                union_find.insert($elem);
            )*

            union_find
        }
    };
    ($($elem: expr,)*) => {
        $crate::union_find![$($elem),*]
    };
    ($($elem: expr => $set: expr),*) => {
        {
            let len = $crate::union_find_count_expr![$($elem),*];
            let mut union_find = $crate::UnionFind::with_capacity(len);
            let mut map = ::std::collections::HashMap::new();

            $(
                let elem = $elem;
                union_find.insert(::std::clone::Clone::clone(&elem));

                match map.entry($set) {
                    ::std::collections::hash_map::Entry::Occupied(occupied) => {
                        // Both elements are registered so this can not fail.
                        let _ = union_find.union(occupied.get(), &elem);
                    },
                    ::std::collections::hash_map::Entry::Vacant(vacant) => {
                        vacant.insert(elem);
                    },
                }
            )*

            union_find
        }
    };
    ($($elem: expr => $set: expr,)*) => {
        $crate::union_find![$($elem => $set),*]
    }
}

impl<K> UnionFind<K> {
    /// Constructs a new, empty `UnionFind<K>` with the default configuration.
    ///
    /// The `UnionFind<K>` will not allocate until elements are added to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_forest::UnionFind;
    ///
    /// let union_find: UnionFind<u32> = UnionFind::new();
    ///
    /// assert!(union_find.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Constructs a new, empty `UnionFind<K>` that links and compresses as configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_forest::{Config, Linking, UnionFind};
    ///
    /// let mut union_find = UnionFind::with_config(Config::PLAIN);
    /// union_find.make_set(vec![1, 2]);
    /// union_find.union(&1, &2).unwrap();
    ///
    /// // Plain linking keeps no ranks.
    /// assert_eq!(union_find.config().linking, Linking::Simple);
    /// assert_eq!(union_find.rank(&1).unwrap(), None);
    /// ```
    #[inline]
    pub fn with_config(config: Config) -> Self {
        Self {
            indices: HashMap::new(),
            elements: Vec::new(),
            meta: Vec::new(),
            config,
        }
    }

    /// Constructs a new, empty `UnionFind<K>` with the specified capacity.
    ///
    /// The `UnionFind<K>` will be able to hold at least `capacity`
    /// elements without reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: HashMap::with_capacity(capacity),
            elements: Vec::with_capacity(capacity),
            meta: Vec::with_capacity(capacity),
            config: Config::default(),
        }
    }

    /// Returns the configuration of this `UnionFind<K>`.
    #[inline]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Returns the amount of registered elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no element has been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the registered elements in the order they were added.
    #[inline]
    pub fn elements(&self) -> &[K] {
        &self.elements
    }

    /// Returns an iterator over the current parent pointer of every element.
    ///
    /// A root is paired with itself.
    /// The pointers are read as they are so this does not compress anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_forest::{Config, UnionFind};
    ///
    /// let mut union_find = UnionFind::with_config(Config::PLAIN);
    /// union_find.make_set(1 ..= 3);
    /// union_find.union(&1, &2).unwrap();
    ///
    /// let parents: Vec<_> = union_find.parents().collect();
    /// assert_eq!(parents, vec![(&1, &1), (&2, &1), (&3, &3)]);
    /// ```
    pub fn parents(&self) -> Parents<K> {
        Parents {
            union_find: self,
            range: 0 .. self.len(),
        }
    }

    /// Returns the amount of sets in the `UnionFind<K>`.
    ///
    /// This method will be executed in `O(n α(n))` where `α` is the inverse Ackermann function.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate kruskal_forest;
    /// #
    /// # fn main() {
    /// let union_find = union_find![
    ///     8 => 0,
    ///     3 => 1,
    ///     4 => 0,
    ///     5 => 1,
    ///     7 => 2,
    /// ];
    ///
    /// assert!(union_find.amount_of_sets() == 3);
    /// # }
    /// ```
    pub fn amount_of_sets(&self) -> usize {
        let mut done = bit_vec![false; self.len()];
        let mut count = 0;

        for i in 0 .. self.len() {
            let root = self.find_index(i);

            if !done[root] {
                done.set(root, true);
                count += 1;
            }
        }

        count
    }

    /// Returns an iterator over all sets of the `UnionFind<K>`.
    ///
    /// The sets are given in the order of their first registered element.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate kruskal_forest;
    /// #
    /// # fn main() {
    /// let union_find = union_find![
    ///     'a' => 0,
    ///     'b' => 1,
    ///     'c' => 0,
    /// ];
    ///
    /// let sets: Vec<Vec<char>> = union_find
    ///     .all_sets()
    ///     .map(|set| {
    ///         let mut set: Vec<char> = set.cloned().collect();
    ///         set.sort();
    ///         set
    ///     })
    ///     .collect();
    ///
    /// assert_eq!(sets, vec![vec!['a', 'c'], vec!['b']]);
    /// # }
    /// ```
    pub fn all_sets(&self) -> AllSets<K> {
        AllSets {
            union_find: self,
            done: bit_vec![false; self.len()],
            range: 0 .. self.len(),
        }
    }

    /// Gives the index of the root of the tree that `index` belongs to.
    ///
    /// When path compression is enabled every index on the way is pointed directly at
    /// the root before returning.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub(crate) fn find_index(&self, index: usize) -> usize {
        let root = self.find_final(index);

        if self.config.path_compression {
            let mut current = index;

            while current != root {
                let next = self.meta[current].parent();
                self.meta[current].set_parent(root);
                current = next;
            }
        }

        root
    }

    /// Gives the index of the root of the tree that `index` belongs to.
    ///
    /// This method wont update the parents while finding the root.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    #[inline]
    pub(crate) fn find_final(&self, mut index: usize) -> usize {
        while index != self.meta[index].parent() {
            index = self.meta[index].parent();
        }

        index
    }

    /// Joins the trees containing the indices `first` and `second`.
    ///
    /// Returns `false` if they were already in the same tree.
    fn union_indices(&mut self, first: usize, second: usize) -> bool {
        let i = self.find_index(first);
        let j = self.find_index(second);

        if i == j {
            return false
        }

        // We swap the values of the links so both circular lists become one.
        let link_i = self.meta[i].link();
        let link_j = self.meta[j].link();
        self.meta[i].set_link(link_j);
        self.meta[j].set_link(link_i);

        match self.config.linking {
            Linking::Simple => {
                self.meta[j].set_parent(i);
            },
            Linking::ByRank => {
                let rank_i = self.meta[i].rank();
                let rank_j = self.meta[j].rank();

                // We add to the tree with the highest rank.
                match Ord::cmp(&rank_i, &rank_j) {
                    Ordering::Less => {
                        self.meta[i].set_parent(j);
                    },
                    Ordering::Equal => {
                        // We add the second tree to the first tree.
                        self.meta[j].set_parent(i);
                        // The first tree becomes higher.
                        self.meta[i].set_rank(rank_i + 1);
                    },
                    Ordering::Greater => {
                        self.meta[j].set_parent(i);
                    },
                }
            },
        }

        true
    }
}

impl<K> UnionFind<K> where K: Eq + Hash + Clone {
    /// Registers an element in its own set.
    ///
    /// Returns `false` and leaves its set, parent and rank untouched if the element
    /// was already registered.
    ///
    /// # Panics
    ///
    /// With the `compact` feature, panics if the amount of elements exceeds the
    /// maximum of the compact representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_forest::UnionFind;
    ///
    /// let mut union_find = UnionFind::new();
    ///
    /// assert!(union_find.insert("a"));
    /// assert!(union_find.insert("b"));
    /// union_find.union(&"a", &"b").unwrap();
    ///
    /// assert!(!union_find.insert("b"));
    /// assert!(union_find.connected(&"a", &"b").unwrap());
    /// ```
    pub fn insert(&mut self, element: K) -> bool {
        if self.indices.contains_key(&element) {
            return false
        }

        let index = self.elements.len();
        self.indices.insert(element.clone(), index);
        self.elements.push(element);
        self.meta.push(Metadata::new(index));

        true
    }

    /// Registers every element of `elements` in its own set.
    ///
    /// Elements that are already registered keep their current set, parent and rank.
    /// Returns the amount of elements that were newly registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_forest::UnionFind;
    ///
    /// let mut union_find = UnionFind::new();
    ///
    /// assert_eq!(union_find.make_set(vec![1, 2, 3]), 3);
    /// union_find.union(&1, &2).unwrap();
    ///
    /// assert_eq!(union_find.make_set(vec![2, 3, 4]), 1);
    /// assert_eq!(union_find.len(), 4);
    /// assert!(union_find.connected(&1, &2).unwrap());
    /// ```
    pub fn make_set<I>(&mut self, elements: I) -> usize where I: IntoIterator<Item = K> {
        let elements = elements.into_iter();
        let (lower, _) = elements.size_hint();
        self.reserve(lower);

        let mut added = 0;
        for element in elements {
            if self.insert(element) {
                added += 1;
            }
        }

        added
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.indices.reserve(additional);
        self.elements.reserve(additional);
        self.meta.reserve(additional);
    }

    /// Returns `true` if `element` has been registered.
    #[inline]
    pub fn contains<Q>(&self, element: &Q) -> bool where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.indices.contains_key(element)
    }

    /// Returns the representative of the set that `element` belongs to.
    ///
    /// This method will be executed in `O(α(n))` amortized time where `α` is the inverse
    /// Ackermann function. Every element of a set gives the same representative.
    /// The parent pointers are followed in a loop and, when path compression is enabled,
    /// every element visited on the way is pointed directly at the representative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedElement`] if `element` was never registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_forest::{Config, UnionFind};
    ///
    /// let mut union_find = UnionFind::with_config(Config::COMPRESSED);
    /// union_find.make_set(1 ..= 5);
    /// for (x, y) in vec![(4, 5), (3, 4), (2, 3), (1, 2)] {
    ///     union_find.union(&x, &y).unwrap();
    /// }
    ///
    /// // Plain linking built the chain 5 -> 4 -> 3 -> 2 -> 1.
    /// assert_eq!(union_find.parent(&5).unwrap(), &4);
    ///
    /// assert_eq!(union_find.find(&5).unwrap(), &1);
    ///
    /// // The path has been compressed.
    /// assert_eq!(union_find.parent(&5).unwrap(), &1);
    /// assert_eq!(union_find.parent(&4).unwrap(), &1);
    /// assert_eq!(union_find.parent(&3).unwrap(), &1);
    ///
    /// assert!(union_find.find(&6).is_err());
    /// ```
    ///
    /// [`Error::UndefinedElement`]: ../../enum.Error.html#variant.UndefinedElement
    pub fn find<Q>(&self, element: &Q) -> Result<&K, Error<K>> where
        K: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
    {
        let index = self.index_of(element)?;

        Ok(&self.elements[self.find_index(index)])
    }

    /// Joins the sets of `first` and `second`.
    ///
    /// Returns `true` if two different sets were joined and `false` if both elements
    /// already shared a set, in which case nothing is changed apart from path compression.
    /// How the roots are linked depends on the [`Linking`] of the configuration.
    ///
    /// This method will be executed in `O(α(n))` amortized time with union-by-rank.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedElement`] if either element was never registered.
    /// Nothing is modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_forest::UnionFind;
    ///
    /// let mut union_find = UnionFind::new();
    /// union_find.make_set(vec!['a', 'b', 'c', 'd']);
    ///
    /// assert!(union_find.union(&'a', &'b').unwrap());
    /// assert!(union_find.union(&'c', &'d').unwrap());
    /// assert!(union_find.union(&'b', &'d').unwrap());
    /// assert!(!union_find.union(&'a', &'c').unwrap());
    ///
    /// assert_eq!(union_find.len_of_set(&'a').unwrap(), 4);
    /// assert!(union_find.union(&'a', &'z').is_err());
    /// ```
    ///
    /// [`Linking`]: ../enum.Linking.html
    /// [`Error::UndefinedElement`]: ../../enum.Error.html#variant.UndefinedElement
    pub fn union<Q1, Q2>(&mut self, first: &Q1, second: &Q2) -> Result<bool, Error<K>> where
        K: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ToOwned<Owned = K> + ?Sized,
        Q2: Eq + Hash + ToOwned<Owned = K> + ?Sized,
    {
        let i = self.index_of(first)?;
        let j = self.index_of(second)?;

        Ok(self.union_indices(i, j))
    }

    /// Returns `true` if `first` and `second` are in the same set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedElement`] if either element was never registered.
    ///
    /// [`Error::UndefinedElement`]: ../../enum.Error.html#variant.UndefinedElement
    #[inline]
    pub fn connected<Q1, Q2>(&self, first: &Q1, second: &Q2) -> Result<bool, Error<K>> where
        K: Borrow<Q1> + Borrow<Q2>,
        Q1: Eq + Hash + ToOwned<Owned = K> + ?Sized,
        Q2: Eq + Hash + ToOwned<Owned = K> + ?Sized,
    {
        let i = self.index_of(first)?;
        let j = self.index_of(second)?;

        Ok(self.find_index(i) == self.find_index(j))
    }

    /// Returns the current parent of `element` without following it to the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedElement`] if `element` was never registered.
    ///
    /// [`Error::UndefinedElement`]: ../../enum.Error.html#variant.UndefinedElement
    pub fn parent<Q>(&self, element: &Q) -> Result<&K, Error<K>> where
        K: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
    {
        let index = self.index_of(element)?;

        Ok(&self.elements[self.meta[index].parent()])
    }

    /// Returns the rank of `element`, or `None` when ranks are not kept.
    ///
    /// The rank is an upper bound on the height of the tree below `element`.
    /// After path compression it is not the exact height anymore.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedElement`] if `element` was never registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_forest::UnionFind;
    ///
    /// let mut union_find = UnionFind::new();
    /// union_find.make_set(1 ..= 4);
    /// union_find.union(&1, &2).unwrap();
    /// union_find.union(&3, &4).unwrap();
    /// union_find.union(&3, &1).unwrap();
    ///
    /// assert_eq!(union_find.find(&2).unwrap(), &3);
    /// assert_eq!(union_find.rank(&3).unwrap(), Some(2));
    /// assert_eq!(union_find.rank(&1).unwrap(), Some(1));
    /// ```
    ///
    /// [`Error::UndefinedElement`]: ../../enum.Error.html#variant.UndefinedElement
    pub fn rank<Q>(&self, element: &Q) -> Result<Option<usize>, Error<K>> where
        K: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
    {
        let index = self.index_of(element)?;

        Ok(match self.config.linking {
            Linking::Simple => None,
            Linking::ByRank => Some(self.meta[index].rank()),
        })
    }

    /// Returns `true` if `element` is the only element of its set.
    ///
    /// This will be done in `O(1)` time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedElement`] if `element` was never registered.
    ///
    /// [`Error::UndefinedElement`]: ../../enum.Error.html#variant.UndefinedElement
    #[inline]
    pub fn is_singleton<Q>(&self, element: &Q) -> Result<bool, Error<K>> where
        K: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
    {
        let index = self.index_of(element)?;

        Ok(self.meta[index].link() == index)
    }

    /// Returns the amount of elements in the set that `element` belongs to.
    ///
    /// This will be done in `O(m)` time where `m` is the size of that set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedElement`] if `element` was never registered.
    ///
    /// [`Error::UndefinedElement`]: ../../enum.Error.html#variant.UndefinedElement
    pub fn len_of_set<Q>(&self, element: &Q) -> Result<usize, Error<K>> where
        K: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
    {
        Ok(self.set(element)?.count())
    }

    /// Returns an iterator over the elements of the set that `element` belongs to.
    ///
    /// The iterator starts with `element` itself and every next element is found in `O(1)` time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedElement`] if `element` was never registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use kruskal_forest::UnionFind;
    ///
    /// let mut union_find = UnionFind::new();
    /// union_find.make_set(0 .. 10);
    /// union_find.union(&1, &5).unwrap();
    /// union_find.union(&5, &9).unwrap();
    ///
    /// let mut set: Vec<i32> = union_find.set(&9).unwrap().cloned().collect();
    /// set.sort();
    ///
    /// assert_eq!(set, vec![1, 5, 9]);
    /// ```
    ///
    /// [`Error::UndefinedElement`]: ../../enum.Error.html#variant.UndefinedElement
    pub fn set<Q>(&self, element: &Q) -> Result<Set<K>, Error<K>> where
        K: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
    {
        let index = self.index_of(element)?;

        Ok(Set {
            union_find: self,
            current: Some(index),
            start: index,
        })
    }

    fn index_of<Q>(&self, element: &Q) -> Result<usize, Error<K>> where
        K: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
    {
        self.indices
            .get(element)
            .copied()
            .ok_or_else(|| Error::UndefinedElement(element.to_owned()))
    }
}

impl<K> Default for UnionFind<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> std::fmt::Debug for UnionFind<K> where K: std::fmt::Debug {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        // We map the roots to `usize` names.
        let mut map = HashMap::with_capacity(self.len());
        let mut builder = formatter.debug_list();
        let mut names = 0;

        for i in 0 .. self.len() {
            let root = self.find_final(i);

            let name = if let Some(&name) = map.get(&root) {
                // If we already have a name we use it.
                name
            } else {
                // If we don't we make a new name.
                let new_name = names;
                map.insert(root, new_name);
                names += 1;

                new_name
            };

            builder.entry(&format_args!("{:?} => {}", self.elements[i], name));
        }

        builder.finish()
    }
}

impl<K> PartialEq for UnionFind<K> where K: Eq + Hash {
    /// Two `UnionFind`s are equal if they contain the same elements grouped in the same sets.
    ///
    /// The representatives, ranks and registration order do not matter.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false
        }

        // We map the roots of self to the roots of other and the other way around.
        let mut forward = HashMap::with_capacity(self.len());
        let mut backward = HashMap::with_capacity(self.len());

        for (i, element) in self.elements.iter().enumerate() {
            let j = match other.indices.get(element) {
                Some(&j) => j,
                None => return false,
            };

            let self_root = self.find_final(i);
            let other_root = other.find_final(j);

            if *forward.entry(self_root).or_insert(other_root) != other_root {
                return false
            }
            if *backward.entry(other_root).or_insert(self_root) != self_root {
                return false
            }
        }

        true
    }
}

impl<K> Eq for UnionFind<K> where K: Eq + Hash {}

impl<K> Extend<K> for UnionFind<K> where K: Eq + Hash + Clone {
    fn extend<I>(&mut self, iter: I) where I: IntoIterator<Item = K> {
        self.make_set(iter);
    }
}

impl<'a, K> Extend<&'a K> for UnionFind<K> where K: Eq + Hash + Clone + 'a {
    fn extend<I>(&mut self, iter: I) where I: IntoIterator<Item = &'a K> {
        self.make_set(iter.into_iter().cloned());
    }
}

impl<K> FromIterator<K> for UnionFind<K> where K: Eq + Hash + Clone {
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = K> {
        let mut union_find = Self::new();
        union_find.make_set(iter);

        union_find
    }
}

impl<'a, K> IntoIterator for &'a UnionFind<K> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    fn into_iter(self) -> std::slice::Iter<'a, K> {
        self.elements.iter()
    }
}

#[cfg(feature = "proptest")]
impl<K> Arbitrary for UnionFind<K> where
    K: Arbitrary + Eq + Hash + Clone,
    K::Strategy: 'static,
{
    type Parameters = (proptest::collection::SizeRange, K::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        use std::collections::hash_map;

        let (size_range, params) = params;
        let params = (size_range, (params, ()));

        (Vec::<(K, usize)>::arbitrary_with(params)).prop_map(|vec| {
            let mut union_find = Self::with_capacity(vec.len());

            // We map a `set_number` to an element of that set.
            let mut map = hash_map::HashMap::with_capacity(vec.len());

            for (element, set_number) in vec {
                if !union_find.insert(element.clone()) {
                    continue
                }

                let set_number = set_number.trailing_zeros();
                let index = union_find.len() - 1;

                match map.entry(set_number) {
                    hash_map::Entry::Occupied(occupied) => {
                        union_find.union_indices(*occupied.get(), index);
                    },
                    hash_map::Entry::Vacant(vacant) => {
                        vacant.insert(index);
                    },
                }
            }

            union_find
        }).boxed()
    }
}

/// An iterator over the current parent pointers of a `UnionFind<K>`.
///
/// This struct is created by the [`parents`] method on [`UnionFind<K>`].
///
/// [`parents`]: struct.UnionFind.html#method.parents
/// [`UnionFind<K>`]: struct.UnionFind.html
#[derive(Clone, Debug)]
pub struct Parents<'a, K: 'a> {
    union_find: &'a UnionFind<K>,
    range: ops::Range<usize>,
}

impl<'a, K> Iterator for Parents<'a, K> {
    type Item = (&'a K, &'a K);

    fn next(&mut self) -> Option<(&'a K, &'a K)> {
        let index = self.range.next()?;
        let parent = self.union_find.meta[index].parent();

        Some((&self.union_find.elements[index], &self.union_find.elements[parent]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<'a, K> ExactSizeIterator for Parents<'a, K> {}

impl<'a, K> FusedIterator for Parents<'a, K> {}

/// An iterator over a set in a `UnionFind<K>`.
///
/// This struct is created by the [`set`] method on [`UnionFind<K>`].
/// See its documentation for more.
///
/// [`set`]: struct.UnionFind.html#method.set
/// [`UnionFind<K>`]: struct.UnionFind.html
#[derive(Clone, Debug)]
pub struct Set<'a, K: 'a> {
    union_find: &'a UnionFind<K>,
    current: Option<usize>,
    start: usize,
}

impl<'a, K> Iterator for Set<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let current = self.current?;
        let next = self.union_find.meta[current].link();

        // We are back where we started.
        self.current = if next == self.start {
            None
        } else {
            Some(next)
        };

        Some(&self.union_find.elements[current])
    }
}

impl<'a, K> FusedIterator for Set<'a, K> {}

/// An iterator over all sets in a `UnionFind<K>`.
///
/// This struct is created by the [`all_sets`] method on [`UnionFind<K>`].
/// See its documentation for more information.
///
/// [`all_sets`]: struct.UnionFind.html#method.all_sets
/// [`UnionFind<K>`]: struct.UnionFind.html
#[derive(Clone, Debug)]
pub struct AllSets<'a, K: 'a> {
    union_find: &'a UnionFind<K>,
    done: bit_vec::BitVec,
    range: ops::Range<usize>,
}

impl<'a, K> Iterator for AllSets<'a, K> {
    type Item = Set<'a, K>;

    fn next(&mut self) -> Option<Set<'a, K>> {
        // We keep going until we find a set we have not returned yet.
        loop {
            let index = self.range.next()?;
            let root = self.union_find.find_final(index);

            // If we have not returned this set yet.
            if !self.done[root] {
                self.done.set(root, true);

                return Some(Set {
                    union_find: self.union_find,
                    current: Some(index),
                    start: index,
                })
            }
        }
    }
}

impl<'a, K> FusedIterator for AllSets<'a, K> {}
