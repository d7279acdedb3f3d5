//! The errors returned by the union-find structure and by Kruskal's algorithm.

use std::fmt;

/// An error that can occur when using a [`UnionFind`] or running [`Kruskal`].
///
/// The type parameter is the element or vertex type so the offending value is
/// returned to the caller instead of a sentinel.
///
/// [`UnionFind`]: crate::UnionFind
/// [`Kruskal`]: crate::Kruskal
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error<K> {
    /// The element was never registered with `make_set` or `insert`.
    UndefinedElement(K),
    /// An edge references a vertex that is not part of the vertex set.
    MissingVertex {
        /// The position of the edge in the sequence returned by `edges()`.
        edge: usize,
        /// The endpoint that could not be found.
        vertex: K,
    },
    /// The weight of an edge can not be ordered, like a `NaN` float.
    IncomparableWeight {
        /// The position of the edge in the sequence returned by `edges()`.
        edge: usize,
    },
}

impl<K> Error<K> {
    /// Returns `true` if this error describes a malformed graph rather than a misused
    /// union-find.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Error::UndefinedElement(_) => false,
            Error::MissingVertex { .. } | Error::IncomparableWeight { .. } => true,
        }
    }
}

impl<K> fmt::Display for Error<K> where K: fmt::Debug {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UndefinedElement(element) => {
                write!(formatter, "element {:?} is not part of any set", element)
            },
            Error::MissingVertex { edge, vertex } => {
                write!(formatter, "edge {} references unknown vertex {:?}", edge, vertex)
            },
            Error::IncomparableWeight { edge } => {
                write!(formatter, "edge {} has a weight that can not be ordered", edge)
            },
        }
    }
}

impl<K> std::error::Error for Error<K> where K: fmt::Debug {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_element() {
        let error = Error::UndefinedElement("x");
        assert_eq!(error.to_string(), "element \"x\" is not part of any set");
        assert!(!error.is_invalid_input());
    }

    #[test]
    fn invalid_input_is_reported_with_edge_position() {
        let missing = Error::MissingVertex { edge: 3, vertex: 7 };
        assert_eq!(missing.to_string(), "edge 3 references unknown vertex 7");
        assert!(missing.is_invalid_input());

        let weight: Error<u32> = Error::IncomparableWeight { edge: 0 };
        assert_eq!(weight.to_string(), "edge 0 has a weight that can not be ordered");
        assert!(weight.is_invalid_input());
    }
}
