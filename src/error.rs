//! Failure kinds shared by the whole shortest-paths family (spec §7).
use core::fmt;

/// A structural or input failure: the call aborts immediately, as opposed
/// to [`crate::path::NegativeCycle`] which is a first-class result value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An algorithm that requires a directed graph was given an undirected one.
    NotDirected,
    /// An algorithm that requires an undirected graph was given a directed one.
    NotUndirected,
    /// A DAG-only algorithm found a cycle while building a topological order.
    HasCycle,
    /// Alias of [`Error::HasCycle`] used where the spec names the precondition `NotAcyclic`.
    NotAcyclic,
    /// A non-negative-weight algorithm observed a negative edge weight.
    NegativeEdgeWeight {
        /// The offending edge index.
        edge: usize,
    },
    /// An integer-only algorithm received a weight function that is not integral.
    NonIntegerWeight {
        /// The offending edge index.
        edge: usize,
    },
    /// A result query referenced a vertex index outside `[0, n)`.
    NoSuchVertex {
        /// The offending vertex index.
        index: usize,
    },
    /// A result query referenced an edge index outside `[0, m)`.
    NoSuchEdge {
        /// The offending edge index.
        index: usize,
    },
    /// A subset-restricted APSP query used a source outside the computed subset.
    SubsetViolation {
        /// The vertex that was not part of the subset.
        vertex: usize,
    },
    /// Voronoi was given the same site vertex twice.
    DuplicateSite {
        /// The repeated site vertex.
        site: usize,
    },
    /// A weight function produced `NaN` for some edge.
    NanWeight {
        /// The offending edge index.
        edge: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::NotDirected => write!(f, "algorithm requires a directed graph"),
            Error::NotUndirected => write!(f, "algorithm requires an undirected graph"),
            Error::HasCycle => write!(f, "graph is not acyclic"),
            Error::NotAcyclic => write!(f, "graph is not acyclic"),
            Error::NegativeEdgeWeight { edge } => {
                write!(f, "negative weight on edge {edge}, which this algorithm forbids")
            }
            Error::NonIntegerWeight { edge } => {
                write!(f, "non-integer weight on edge {edge}")
            }
            Error::NoSuchVertex { index } => write!(f, "no such vertex: {index}"),
            Error::NoSuchEdge { index } => write!(f, "no such edge: {index}"),
            Error::SubsetViolation { vertex } => {
                write!(f, "vertex {vertex} is outside the computed source subset")
            }
            Error::DuplicateSite { site } => write!(f, "site {site} was supplied more than once"),
            Error::NanWeight { edge } => write!(f, "weight function produced NaN for edge {edge}"),
        }
    }
}

impl std::error::Error for Error {}
