//! Shortest-path algorithms over a dense, index-addressed graph
//! `[0,n)`/`[0,m)`: single-source (BFS, Dijkstra, Dial, DAG relaxation,
//! Bellman-Ford), all-pairs (Floyd-Warshall, Johnson), single-pair
//! (bidirectional Dijkstra, A*), k-shortest simple paths, Voronoi
//! partitions, and topological ordering.
//!
//! The crate has no notion of a user-facing node identifier or a
//! mutable graph: callers own the mapping from their own identifiers
//! to `[0,n)` indices, and build an immutable [`graph::IndexedGraph`]
//! once up front. Every algorithm takes that graph plus a
//! [`weight::WeightFn`] and returns a typed result or a structural
//! [`error::Error`]; a negative-weight cycle, where relevant, is
//! returned as a first-class [`path::NegativeCycle`] value rather than
//! through a separate exception channel.
#![warn(missing_debug_implementations)]

pub mod apsp;
pub mod bitmap;
pub mod dial;
pub mod error;
pub mod graph;
pub mod heap;
pub mod kssp;
pub mod options;
pub mod path;
pub mod potential;
pub mod sssp;
pub mod st;
pub mod topo;
pub mod voronoi;
pub mod weight;

pub use error::Error;
pub use graph::{Direction, IndexedGraph};
pub use path::{NegativeCycle, Path};
pub use weight::WeightFn;
