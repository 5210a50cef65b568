//! K-shortest simple paths (spec §4.6): the most involved component,
//! built around a [`tree::CompressedPathsTree`] that amortizes Yen's
//! algorithm's repeated spur-path recomputation by sharing prefixes
//! between discovered paths instead of storing each path separately.
mod engine;
mod replacement;
mod tree;

pub use engine::k_shortest_simple_paths;
