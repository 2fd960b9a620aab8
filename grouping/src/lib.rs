//! Incremental grouping of a fixed item universe.
//!
//! A [`Grouping`] starts with every item in its own singleton group and merges
//! groups as edges between items are processed, usually in ascending weight
//! order (a Kruskal-style sweep). Junction box clustering and range coalescing
//! are both expressed on top of it.
//!
//! ```
//! use aoc_grouping::{Edge, Grouping};
//!
//! let mut grouping = Grouping::new(["a", "b", "c"]);
//! let edges = [Edge::new("a", "b", 1)];
//! grouping.process_edges_in_order(&edges)?;
//!
//! assert_eq!(grouping.group_sizes(), vec![2, 1]);
//! # Ok::<(), aoc_grouping::GroupingError>(())
//! ```

mod edge;
mod error;
mod forest;
pub mod ranges;

pub use edge::{sort_edges, Connection, Edge, SweepOptions, SweepStats};
pub use error::GroupingError;
pub use forest::{Group, GroupId, Grouping, Merge};
