//! Memoizing cache for dynamic programming over a dependency graph.
//!
//! A [`DpProblem`] says which indices an index depends on and how to combine
//! their values; a [`Backend`] stores finished values; [`DpCache`] resolves
//! dependencies on demand and computes each index once.
//!
//! # Backends
//!
//! - [`VecBackend`]: dense `usize` indices, grows as needed
//! - [`HashMapBackend`]: any `Hash + Eq` index
//!
//! Dependencies are expected to form a DAG. A cycle is reported as
//! [`DpError::Cycle`] when evaluation reaches it.
//!
//! # Example
//!
//! ```rust
//! use aoc25_days::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
//!         match *pos {
//!             (0, 0) => vec![],
//!             (0, c) => vec![(0, c - 1)],
//!             (r, 0) => vec![(r - 1, 0)],
//!             (r, c) => vec![(r - 1, c), (r, c - 1)],
//!         }
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::builder()
//!     .backend(HashMapBackend::new())
//!     .problem(GridPaths)
//!     .build();
//! assert_eq!(cache.get(&(4, 4)).unwrap(), 70);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{DpCache, DpCacheBuilder, DpError};
pub use problem::DpProblem;
