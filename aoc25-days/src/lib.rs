//! Advent of Code 2025 puzzle solutions with automatic registration
//!
//! Every day lives in [`solutions`] and registers itself with the solver
//! framework through `#[derive(AutoRegister)]`. Linking this crate is enough
//! for `DayRegistryBuilder::register_all_plugins` to see them.
//!
//! [`utils`] holds the two pieces of shared machinery: a disjoint-set forest
//! and a memoizing DP cache.

pub mod solutions;
pub mod utils;
