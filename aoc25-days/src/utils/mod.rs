//! Shared building blocks for the daily solutions

pub mod disjoint_set;
pub mod dp_cache;
pub mod lines;
