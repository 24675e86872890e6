//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use thiserror::Error;

use super::backend::Backend;
use super::problem::DpProblem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DpError {
    /// An index was reached again while its own value was still being resolved
    #[error("dependency cycle detected at depth {depth}")]
    Cycle { depth: usize },
}

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// Each index is computed at most once; later lookups clone the stored value.
/// Dependencies are resolved depth-first, and an index that depends on
/// itself (directly or through others) fails with [`DpError::Cycle`]
/// instead of recursing forever.
///
/// ```rust
/// use aoc25_days::utils::dp_cache::{DpCache, DpError, DpProblem, HashMapBackend};
///
/// struct Ring;
///
/// impl DpProblem<u8, u32> for Ring {
///     fn deps(&self, n: &u8) -> Vec<u8> {
///         vec![(n + 1) % 3]
///     }
///     fn compute(&self, _: &u8, deps: Vec<u32>) -> u32 {
///         deps[0] + 1
///     }
/// }
///
/// let cache = DpCache::with_problem(HashMapBackend::new(), Ring);
/// assert!(matches!(cache.get(&0), Err(DpError::Cycle { .. })));
/// ```
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    in_progress: RefCell<HashSet<I>>,
    problem: P,
    _phantom: PhantomData<K>,
}

impl DpCache<(), (), (), ()> {
    /// Start building a cache: `.backend(..)`, then `.problem(..)`, then `.build()`.
    pub fn builder() -> DpCacheBuilder<(), ()> {
        DpCacheBuilder {
            backend: (),
            problem: (),
        }
    }
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone + Hash + Eq,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            in_progress: RefCell::new(HashSet::new()),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Value for `index`, computing it and any missing dependencies first.
    pub fn get(&self, index: &I) -> Result<K, DpError> {
        if let Some(value) = self.backend.borrow().get(index) {
            return Ok(value.clone());
        }

        if !self.in_progress.borrow_mut().insert(index.clone()) {
            return Err(DpError::Cycle {
                depth: self.in_progress.borrow().len(),
            });
        }

        // No borrow is held across the recursion
        let dep_values = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect::<Result<Vec<K>, DpError>>();
        self.in_progress.borrow_mut().remove(index);

        let value = self.problem.compute(index, dep_values?);
        Ok(self
            .backend
            .borrow_mut()
            .get_or_insert(index.clone(), value)
            .clone())
    }

    /// Whether `index` already has a stored value
    pub fn is_cached(&self, index: &I) -> bool {
        self.backend.borrow().get(index).is_some()
    }
}

/// Typestate builder returned by [`DpCache::builder`]
pub struct DpCacheBuilder<B, P> {
    backend: B,
    problem: P,
}

impl<B, P> DpCacheBuilder<B, P> {
    pub fn backend<B2>(self, backend: B2) -> DpCacheBuilder<B2, P> {
        DpCacheBuilder {
            backend,
            problem: self.problem,
        }
    }

    pub fn problem<P2>(self, problem: P2) -> DpCacheBuilder<B, P2> {
        DpCacheBuilder {
            backend: self.backend,
            problem,
        }
    }

    pub fn build<I, K>(self) -> DpCache<I, K, B, P>
    where
        I: Clone + Hash + Eq,
        K: Clone,
        B: Backend<I, K>,
        P: DpProblem<I, K>,
    {
        DpCache::with_problem(self.backend, self.problem)
    }
}
