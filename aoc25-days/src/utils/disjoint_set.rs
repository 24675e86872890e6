//! Disjoint-set forest (union-find) over arbitrary hashable keys.
//!
//! Keys are registered up front and mapped to dense slots; the forest itself
//! is two flat vectors (`parent`, `rank`). `find` compresses paths and
//! `union` joins by rank, so a sequence of operations runs in near-constant
//! amortized time per operation.
//!
//! ```
//! use aoc25_days::utils::disjoint_set::DisjointSet;
//!
//! let mut set = DisjointSet::new(["a", "b", "c", "d"]);
//! assert!(set.union(&"a", &"b").unwrap());
//! assert!(set.union(&"c", &"b").unwrap());
//! assert!(!set.union(&"a", &"c").unwrap());
//!
//! assert_eq!(set.component_count(), 2);
//! assert_eq!(set.components(), vec![vec!["a", "b", "c"], vec!["d"]]);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DisjointSetError {
    /// The key was never registered with the set
    #[error("key is not registered in the disjoint set")]
    Unregistered,
}

#[derive(Debug, Clone)]
pub struct DisjointSet<K> {
    index: HashMap<K, usize>,
    keys: Vec<K>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    count: usize,
}

impl<K> DisjointSet<K>
where
    K: Eq + Hash + Clone,
{
    /// Register every key as its own singleton component.
    ///
    /// Repeated keys collapse into one node.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        let mut set = Self {
            index: HashMap::new(),
            keys: Vec::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            count: 0,
        };
        for key in keys {
            set.insert(key);
        }
        set
    }

    /// Register `key` as a singleton; `false` if it was already present
    pub fn insert(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        let slot = self.keys.len();
        self.index.insert(key.clone(), slot);
        self.keys.push(key);
        self.parent.push(slot);
        self.rank.push(0);
        self.count += 1;
        true
    }

    /// Number of registered keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of disjoint components
    pub fn component_count(&self) -> usize {
        self.count
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn slot(&self, key: &K) -> Result<usize, DisjointSetError> {
        self.index
            .get(key)
            .copied()
            .ok_or(DisjointSetError::Unregistered)
    }

    fn root(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = slot;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Representative key of the component containing `key`.
    ///
    /// Two keys are connected exactly when their representatives are equal.
    pub fn find(&mut self, key: &K) -> Result<&K, DisjointSetError> {
        let slot = self.slot(key)?;
        let root = self.root(slot);
        Ok(&self.keys[root])
    }

    pub fn connected(&mut self, a: &K, b: &K) -> Result<bool, DisjointSetError> {
        let (a, b) = (self.slot(a)?, self.slot(b)?);
        Ok(self.root(a) == self.root(b))
    }

    /// Merge the components of `a` and `b`.
    ///
    /// Returns `false` without touching the forest if they were already
    /// joined. On equal rank the root of `b` goes under the root of `a`.
    pub fn union(&mut self, a: &K, b: &K) -> Result<bool, DisjointSetError> {
        let (a, b) = (self.slot(a)?, self.slot(b)?);
        let (root_a, root_b) = (self.root(a), self.root(b));
        if root_a == root_b {
            return Ok(false);
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        self.count -= 1;
        Ok(true)
    }

    /// Every key grouped by component.
    ///
    /// Buckets appear in order of their earliest registered member, and keys
    /// within a bucket keep registration order.
    pub fn components(&mut self) -> Vec<Vec<K>> {
        let mut bucket_of_root: Vec<Option<usize>> = vec![None; self.keys.len()];
        let mut buckets: Vec<Vec<K>> = Vec::with_capacity(self.count);

        for slot in 0..self.keys.len() {
            let root = self.root(slot);
            let bucket = *bucket_of_root[root].get_or_insert_with(|| {
                buckets.push(Vec::new());
                buckets.len() - 1
            });
            buckets[bucket].push(self.keys[slot].clone());
        }
        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_singletons() {
        let mut set = DisjointSet::new([1, 2, 3]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.component_count(), 3);
        assert_eq!(set.find(&2), Ok(&2));
        assert_eq!(set.components(), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_duplicate_keys_collapse() {
        let set = DisjointSet::new(["x", "y", "x"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.component_count(), 2);
    }

    #[test]
    fn test_unregistered_key() {
        let mut set = DisjointSet::new([1, 2]);
        assert_eq!(set.find(&7), Err(DisjointSetError::Unregistered));
        assert_eq!(set.union(&1, &7), Err(DisjointSetError::Unregistered));
        assert_eq!(set.component_count(), 2);
    }

    #[test]
    fn test_union_of_joined_keys_is_noop() {
        let mut set = DisjointSet::new([1, 2, 3]);
        assert_eq!(set.union(&1, &2), Ok(true));
        assert_eq!(set.union(&2, &1), Ok(false));
        assert_eq!(set.union(&1, &1), Ok(false));
        assert_eq!(set.component_count(), 2);
    }

    #[test]
    fn test_equal_rank_keeps_first_root() {
        let mut set = DisjointSet::new(['a', 'b', 'c', 'd']);
        set.union(&'a', &'b').unwrap();
        set.union(&'c', &'d').unwrap();
        assert_eq!(set.find(&'b'), Ok(&'a'));
        assert_eq!(set.find(&'d'), Ok(&'c'));

        set.union(&'c', &'a').unwrap();
        assert_eq!(set.find(&'b'), Ok(&'c'));
    }

    #[test]
    fn test_components_follow_registration_order() {
        let mut set = DisjointSet::new([5, 4, 3, 2, 1]);
        set.union(&1, &4).unwrap();
        set.union(&2, &3).unwrap();
        assert_eq!(set.components(), vec![vec![5], vec![4, 1], vec![3, 2]]);
    }

    #[test]
    fn test_long_chain_is_compressed() {
        let mut set = DisjointSet::new(0..1000);
        for i in 1..1000 {
            set.union(&i, &(i - 1)).unwrap();
        }
        let root = *set.find(&999).unwrap();
        assert!((0..1000).all(|i| set.find(&i) == Ok(&root)));
        assert_eq!(set.component_count(), 1);
    }

    /// Labels-per-key reference model: union relabels one whole class
    fn naive_components(keys: usize, unions: &[(usize, usize)]) -> Vec<usize> {
        let mut label: Vec<usize> = (0..keys).collect();
        for &(a, b) in unions {
            let (from, to) = (label[b], label[a]);
            if from != to {
                label.iter_mut().filter(|l| **l == from).for_each(|l| *l = to);
            }
        }
        label
    }

    fn keys_and_unions() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (1usize..40).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..80)))
    }

    proptest! {
        #[test]
        fn prop_connectivity_matches_reference((n, unions) in keys_and_unions()) {
            let mut set = DisjointSet::new(0..n);
            for (a, b) in &unions {
                set.union(a, b).unwrap();
            }
            let labels = naive_components(n, &unions);

            for a in 0..n {
                for b in 0..n {
                    prop_assert_eq!(set.connected(&a, &b).unwrap(), labels[a] == labels[b]);
                }
            }
        }

        #[test]
        fn prop_component_count_tracks_successful_unions((n, unions) in keys_and_unions()) {
            let mut set = DisjointSet::new(0..n);
            let mut successes = 0;
            for (a, b) in &unions {
                if set.union(a, b).unwrap() {
                    successes += 1;
                }
            }

            prop_assert_eq!(set.component_count(), n - successes);
            prop_assert_eq!(set.components().len(), n - successes);
        }

        #[test]
        fn prop_components_partition_keys((n, unions) in keys_and_unions()) {
            let mut set = DisjointSet::new(0..n);
            for (a, b) in &unions {
                set.union(a, b).unwrap();
            }

            let components = set.components();
            let mut seen: Vec<usize> = components.iter().flatten().copied().collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..n).collect::<Vec<_>>());

            let firsts: Vec<usize> = components.iter().map(|c| c[0]).collect();
            prop_assert!(firsts.windows(2).all(|w| w[0] < w[1]));
            for component in &components {
                prop_assert!(component.windows(2).all(|w| w[0] < w[1]));
                let root = *set.find(&component[0]).unwrap();
                for key in component {
                    prop_assert_eq!(*set.find(key).unwrap(), root);
                }
            }
        }

        #[test]
        fn prop_find_is_idempotent((n, unions) in keys_and_unions(), pick in 0usize..40) {
            let mut set = DisjointSet::new(0..n);
            for (a, b) in &unions {
                set.union(a, b).unwrap();
            }
            let before = set.components();
            let count = set.component_count();

            let key = pick % n;
            let first = *set.find(&key).unwrap();
            let root_of_root = *set.find(&first).unwrap();
            prop_assert_eq!(first, root_of_root);
            prop_assert_eq!(*set.find(&key).unwrap(), first);
            for other in 0..n {
                set.find(&other).unwrap();
            }

            prop_assert_eq!(set.components(), before);
            prop_assert_eq!(set.component_count(), count);
            prop_assert_eq!(*set.find(&key).unwrap(), first);
        }
    }
}
