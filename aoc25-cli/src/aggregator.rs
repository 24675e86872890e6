//! Puts results back into (day, part) order.
//!
//! Parallel workers finish in any order. Expected keys sit in a min-heap and
//! early arrivals wait in a keyed buffer until everything before them is out.

use crate::executor::{SolverResult, WorkItem};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub day: u8,
    pub part: u8,
}

impl ResultKey {
    /// One key per part of every work item
    pub fn expected(work_items: &[WorkItem]) -> Vec<ResultKey> {
        work_items
            .iter()
            .flat_map(|w| w.parts.clone().map(move |part| ResultKey { day: w.day, part }))
            .collect()
    }
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            day: r.day,
            part: r.part,
        }
    }
}

pub struct ResultAggregator {
    awaited: BinaryHeap<Reverse<ResultKey>>,
    early: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            awaited: expected_keys.into_iter().map(Reverse).collect(),
            early: BTreeMap::new(),
        }
    }

    /// Buffer `result`, returning every result that is now next in line
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.early.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(&Reverse(next)) = self.awaited.peek() {
            let Some(result) = self.early.remove(&next) else {
                break;
            };
            self.awaited.pop();
            ready.push(result);
        }
        ready
    }

    /// Whatever is still buffered, in key order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        std::mem::take(&mut self.early).into_values().collect()
    }

    /// Whether every expected result has been handed out by `add`
    pub fn is_complete(&self) -> bool {
        self.awaited.is_empty()
    }
}
