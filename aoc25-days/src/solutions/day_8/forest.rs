//! Wiring junction boxes into circuits, shortest connection first

use thiserror::Error;
use tracing::debug;

use super::connections::{Connection, Point, connections};
use crate::utils::disjoint_set::{DisjointSet, DisjointSetError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForestError {
    /// Fewer than two distinct boxes: no connection can be the one that unifies them
    #[error("fewer than two distinct junction boxes, nothing to connect")]
    AlreadyUnified,
    #[error("ran out of connections with {remaining} circuits still separate")]
    NotConnectable { remaining: usize },
    #[error(transparent)]
    Partition(#[from] DisjointSetError),
}

/// Circuits formed after attempting the `budget` shortest connections.
///
/// Every attempt counts against the budget, including ones whose boxes were
/// already on the same circuit. Circuits come back in input order of their
/// first box.
pub fn circuits_after(points: &[Point], budget: usize) -> Result<Vec<Vec<Point>>, ForestError> {
    let mut circuits = DisjointSet::new(points.iter().copied());
    let mut joined = 0usize;

    for connection in connections(points).iter().take(budget) {
        if circuits.union(&connection.a, &connection.b)? {
            joined += 1;
        }
    }
    debug!(budget, joined, circuits = circuits.component_count(), "connections applied");

    Ok(circuits.components())
}

/// The connection that first puts every junction box on a single circuit.
pub fn last_unifying_connection(points: &[Point]) -> Result<Connection, ForestError> {
    let mut circuits = DisjointSet::new(points.iter().copied());
    let mut remaining = circuits.len();
    if remaining < 2 {
        return Err(ForestError::AlreadyUnified);
    }

    for (attempt, connection) in connections(points).into_iter().enumerate() {
        if circuits.union(&connection.a, &connection.b)? {
            remaining -= 1;
            if remaining == 1 {
                debug!(attempt, distance = connection.distance, "all boxes on one circuit");
                return Ok(connection);
            }
        }
    }

    Err(ForestError::NotConnectable { remaining })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::solutions::day_8::tests::sample_points;

    #[test]
    fn test_sample_circuits_after_ten() {
        let circuits = circuits_after(&sample_points(), 10).unwrap();

        let mut sizes: Vec<usize> = circuits.iter().map(Vec::len).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(sizes, vec![5, 4, 2, 2, 1, 1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_zero_budget_leaves_singletons() {
        let points = sample_points();
        let circuits = circuits_after(&points, 0).unwrap();
        assert_eq!(circuits.len(), points.len());
        assert!(circuits.iter().zip(&points).all(|(c, p)| c == &vec![*p]));
    }

    #[test]
    fn test_budget_beyond_connection_count() {
        let circuits = circuits_after(&sample_points(), 10_000).unwrap();
        assert_eq!(circuits.len(), 1);
        assert_eq!(circuits[0].len(), 20);
    }

    #[test]
    fn test_circuits_of_empty_input() {
        assert!(circuits_after(&[], 1000).unwrap().is_empty());
    }

    #[test]
    fn test_sample_unifying_connection() {
        let connection = last_unifying_connection(&sample_points()).unwrap();
        assert_eq!(connection.a, Point::new(216, 146, 977));
        assert_eq!(connection.b, Point::new(117, 168, 530));
    }

    #[test]
    fn test_two_points_unify_on_their_only_connection() {
        let (a, b) = (Point::new(0, 0, 0), Point::new(3, 4, 0));
        let connection = last_unifying_connection(&[a, b]).unwrap();
        assert_eq!((connection.a, connection.b, connection.distance), (a, b, 5.0));
    }

    #[test]
    fn test_fewer_than_two_distinct_points() {
        let p = Point::new(1, 1, 1);
        assert_eq!(last_unifying_connection(&[]), Err(ForestError::AlreadyUnified));
        assert_eq!(last_unifying_connection(&[p]), Err(ForestError::AlreadyUnified));
        assert_eq!(last_unifying_connection(&[p, p]), Err(ForestError::AlreadyUnified));
    }

    #[test]
    fn test_duplicates_do_not_count_as_separate_circuits() {
        let (a, b) = (Point::new(0, 0, 0), Point::new(0, 0, 9));
        let connection = last_unifying_connection(&[a, a, b, a]).unwrap();
        assert_eq!(connection.distance, 9.0);
    }

    #[test]
    fn test_three_points_need_two_joins() {
        let (p, q, r) = (Point::new(0, 0, 0), Point::new(1, 1, 1), Point::new(10, 10, 10));
        let points = [p, q, r];

        let first = connections(&points)[0];
        assert_eq!((first.a, first.b), (p, q));

        assert_eq!(circuits_after(&points, 0).unwrap(), vec![vec![p], vec![q], vec![r]]);
        assert_eq!(circuits_after(&points, 1).unwrap(), vec![vec![p, q], vec![r]]);
        assert_eq!(circuits_after(&points, 2).unwrap(), vec![vec![p, q, r]]);
        assert_eq!(circuits_after(&points, 3).unwrap(), vec![vec![p, q, r]]);

        let last = last_unifying_connection(&points).unwrap();
        assert_eq!((last.a, last.b), (q, r));
    }

    fn point_sets() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec((0i64..6, 0i64..6, 0i64..6), 0..12)
            .prop_map(|coords| coords.into_iter().map(|(x, y, z)| Point::new(x, y, z)).collect())
    }

    fn distinct(points: &[Point]) -> usize {
        points.iter().collect::<HashSet<_>>().len()
    }

    proptest! {
        #[test]
        fn prop_unifying_takes_one_join_per_extra_box(points in point_sets()) {
            let distinct = distinct(&points);
            let result = last_unifying_connection(&points);
            if distinct < 2 {
                prop_assert_eq!(result, Err(ForestError::AlreadyUnified));
                return Ok(());
            }
            let unifying = result.unwrap();

            let mut set = DisjointSet::new(points.iter().copied());
            let mut joins = 0;
            let mut attempts = 0;
            for connection in connections(&points) {
                attempts += 1;
                if set.union(&connection.a, &connection.b).unwrap() {
                    joins += 1;
                    if set.component_count() == 1 {
                        prop_assert_eq!(connection, unifying);
                        break;
                    }
                }
            }

            prop_assert_eq!(joins, distinct - 1);
            prop_assert_eq!(set.component_count(), 1);
            prop_assert_eq!(circuits_after(&points, attempts).unwrap().len(), 1);
            prop_assert_eq!(circuits_after(&points, attempts - 1).unwrap().len(), 2);
        }

        #[test]
        fn prop_budget_bounds_circuit_count(points in point_sets()) {
            let distinct = distinct(&points);
            let pairs = connections(&points).len();
            let mut previous = distinct;

            for budget in 0..=pairs + 1 {
                let circuits = circuits_after(&points, budget).unwrap();
                prop_assert!(circuits.len() >= distinct.saturating_sub(budget));
                prop_assert!(circuits.len() <= previous);
                prop_assert_eq!(circuits.iter().map(Vec::len).sum::<usize>(), distinct);
                previous = circuits.len();
            }
            prop_assert_eq!(previous, distinct.min(1));
        }
    }
}
