//! Exhaustive, time-bounded search for the most valuable order in which to activate nodes.
//!
//! Nodes live in an index arena: `values[i]` is what node `i` yields per remaining time unit once
//! activated and `distances[i][j]` is the travel time between two nodes. Activating a node costs
//! the travel time plus one.
//!
//! States are immutable snapshots holding their full history and are explored breadth first.
//! Nothing is pruned, so the work grows exponentially with the number of valuable nodes; this is
//! only meant for puzzle-sized inputs of about fifteen of them.

use std::collections::{BTreeMap, VecDeque};

use rustc_hash::FxHashMap;

use crate::{graph::INFINITY, Error};

/// Activated sets are stored as bitmasks.
const MAX_NODES: usize = u64::BITS as usize;

#[derive(Debug, Clone)]
pub struct ActivationProblem {
    values: Vec<u64>,
    distances: Vec<Vec<u64>>,
    start: usize,
    budget: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    current: usize,
    /// Activated node -> time of its activation.
    activated: BTreeMap<usize, u64>,
    elapsed: u64,
}

/// The best leaf found by [`ActivationProblem::best_schedule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub value: u64,
    pub state: SearchState,
}

impl ActivationProblem {
    pub fn new(
        values: Vec<u64>,
        distances: Vec<Vec<u64>>,
        start: usize,
        budget: u64,
    ) -> Result<Self, Error> {
        let n = values.len();
        if n > MAX_NODES {
            return Err(Error::Unreachable(format!(
                "{n} valuable nodes exceed the supported {MAX_NODES}"
            )));
        }
        if start >= n || distances.len() != n || distances.iter().any(|row| row.len() != n) {
            return Err(Error::Unreachable(format!(
                "distance table does not cover {n} nodes starting at {start}"
            )));
        }
        Ok(Self {
            values,
            distances,
            start,
            budget,
        })
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    pub fn with_budget(self, budget: u64) -> Self {
        Self { budget, ..self }
    }

    pub fn value(&self, node: usize) -> u64 {
        self.values[node]
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    fn root(&self) -> SearchState {
        SearchState {
            current: self.start,
            activated: BTreeMap::new(),
            elapsed: 0,
        }
    }

    /// Every child of `state`: one per unactivated, valuable node that can still be activated
    /// before the budget runs out.
    fn expand<'a>(&'a self, state: &'a SearchState) -> impl Iterator<Item = SearchState> + 'a {
        (0..self.values.len()).filter_map(move |target| {
            if self.values[target] == 0 || state.activated.contains_key(&target) {
                return None;
            }
            let distance = self.distances[state.current][target];
            if distance == INFINITY {
                return None;
            }
            let time = state.elapsed + distance + 1;
            (time < self.budget).then(|| {
                let mut activated = state.activated.clone();
                activated.insert(target, time);
                SearchState {
                    current: target,
                    activated,
                    elapsed: time,
                }
            })
        })
    }

    /// Explores the whole tree and keeps the most valuable leaf. Ties keep the first leaf found.
    pub fn best_schedule(&self) -> Schedule {
        let mut best = Schedule {
            value: 0,
            state: self.root(),
        };
        let mut queue = VecDeque::from([self.root()]);
        while let Some(state) = queue.pop_front() {
            let before = queue.len();
            queue.extend(self.expand(&state));
            if queue.len() == before {
                let value = state.total_value(&self.values, self.budget);
                if value > best.value {
                    best = Schedule { value, state };
                }
            }
        }
        best
    }

    /// Best value reached by any explored state, keyed by its activated set (bit `i` is node
    /// `i`). The empty set is always present with value 0.
    pub fn best_by_activated_set(&self) -> FxHashMap<u64, u64> {
        let mut best = FxHashMap::default();
        let mut queue = VecDeque::from([self.root()]);
        while let Some(state) = queue.pop_front() {
            let value = state.total_value(&self.values, self.budget);
            let entry = best.entry(state.activated_set()).or_insert(0);
            *entry = value.max(*entry);
            queue.extend(self.expand(&state));
        }
        best
    }
}

impl SearchState {
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// `(node, time)` pairs in activation order.
    pub fn activations(&self) -> Vec<(usize, u64)> {
        let mut activations: Vec<_> = self.activated.iter().map(|(&n, &t)| (n, t)).collect();
        activations.sort_unstable_by_key(|&(node, time)| (time, node));
        activations
    }

    pub fn activated_set(&self) -> u64 {
        self.activated.keys().fold(0, |set, &node| set | 1 << node)
    }

    /// Value accumulated per time unit once every activation has happened.
    pub fn rate(&self, values: &[u64]) -> u64 {
        self.activated.keys().map(|&node| values[node]).sum()
    }

    pub fn total_value(&self, values: &[u64], budget: u64) -> u64 {
        self.activated
            .iter()
            .map(|(&node, &time)| values[node] * budget.saturating_sub(time))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_node(value: u64, distance: u64, budget: u64) -> ActivationProblem {
        ActivationProblem::new(
            vec![0, value],
            vec![vec![0, distance], vec![distance, 0]],
            0,
            budget,
        )
        .unwrap()
    }

    #[test]
    fn single_node_within_budget() {
        let schedule = single_node(13, 2, 30).best_schedule();
        assert_eq!(schedule.value, 13 * (30 - 2 - 1));
        assert_eq!(schedule.state.activations(), [(1, 3)]);
        assert_eq!(schedule.state.current(), 1);
        assert_eq!(schedule.state.elapsed(), 3);
    }

    #[test]
    fn single_node_out_of_reach() {
        assert_eq!(single_node(13, 2, 3).best_schedule().value, 0);
        assert_eq!(single_node(13, 5, 3).best_schedule().value, 0);
        assert_eq!(single_node(13, 1, 3).best_schedule().value, 13);
    }

    #[test]
    fn order_matters() {
        // 0 -- 1 -- 2, node 2 is worth far more than node 1.
        let problem = ActivationProblem::new(
            vec![0, 1, 100],
            vec![vec![0, 1, 2], vec![1, 0, 1], vec![2, 1, 0]],
            0,
            10,
        )
        .unwrap();
        let schedule = problem.best_schedule();
        // 2 at t=3 gives 700, then 1 at t=5 gives 5.
        assert_eq!(schedule.value, 705);
        assert_eq!(schedule.state.activations(), [(2, 3), (1, 5)]);
        assert_eq!(schedule.state.rate(problem.values()), 101);
    }

    #[test]
    fn unreachable_nodes_are_never_activated() {
        let problem = ActivationProblem::new(
            vec![0, 5, 7],
            vec![vec![0, 1, INFINITY], vec![1, 0, INFINITY], vec![INFINITY, INFINITY, 0]],
            0,
            30,
        )
        .unwrap();
        assert_eq!(problem.best_schedule().value, 5 * 28);
    }

    #[test]
    fn best_by_activated_set_covers_every_subset_explored() {
        let problem = ActivationProblem::new(
            vec![0, 1, 100],
            vec![vec![0, 1, 2], vec![1, 0, 1], vec![2, 1, 0]],
            0,
            10,
        )
        .unwrap();
        let best = problem.best_by_activated_set();
        assert_eq!(best[&0], 0);
        assert_eq!(best[&0b010], 8);
        assert_eq!(best[&0b100], 700);
        assert_eq!(best[&0b110], 705);
    }

    #[test]
    fn rejects_mismatched_tables() {
        assert!(ActivationProblem::new(vec![0, 1], vec![vec![0, 1]], 0, 30).is_err());
        assert!(ActivationProblem::new(vec![0], vec![vec![0]], 1, 30).is_err());
    }

    #[test]
    fn budget_can_be_changed() {
        let problem = single_node(13, 2, 30).with_budget(26);
        assert_eq!(problem.budget(), 26);
        assert_eq!(problem.value(1), 13);
        assert_eq!(problem.best_schedule().value, 13 * 23);
    }
}
