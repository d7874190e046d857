use anyhow::Result;
use indexmap::{map::Entry, IndexMap};
use petgraph::graph::{DiGraph, NodeIndex};
use regex::Regex;
use tracing::{debug, info};

use crate::{
    graph::shortest_paths,
    parse_number,
    search::{ActivationProblem, Schedule},
    Error,
};

const START: &str = "AA";
const TIME_LIMIT: u64 = 30;
/// Time left for each agent after teaching the elephant.
const SHARED_TIME_LIMIT: u64 = 26;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valve {
    pub label: String,
    pub flow_rate: u64,
}

/// Valves and the tunnels between them. Node indices follow input order.
#[derive(Debug)]
pub struct Network {
    tunnels: DiGraph<Valve, ()>,
    labels: IndexMap<String, NodeIndex>,
}

impl Network {
    pub fn parse(input: &str) -> Result<Self> {
        let re = Regex::new(
            r"^Valve ([A-Za-z]+) has flow rate=([0-9]+); tunnels? leads? to valves? ([A-Za-z]+(?:, [A-Za-z]+)*)$",
        )?;

        let mut tunnels = DiGraph::new();
        let mut labels = IndexMap::new();
        let mut connections = Vec::new();
        for line in input.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
            let caps = re
                .captures(line)
                .ok_or_else(|| Error::malformed_line(line, "a valve report"))?;
            let label = caps[1].to_owned();
            let flow_rate = parse_number(&caps[2])?;
            match labels.entry(label.clone()) {
                Entry::Occupied(_) => {
                    return Err(Error::malformed_line(line, "a valve reported only once").into())
                }
                Entry::Vacant(entry) => {
                    let index = tunnels.add_node(Valve { label, flow_rate });
                    entry.insert(index);
                    let targets: Vec<String> = caps[3].split(", ").map(str::to_owned).collect();
                    connections.push((index, targets, line));
                }
            }
        }

        for (from, targets, line) in connections {
            for target in targets {
                let &to = labels
                    .get(&target)
                    .ok_or_else(|| Error::malformed_line(line, "tunnels to known valves"))?;
                tunnels.add_edge(from, to, ());
            }
        }

        Ok(Self { tunnels, labels })
    }

    pub fn valve(&self, label: &str) -> Option<&Valve> {
        self.labels.get(label).map(|&index| &self.tunnels[index])
    }

    pub fn len(&self) -> usize {
        self.tunnels.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.tunnels.node_count() == 0
    }

    /// Builds the search over `start` and the valves with positive flow, using the tunnel
    /// distances between each pair. `start` always gets index 0.
    pub fn activation_problem(
        &self,
        start: &str,
        budget: u64,
    ) -> Result<(ActivationProblem, Vec<NodeIndex>)> {
        let &start = self
            .labels
            .get(start)
            .ok_or_else(|| Error::Unreachable(format!("no valve labelled {start}")))?;
        let relevant: Vec<NodeIndex> = std::iter::once(start)
            .chain(
                self.tunnels
                    .node_indices()
                    .filter(|&index| index != start && self.tunnels[index].flow_rate > 0),
            )
            .collect();

        let tunnels = &self.tunnels;
        let mut distances = Vec::with_capacity(relevant.len());
        for &from in &relevant {
            let map = shortest_paths(tunnels.node_indices(), from, |node| tunnels.neighbors(node));
            let row = relevant
                .iter()
                .map(|&to| {
                    map.get(to).ok_or_else(|| {
                        Error::Unreachable(format!(
                            "Processing valve {} which has infinite distance from {}",
                            tunnels[to].label, tunnels[from].label
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            distances.push(row);
        }

        let values = relevant.iter().map(|&index| tunnels[index].flow_rate).collect();
        let problem = ActivationProblem::new(values, distances, 0, budget)?;
        Ok((problem, relevant))
    }

    fn log_schedule(&self, schedule: &Schedule, relevant: &[NodeIndex], problem: &ActivationProblem) {
        let state = &schedule.state;
        debug!(elapsed = state.elapsed(), "final state");
        for (node, minute) in state.activations() {
            debug!(valve = %self.tunnels[relevant[node]].label, minute, "opened");
        }
        info!(
            rate = state.rate(problem.values()),
            total = schedule.value,
            "releasing pressure per minute"
        );
    }
}

/// Most pressure released alone in [`TIME_LIMIT`] minutes.
pub fn release_alone(network: &Network) -> Result<u64> {
    let (problem, relevant) = network.activation_problem(START, TIME_LIMIT)?;
    let schedule = problem.best_schedule();
    network.log_schedule(&schedule, &relevant, &problem);
    Ok(schedule.value)
}

/// Most pressure released by two agents opening disjoint sets of valves in
/// [`SHARED_TIME_LIMIT`] minutes each.
pub fn release_together(network: &Network) -> Result<u64> {
    let (problem, _) = network.activation_problem(START, SHARED_TIME_LIMIT)?;
    let best: Vec<(u64, u64)> = problem.best_by_activated_set().into_iter().collect();
    debug!(sets = best.len(), "activated sets explored");

    let mut total = 0u64;
    for (i, &(mine, my_value)) in best.iter().enumerate() {
        for &(theirs, their_value) in &best[i..] {
            if mine & theirs == 0 {
                total = total.max(my_value + their_value);
            }
        }
    }
    Ok(total)
}

pub fn day16(input: &str) -> Result<(u64, u64)> {
    let network = Network::parse(input)?;
    Ok((release_alone(&network)?, release_together(&network)?))
}
