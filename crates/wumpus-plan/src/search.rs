use core::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use tracing::debug;
use wumpus_belief::Knowledge;
use wumpus_core::{Action, Pose};

use crate::{Goal, RiskPolicy};

/// A sequence of actions leading from the start pose to a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub steps: Vec<Action>,
    /// Pose reached once every step has been executed.
    pub end: Pose,
    pub expansions: usize,
}

#[derive(Debug, Clone, Copy)]
struct Node {
    pose: Pose,
    parent: Option<usize>,
    action: Option<Action>,
    g: u32,
}

#[derive(Debug, PartialEq, Eq)]
struct OpenNode {
    f: u32,
    tie: u64,
    node: usize,
}

impl OpenNode {
    fn key(&self) -> (u32, u64) {
        (self.f, self.tie)
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* planner bound to one knowledge snapshot.
#[derive(Debug)]
pub struct Planner<'k> {
    knowledge: &'k Knowledge,
    goal: Goal,
    risk: RiskPolicy,
}

impl<'k> Planner<'k> {
    pub fn new(knowledge: &'k Knowledge, gold_grabbed: bool) -> Self {
        Self {
            knowledge,
            goal: Goal::for_phase(knowledge, gold_grabbed),
            risk: RiskPolicy::from_knowledge(knowledge),
        }
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// Up to three successors, in the fixed order forward, left, right.
    /// Turns are always allowed; a forward move only into a cell the risk policy admits.
    pub fn successors(&self, pose: Pose) -> Vec<(Action, Pose)> {
        Action::MOVES
            .into_iter()
            .map(|action| (action, pose.apply(action)))
            .filter(|(action, next)| {
                *action != Action::Forward || self.risk.admits(self.knowledge, next.at)
            })
            .collect()
    }

    /// Searches from `start`. `None` means no goal is reachable with current knowledge.
    ///
    /// Poses are closed as soon as they are first generated, so a cheaper route to an
    /// already-seen pose is never considered.
    pub fn search(&self, start: Pose) -> Option<Plan> {
        let h0 = self.goal.heuristic(start)?;

        let mut arena = vec![Node {
            pose: start,
            parent: None,
            action: None,
            g: 0,
        }];
        let mut closed: HashSet<Pose> = HashSet::from([start]);
        let mut open = BinaryHeap::<OpenNode>::new();
        let mut tie: u64 = 0;

        open.push(OpenNode {
            f: h0,
            tie,
            node: 0,
        });
        tie += 1;

        let mut expansions: usize = 0;

        while let Some(entry) = open.pop() {
            expansions += 1;
            let node = arena[entry.node];

            if self.goal.is_reached(node.pose) {
                let plan = Plan {
                    steps: reconstruct(&arena, entry.node),
                    end: node.pose,
                    expansions,
                };
                debug!(
                    steps = plan.steps.len(),
                    expansions,
                    x = node.pose.at.x,
                    y = node.pose.at.y,
                    "plan found"
                );
                return Some(plan);
            }

            for (action, next) in self.successors(node.pose) {
                if !closed.insert(next) {
                    continue;
                }
                let Some(h) = self.goal.heuristic(next) else {
                    continue;
                };
                let g = node.g.saturating_add(1);
                arena.push(Node {
                    pose: next,
                    parent: Some(entry.node),
                    action: Some(action),
                    g,
                });
                open.push(OpenNode {
                    f: g.saturating_add(h),
                    tie,
                    node: arena.len() - 1,
                });
                tie += 1;
            }
        }

        debug!(expansions, "no reachable goal");
        None
    }
}

fn reconstruct(arena: &[Node], mut current: usize) -> Vec<Action> {
    let mut out = Vec::new();
    while let Some(parent) = arena[current].parent {
        if let Some(action) = arena[current].action {
            out.push(action);
        }
        current = parent;
    }
    out.reverse();
    out
}
