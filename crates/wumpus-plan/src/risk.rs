use std::collections::BTreeSet;

use wumpus_belief::Knowledge;
use wumpus_core::{CellStatus, Point};

/// Which cells a hypothetical forward move may enter.
///
/// Preference is total: safe cells always; the least-witnessed pit candidates once the
/// frontier is exhausted; wumpus suspects only when no pit candidate is left either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskPolicy {
    frontier_exhausted: bool,
    pit_candidates_left: bool,
    least_witnessed: BTreeSet<Point>,
}

impl RiskPolicy {
    pub fn from_knowledge(knowledge: &Knowledge) -> Self {
        Self {
            frontier_exhausted: knowledge.undiscovered().is_empty(),
            pit_candidates_left: !knowledge.pit_witnesses().is_empty(),
            least_witnessed: knowledge.least_witnessed().into_iter().collect(),
        }
    }

    pub fn admits(&self, knowledge: &Knowledge, dest: Point) -> bool {
        let status = knowledge.cell(dest);
        if status.is_safe() {
            return true;
        }
        if !self.frontier_exhausted {
            return false;
        }
        if status == CellStatus::PitCandidate && self.least_witnessed.contains(&dest) {
            return true;
        }
        !self.pit_candidates_left && status.is_wumpus_candidate()
    }
}
