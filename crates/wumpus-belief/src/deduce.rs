use tracing::debug;
use wumpus_core::{CellStatus, Point};

use crate::Knowledge;

impl Knowledge {
    /// Records that the breeze felt at `from` could be explained by a pit at `candidate`,
    /// then checks whether it is now the only explanation.
    pub(crate) fn witness_pit(&mut self, candidate: Point, from: Point) {
        if self.pits.contains(&candidate) {
            return;
        }
        self.pit_witnesses
            .entry(candidate)
            .or_default()
            .insert(from);
        if self.pit_is_certain(candidate) {
            self.confirm_pit(candidate);
        }
    }

    /// A candidate is certainly a pit when some breeze cell next to it has no other
    /// neighbor left that could host a hazard.
    pub(crate) fn pit_is_certain(&self, candidate: Point) -> bool {
        let Some(witnesses) = self.pit_witnesses.get(&candidate) else {
            return false;
        };
        witnesses.iter().any(|w| {
            self.grid.get(*w).is_visited()
                && self
                    .grid
                    .open_neighbors(*w)
                    .into_iter()
                    .filter(|n| *n != candidate)
                    .all(|n| !self.grid.get(n).may_be_hazard())
        })
    }

    fn confirm_pit(&mut self, p: Point) {
        debug!(x = p.x, y = p.y, "pit confirmed");
        self.pits.insert(p);
        self.grid.set(p, CellStatus::Pit);
        self.pit_witnesses.remove(&p);
        self.undiscovered.remove(&p);
        self.wumpus_candidates.remove(&p);
    }

    /// Re-examines every pit candidate until no further pit can be confirmed.
    pub(crate) fn propagate_pits(&mut self) {
        loop {
            let certain: Vec<Point> = self
                .pit_witnesses
                .keys()
                .copied()
                .filter(|c| self.pit_is_certain(*c))
                .collect();
            if certain.is_empty() {
                return;
            }
            for c in certain {
                self.confirm_pit(c);
            }
        }
    }

    /// Drops a wumpus suspect. A dual suspect stays a pit suspect, anything else is safe.
    pub(crate) fn remove_wumpus_candidate(&mut self, p: Point) {
        self.wumpus_candidates.remove(&p);
        if self.grid.get(p) == CellStatus::BothCandidate {
            self.grid.set(p, CellStatus::PitCandidate);
        } else {
            self.mark_safe(p);
        }
    }

    /// A stench at `at` means the wumpus is next to it: suspects elsewhere are cleared.
    pub(crate) fn narrow_wumpus(&mut self, at: Point) {
        if self.wumpus_resolved() {
            return;
        }
        let around = self.grid.open_neighbors(at);
        let cleared: Vec<Point> = self
            .wumpus_candidates
            .iter()
            .copied()
            .filter(|c| !around.contains(c))
            .collect();
        for c in cleared {
            self.remove_wumpus_candidate(c);
        }
        self.resolve_wumpus();
    }

    /// Locates the wumpus once a single suspect remains.
    pub(crate) fn resolve_wumpus(&mut self) {
        if self.wumpus_resolved() || self.wumpus_candidates.len() != 1 {
            return;
        }
        let Some(w) = self.wumpus_candidates.first().copied() else {
            return;
        };
        debug!(x = w.x, y = w.y, "wumpus located");
        self.wumpus = Some(w);
        self.grid.set(w, CellStatus::Wumpus);
        self.pit_witnesses.remove(&w);
    }
}
