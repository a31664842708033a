use tracing::debug;
use wumpus_core::{CellStatus, Percept, Point};

use crate::Knowledge;

impl Knowledge {
    /// Applies the percept rules in precedence order. Neighbor classification only
    /// happens the first time a cell is visited; revisits add no information.
    pub(crate) fn absorb(&mut self, at: Point, percept: Percept) {
        if percept.scream {
            self.hear_scream();
        }

        if !self.grid.get(at).is_visited() {
            self.visit(at, percept.glitter);
            // Visiting can itself locate the wumpus, so suppression is decided afterwards.
            let stench = percept.stench && !self.wumpus_resolved();
            match (stench, percept.breeze) {
                (false, false) => self.clear_around(at),
                (true, true) => self.stench_and_breeze(at),
                (true, false) => self.stench_only(at),
                (false, true) => self.breeze_only(at),
            }
        }

        self.propagate_pits();
        self.resolve_wumpus();
    }

    fn hear_scream(&mut self) {
        self.wumpus_killed = true;
        match self.wumpus {
            Some(w) => {
                debug!(x = w.x, y = w.y, "wumpus killed at its known location");
                self.mark_safe(w);
            }
            None => {
                // The true wumpus cell cannot be told apart from the other suspects.
                debug!(
                    suspects = self.wumpus_candidates.len(),
                    "wumpus killed, clearing every suspect"
                );
                let suspects: Vec<Point> = self.wumpus_candidates.iter().copied().collect();
                for c in suspects {
                    self.remove_wumpus_candidate(c);
                }
            }
        }
    }

    fn visit(&mut self, at: Point, glitter: bool) {
        self.undiscovered.remove(&at);
        self.pit_witnesses.remove(&at);
        self.grid.set(at, CellStatus::Visited);
        if self.wumpus_candidates.remove(&at) {
            self.resolve_wumpus();
        }
        if glitter {
            self.grid.set(at, CellStatus::Gold);
            self.gold_found = true;
        }
    }

    /// Nothing sensed: every neighbor that is not already settled is safe.
    fn clear_around(&mut self, at: Point) {
        for n in self.grid.open_neighbors(at) {
            let status = self.grid.get(n);
            if status.is_visited() || matches!(status, CellStatus::Pit | CellStatus::Wumpus) {
                continue;
            }
            self.mark_safe(n);
        }
    }

    fn stench_and_breeze(&mut self, at: Point) {
        self.narrow_wumpus(at);
        for n in self.grid.open_neighbors(at) {
            let status = self.grid.get(n);
            if status == CellStatus::Unknown || status.is_pit_candidate() {
                self.witness_pit(n, at);
            }
            if self.grid.get(n) != CellStatus::Unknown {
                continue;
            }
            if self.wumpus_resolved() {
                self.grid.set(n, CellStatus::PitCandidate);
            } else {
                self.grid.set(n, CellStatus::BothCandidate);
                self.wumpus_candidates.insert(n);
            }
        }
        self.resolve_wumpus();
    }

    fn stench_only(&mut self, at: Point) {
        self.narrow_wumpus(at);

        if self.wumpus_resolved() {
            // Located elsewhere this turn and no breeze here: the rest of the neighborhood is clear.
            for n in self.grid.open_neighbors(at) {
                if matches!(
                    self.grid.get(n),
                    CellStatus::Unknown | CellStatus::PitCandidate
                ) {
                    self.mark_safe(n);
                }
            }
            return;
        }

        for n in self.grid.open_neighbors(at) {
            match self.grid.get(n) {
                CellStatus::Unknown => {
                    self.grid.set(n, CellStatus::WumpusCandidate);
                    self.wumpus_candidates.insert(n);
                }
                CellStatus::PitCandidate => self.mark_safe(n),
                CellStatus::BothCandidate => {
                    self.grid.set(n, CellStatus::WumpusCandidate);
                    self.pit_witnesses.remove(&n);
                }
                _ => {}
            }
        }
        self.resolve_wumpus();
    }

    fn breeze_only(&mut self, at: Point) {
        for n in self.grid.open_neighbors(at) {
            if self.grid.get(n) == CellStatus::Unknown {
                self.grid.set(n, CellStatus::PitCandidate);
            }
            if self.grid.get(n).is_wumpus_candidate() {
                self.remove_wumpus_candidate(n);
            }
            if self.grid.get(n).is_pit_candidate() {
                self.witness_pit(n, at);
            }
        }
        self.resolve_wumpus();
    }
}
