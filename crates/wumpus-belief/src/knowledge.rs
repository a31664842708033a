use std::collections::{BTreeMap, BTreeSet};

use wumpus_core::{CellStatus, KnowledgeGrid, Percept, Point, Pose, START};

/// Everything the agent has deduced about the world so far.
///
/// Sets are ordered so that every query (and therefore every plan) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knowledge {
    pub(crate) grid: KnowledgeGrid,
    /// Cells that could still host the wumpus.
    pub(crate) wumpus_candidates: BTreeSet<Point>,
    /// Pit candidate -> visited breeze cells that the pit would explain.
    pub(crate) pit_witnesses: BTreeMap<Point, BTreeSet<Point>>,
    pub(crate) pits: BTreeSet<Point>,
    /// Safe cells known to exist but not visited yet.
    pub(crate) undiscovered: BTreeSet<Point>,
    pub(crate) wumpus: Option<Point>,
    pub(crate) wumpus_killed: bool,
    pub(crate) gold_found: bool,
}

impl Knowledge {
    pub fn new(grid_size: usize) -> Self {
        let mut grid = KnowledgeGrid::new(grid_size);
        grid.set(START, CellStatus::Safe);
        Self {
            grid,
            wumpus_candidates: BTreeSet::new(),
            pit_witnesses: BTreeMap::new(),
            pits: BTreeSet::new(),
            undiscovered: BTreeSet::from([START]),
            wumpus: None,
            wumpus_killed: false,
            gold_found: false,
        }
    }

    /// Interprets `percept`, sensed while standing on `at`, and returns the resulting snapshot.
    pub fn observe(&self, at: Point, percept: Percept) -> Self {
        let mut next = self.clone();
        next.absorb(at, percept);
        next
    }

    /// Picks up the gold lying on `at`, if any. Returns whether there was gold.
    pub fn take_gold(&mut self, at: Point) -> bool {
        if self.grid.get(at) != CellStatus::Gold {
            return false;
        }
        self.grid.set(at, CellStatus::Visited);
        true
    }

    pub fn grid(&self) -> &KnowledgeGrid {
        &self.grid
    }

    pub fn cell(&self, p: Point) -> CellStatus {
        self.grid.get(p)
    }

    pub fn wumpus_candidates(&self) -> &BTreeSet<Point> {
        &self.wumpus_candidates
    }

    pub fn pit_witnesses(&self) -> &BTreeMap<Point, BTreeSet<Point>> {
        &self.pit_witnesses
    }

    pub fn pits(&self) -> &BTreeSet<Point> {
        &self.pits
    }

    pub fn undiscovered(&self) -> &BTreeSet<Point> {
        &self.undiscovered
    }

    /// Location of the wumpus once it has been narrowed down to a single cell.
    pub fn wumpus(&self) -> Option<Point> {
        self.wumpus
    }

    pub fn wumpus_found(&self) -> bool {
        self.wumpus.is_some()
    }

    pub fn wumpus_killed(&self) -> bool {
        self.wumpus_killed
    }

    /// Located or dead: either way stench carries no more information.
    pub fn wumpus_resolved(&self) -> bool {
        self.wumpus.is_some() || self.wumpus_killed
    }

    pub fn gold_found(&self) -> bool {
        self.gold_found
    }

    pub fn gold_at(&self, p: Point) -> bool {
        self.grid.get(p) == CellStatus::Gold
    }

    /// The located, still living wumpus lies on the facing ray of `pose`.
    pub fn can_shoot_from(&self, pose: Pose) -> bool {
        match self.wumpus {
            Some(w) if !self.wumpus_killed => pose.is_ahead(w),
            _ => false,
        }
    }

    /// Pit candidates explained by the fewest breeze cells, i.e. the least suspicious ones.
    /// Falls back to the wumpus candidates when no pit candidate is left.
    pub fn least_witnessed(&self) -> Vec<Point> {
        let Some(min) = self.pit_witnesses.values().map(BTreeSet::len).min() else {
            return self.wumpus_candidates.iter().copied().collect();
        };
        self.pit_witnesses
            .iter()
            .filter(|(_, witnesses)| witnesses.len() == min)
            .map(|(p, _)| *p)
            .collect()
    }

    /// Unvisited safe cells adjacent to a wumpus candidate: places to line up a shot from.
    pub fn wumpus_approach_cells(&self) -> Vec<Point> {
        let mut out: Vec<Point> = Vec::new();
        for candidate in &self.wumpus_candidates {
            for n in self.grid.open_neighbors(*candidate) {
                if self.grid.get(n) == CellStatus::Safe && !out.contains(&n) {
                    out.push(n);
                }
            }
        }
        out
    }

    pub(crate) fn mark_safe(&mut self, p: Point) {
        self.grid.set(p, CellStatus::Safe);
        self.undiscovered.insert(p);
        self.wumpus_candidates.remove(&p);
        self.pit_witnesses.remove(&p);
    }
}
