use crate::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the agent currently believes about a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CellStatus {
    Wall,
    Unknown,
    Safe,
    Visited,
    Gold,
    PitCandidate,
    WumpusCandidate,
    BothCandidate,
    Pit,
    Wumpus,
}

impl CellStatus {
    /// Visited by the agent. A gold cell is a visited cell whose gold is still on the floor.
    pub fn is_visited(self) -> bool {
        matches!(self, CellStatus::Visited | CellStatus::Gold)
    }

    /// Known to hold neither a pit nor a live wumpus.
    pub fn is_safe(self) -> bool {
        matches!(self, CellStatus::Safe | CellStatus::Visited | CellStatus::Gold)
    }

    /// May still explain a sensation: unknown, suspected, or confirmed hazard.
    pub fn may_be_hazard(self) -> bool {
        matches!(
            self,
            CellStatus::Unknown
                | CellStatus::PitCandidate
                | CellStatus::WumpusCandidate
                | CellStatus::BothCandidate
                | CellStatus::Pit
                | CellStatus::Wumpus
        )
    }

    pub fn is_pit_candidate(self) -> bool {
        matches!(self, CellStatus::PitCandidate | CellStatus::BothCandidate)
    }

    pub fn is_wumpus_candidate(self) -> bool {
        matches!(
            self,
            CellStatus::WumpusCandidate | CellStatus::BothCandidate
        )
    }

    pub fn glyph(self) -> char {
        match self {
            CellStatus::Wall => '#',
            CellStatus::Unknown => '?',
            CellStatus::Safe => ' ',
            CellStatus::Visited => '.',
            CellStatus::Gold => 'G',
            CellStatus::PitCandidate => 'p',
            CellStatus::WumpusCandidate => 'w',
            CellStatus::BothCandidate => 'x',
            CellStatus::Pit => 'P',
            CellStatus::Wumpus => 'W',
        }
    }
}

/// Square grid of cell beliefs. The border ring is always [`CellStatus::Wall`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnowledgeGrid {
    size: i32,
    cells: Vec<CellStatus>,
}

impl KnowledgeGrid {
    pub fn new(size: usize) -> Self {
        assert!(size >= 3, "grid must have at least one interior cell");
        let size = size as i32;
        let mut cells = Vec::with_capacity((size * size) as usize);
        for y in 0..size {
            for x in 0..size {
                let border = x == 0 || y == 0 || x == size - 1 || y == size - 1;
                cells.push(if border {
                    CellStatus::Wall
                } else {
                    CellStatus::Unknown
                });
            }
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size as usize
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.size && p.y < self.size
    }

    fn idx(&self, p: Point) -> usize {
        assert!(
            self.in_bounds(p),
            "cell ({}, {}) outside {}x{} grid",
            p.x,
            p.y,
            self.size,
            self.size
        );
        (p.y * self.size + p.x) as usize
    }

    pub fn get(&self, p: Point) -> CellStatus {
        self.cells[self.idx(p)]
    }

    pub fn set(&mut self, p: Point, status: CellStatus) {
        let idx = self.idx(p);
        self.cells[idx] = status;
    }

    /// Non-wall orthogonal neighbors, in direction order (N, E, S, W).
    pub fn open_neighbors(&self, p: Point) -> Vec<Point> {
        p.neighbors()
            .into_iter()
            .filter(|n| self.in_bounds(*n) && self.get(*n) != CellStatus::Wall)
            .collect()
    }

    /// Row-major iteration over every cell.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellStatus)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, s)| (Point::new(i as i32 % size, i as i32 / size), *s))
    }
}
