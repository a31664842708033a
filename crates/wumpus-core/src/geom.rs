use crate::Action;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan(self, other: Point) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }

    /// The four orthogonal neighbors, in direction order (N, E, S, W).
    pub fn neighbors(self) -> [Point; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// Packs the coordinate into a single `u64` for trace payloads.
    pub fn packed(self) -> u64 {
        ((self.x as u32 as u64) << 32) | (self.y as u32 as u64)
    }
}

/// Facing direction. The discriminants follow the cyclic order used by turns:
/// turning right adds one, turning left subtracts one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub fn right(self) -> Self {
        Self::ALL[(self as usize + 1) % 4]
    }

    pub fn left(self) -> Self {
        Self::ALL[(self as usize + 3) % 4]
    }
}

/// Position plus facing. This is the whole identity of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    pub at: Point,
    pub facing: Direction,
}

impl Pose {
    pub const fn new(at: Point, facing: Direction) -> Self {
        Self { at, facing }
    }

    pub fn forward(self) -> Point {
        self.at.step(self.facing)
    }

    /// Pose after a movement action. Non-movement actions leave the pose unchanged.
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::Left => Self::new(self.at, self.facing.left()),
            Action::Right => Self::new(self.at, self.facing.right()),
            Action::Forward => Self::new(self.forward(), self.facing),
            Action::Shoot | Action::Grab | Action::Climb => self,
        }
    }

    /// Signed distance of `target` along the facing axis (positive = ahead),
    /// and its absolute lateral offset.
    fn axis_split(self, target: Point) -> (i32, i32) {
        let (dx, dy) = self.facing.delta();
        let rx = target.x - self.at.x;
        let ry = target.y - self.at.y;
        let along = rx * dx + ry * dy;
        let lateral = if dx == 0 { rx.abs() } else { ry.abs() };
        (along, lateral)
    }

    /// True when `target` lies on the ray cast from the current cell along the
    /// facing direction (the current cell included).
    pub fn is_ahead(self, target: Point) -> bool {
        let (along, lateral) = self.axis_split(target);
        lateral == 0 && along >= 0
    }

    /// True when reaching `target` never requires moving against the facing axis.
    pub fn is_non_regressive(self, target: Point) -> bool {
        let (along, _) = self.axis_split(target);
        along >= 0
    }

    /// Minimum number of turns needed before `target` can be reached by forward moves.
    pub fn turning_cost(self, target: Point) -> u32 {
        if self.is_ahead(target) {
            0
        } else if self.is_non_regressive(target) {
            1
        } else {
            2
        }
    }
}
