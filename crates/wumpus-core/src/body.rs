use crate::{Action, Direction, Point, Pose};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const START: Point = Point::new(1, 1);
pub const START_FACING: Direction = Direction::East;

/// The agent's own physical state, tracked without waiting for the next percept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Body {
    pub pose: Pose,
    pub arrows: u8,
    pub gold_grabbed: bool,
    pub has_won: bool,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            pose: Pose::new(START, START_FACING),
            arrows: 1,
            gold_grabbed: false,
            has_won: false,
        }
    }
}

impl Body {
    pub fn at_start(&self) -> bool {
        self.pose.at == START
    }

    /// Applies the effect of `action`. `gold_here` tells whether the current cell
    /// holds gold, which is the only way a grab succeeds.
    pub fn apply(&mut self, action: Action, gold_here: bool) {
        match action {
            Action::Left | Action::Right | Action::Forward => {
                self.pose = self.pose.apply(action);
            }
            Action::Shoot => self.arrows = self.arrows.saturating_sub(1),
            Action::Grab => {
                if gold_here {
                    self.gold_grabbed = true;
                }
            }
            Action::Climb => self.has_won = true,
        }
    }
}
