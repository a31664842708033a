use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sensory flags delivered by the environment once per turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Percept {
    pub stench: bool,
    pub breeze: bool,
    pub glitter: bool,
    /// Reported by the environment but not used for inference.
    pub bump: bool,
    pub scream: bool,
}

impl Percept {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_stench(mut self) -> Self {
        self.stench = true;
        self
    }

    pub fn with_breeze(mut self) -> Self {
        self.breeze = true;
        self
    }

    pub fn with_glitter(mut self) -> Self {
        self.glitter = true;
        self
    }

    pub fn with_bump(mut self) -> Self {
        self.bump = true;
        self
    }

    pub fn with_scream(mut self) -> Self {
        self.scream = true;
        self
    }
}

/// The action vocabulary understood by the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    Left,
    Right,
    Forward,
    Shoot,
    Grab,
    Climb,
}

impl Action {
    /// Actions the planner can chain: movement only.
    pub const MOVES: [Action; 3] = [Action::Forward, Action::Left, Action::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Right => "right",
            Action::Forward => "forward",
            Action::Shoot => "shoot",
            Action::Grab => "grab",
            Action::Climb => "climb",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
