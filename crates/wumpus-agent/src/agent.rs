use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use wumpus_core::{Action, Percept};
use wumpus_tools::{TraceLog, Tracer};

use crate::{InferenceAgent, RandomAgent, ThinkError};

/// The contract between a game loop and a hunter: one percept in, one action out.
pub trait Agent {
    /// Starts a fresh mission on a `grid_size` x `grid_size` cave, border included.
    fn init(&mut self, grid_size: usize);

    fn think(&mut self, percept: Percept) -> Result<Action, ThinkError>;

    /// Optional textual dump of what the agent believes.
    fn debug_view(&self) -> Option<String> {
        None
    }

    /// Hands over the decision trace recorded so far, if the agent keeps one.
    fn take_trace(&mut self) -> Option<TraceLog> {
        None
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AgentKind {
    #[default]
    Inference,
    Random,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Inference => "inference",
            AgentKind::Random => "random",
        }
    }

    /// Builds an untraced agent ready for its first turn.
    pub fn build(self, grid_size: usize, seed: u64) -> Box<dyn Agent> {
        self.build_traced(grid_size, seed, Tracer::off())
    }

    pub fn build_traced(self, grid_size: usize, seed: u64, tracer: Tracer) -> Box<dyn Agent> {
        match self {
            AgentKind::Inference => Box::new(InferenceAgent::new(grid_size).with_tracer(tracer)),
            AgentKind::Random => Box::new(RandomAgent::new(seed)),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inference" => Ok(AgentKind::Inference),
            "random" => Ok(AgentKind::Random),
            other => Err(format!(
                "unknown agent `{other}` (expected `inference` or `random`)"
            )),
        }
    }
}
