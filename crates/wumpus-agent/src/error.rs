use thiserror::Error;

/// Why an agent produced no action this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ThinkError {
    /// Nothing safe or sensible is left to try with current knowledge.
    #[error("knowledge exhausted: no action left to take")]
    Exhausted,

    #[error("mission is over: the agent already climbed out")]
    MissionOver,
}
