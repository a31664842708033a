//! Heuristic search over hypothetical poses.
//!
//! Knowledge never changes while a plan is being searched, only the pose does, so a planning
//! call borrows one [`wumpus_belief::Knowledge`] snapshot and explores lightweight pose nodes.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod goal;
pub mod risk;
pub mod search;

pub use goal::Goal;
pub use risk::RiskPolicy;
pub use search::{Plan, Planner};
