//! Umbrella crate that re-exports the `wumpus-*` building blocks.
//!
//! Enable only the layers you need: `core` for the grid vocabulary, `belief` for deduction,
//! `plan` for search, `agent` for the turn-by-turn controllers, `tools` for traces and rendering.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use wumpus_core as core;

#[cfg(feature = "belief")]
#[cfg_attr(docsrs, doc(cfg(feature = "belief")))]
pub use wumpus_belief as belief;

#[cfg(feature = "plan")]
#[cfg_attr(docsrs, doc(cfg(feature = "plan")))]
pub use wumpus_plan as plan;

#[cfg(feature = "agent")]
#[cfg_attr(docsrs, doc(cfg(feature = "agent")))]
pub use wumpus_agent as agent;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use wumpus_tools as tools;
