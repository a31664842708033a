//! Decision controllers: the per-turn entry point an external game loop drives.
//!
//! ```
//! use wumpus_agent::{Agent, AgentKind};
//! use wumpus_core::{Action, Percept};
//!
//! let mut agent = AgentKind::Inference.build(6, 0);
//! assert_eq!(agent.think(Percept::none()), Ok(Action::Forward));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod agent;
mod error;
mod inference;
mod random;

pub use agent::{Agent, AgentKind};
pub use error::ThinkError;
pub use inference::InferenceAgent;
pub use random::RandomAgent;
