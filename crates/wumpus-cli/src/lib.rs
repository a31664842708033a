//! Library side of the `wumpus` binary: configuration, percept sources and the mission loop.

#![forbid(unsafe_code)]

pub mod config;
pub mod script;
pub mod session;

pub use config::HunterConfig;
pub use session::{Ending, Session};
