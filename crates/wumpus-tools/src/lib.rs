//! Tooling for the wumpus hunter: structured decision traces and a textual grid dump.
//!
//! Nothing here influences decisions. Agents emit into a [`Tracer`] and front ends decide
//! what to do with the events.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod render;
pub mod trace;

pub use render::render_grid;
pub use trace::{TraceEvent, TraceLog, TraceSink, Tracer};
