//! Grid, cell, pose and percept primitives shared by every hunter crate.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod body;
pub mod geom;
pub mod grid;
pub mod percept;
pub mod rng;

pub use body::{Body, START, START_FACING};
pub use geom::{Direction, Point, Pose};
pub use grid::{CellStatus, KnowledgeGrid};
pub use percept::{Action, Percept};
pub use rng::{DeterministicRng, SplitMix64};
