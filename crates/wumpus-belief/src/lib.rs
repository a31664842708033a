//! Belief state for the wumpus hunter.
//!
//! [`Knowledge`] is a per-turn snapshot: [`Knowledge::observe`] interprets one percept and
//! returns the next snapshot, leaving the previous one untouched. Deduction only ever narrows
//! "possible" to "certain"; nothing here assigns probabilities.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod deduce;
pub mod knowledge;
mod rules;

pub use knowledge::Knowledge;
