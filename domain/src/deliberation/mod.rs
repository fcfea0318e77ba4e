//! Deliberation run state and verdict synthesis

pub mod record;
pub mod state;
pub mod verdict;
