//! Core domain types

pub mod error;
pub mod prompt;
