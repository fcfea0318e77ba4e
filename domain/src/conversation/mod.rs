//! Conversation domain types

pub mod entities;
