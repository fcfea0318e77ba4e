//! Domain layer for council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Deliberation
//!
//! A deliberation is one end-to-end cycle: a prompt is fanned out to a
//! fixed roster of providers, their responses are collected as they race
//! to completion, and a single verdict is synthesized once every provider
//! has been heard (or has abstained).
//!
//! ## Roster
//!
//! The set of providers is fixed at construction time. Membership never
//! changes while a deliberation is running.

pub mod conversation;
pub mod core;
pub mod deliberation;
pub mod provider;

// Re-export commonly used types
pub use conversation::entities::{Message, MessageId, Role};
pub use core::{error::DomainError, prompt::Prompt};
pub use deliberation::{
    record::{DeliberationRecord, ProviderOutput},
    state::{DeliberationSnapshot, DeliberationState, Phase},
    verdict::synthesize_verdict,
};
pub use provider::entities::{Provider, ProviderId, Roster};
