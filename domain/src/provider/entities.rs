//! Provider domain entities
//!
//! A [`Provider`] is one voice on the council: a stable identity plus a
//! persona label. Providers are immutable after construction and the
//! [`Roster`] they belong to is fixed for the lifetime of the orchestrator.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Unique, stable identity of a provider (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        ProviderId::new(s)
    }
}

impl From<String> for ProviderId {
    fn from(s: String) -> Self {
        ProviderId::new(s)
    }
}

/// A provider on the council roster (Entity)
///
/// Immutable after construction. `description` is the persona/role label
/// the provider answers in character as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    id: ProviderId,
    name: String,
    description: String,
}

impl Provider {
    pub fn new(
        id: impl Into<ProviderId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn id(&self) -> &ProviderId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The fixed, ordered set of providers for an orchestrator (Value Object)
///
/// Validated at construction: ids must be unique. The empty roster is
/// legal — a deliberation over zero providers completes immediately with
/// a trivial verdict.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    providers: Vec<Provider>,
}

impl Roster {
    /// Build a roster, rejecting duplicate provider ids
    pub fn new(providers: Vec<Provider>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for provider in &providers {
            if !seen.insert(provider.id().clone()) {
                return Err(DomainError::DuplicateProvider(provider.id().to_string()));
            }
        }
        Ok(Self { providers })
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn ids(&self) -> impl Iterator<Item = &ProviderId> {
        self.providers.iter().map(|p| p.id())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn get(&self, id: &ProviderId) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Provider> {
        self.providers.iter()
    }
}
