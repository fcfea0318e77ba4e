//! Port definitions (interfaces to the outside world)

pub mod conversation;
pub mod observer;
pub mod provider_gateway;
