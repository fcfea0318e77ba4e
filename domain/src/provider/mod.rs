//! Provider roster types

pub mod entities;
