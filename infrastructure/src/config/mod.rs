//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileDeliberationConfig, FileProviderConfig};
pub use loader::ConfigLoader;
