//! Library root for flowise-key
pub mod error;
pub mod models;
pub mod report;
pub mod term;
pub mod validate;

pub mod commands;
pub mod config;
pub mod env_file;
pub mod prompt;

// Convenience re-exports
pub use commands::{configure, Status};
pub use env_file::{apply, backup, update};
pub use prompt::prompt;
pub use validate::validate;
