// ABOUTME: Main library module for the tplbridge render bridge
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod output;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use output::ERROR_SENTINEL;
pub use template::{TemplateEngine, TemplateError};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
