// ABOUTME: Output module for the tplbridge render bridge
// ABOUTME: Exports the stdout contract used by the calling process

pub mod writer;

pub use writer::{write_failure, write_rendered, ERROR_SENTINEL};
