// ABOUTME: Template engine module for the tplbridge render bridge
// ABOUTME: Provides template resolution, rendering, and output post-processing

pub mod context;
pub mod engine;
pub mod error;
pub mod helpers;
pub mod path;
pub mod strip;

pub use context::load_payload;
pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
pub use path::{is_prerendered_temp_path, resolve_template_path, TEMP_PATH_MARKER};
pub use strip::strip_html_comments;
