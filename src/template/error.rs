// ABOUTME: Error types for template engine operations
// ABOUTME: Defines specific error types for template resolution, loading, and rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Data payload error: {0}")]
    PayloadError(String),

    #[error("System error: {0}")]
    SystemError(String),

    #[error("Template compile error: {0}")]
    CompileError(#[from] handlebars::TemplateError),

    #[error("Template render error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
