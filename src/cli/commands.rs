// ABOUTME: Command implementation for the tplbridge CLI
// ABOUTME: Runs the single-pass resolve, load, render, strip pipeline

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use crate::template::{self, TemplateEngine};

/// Render one template invocation and return the final output text.
///
/// Errors propagate as typed values; the sentinel encoding happens at the
/// application boundary, not here.
pub fn render(basedir: &Path, template_arg: &str, data_file: &Path) -> Result<String> {
    let template_path = template::resolve_template_path(basedir, template_arg);
    debug!(
        "Resolved template '{}' to {}",
        template_arg,
        template_path.display()
    );

    let payload = template::load_payload(data_file)?;
    debug!("Loaded data payload from {}", data_file.display());

    let mut engine = TemplateEngine::for_basedir(basedir)?;
    let rendered = engine.render_file(&template_path, &payload)?;

    info!("Rendered template {}", template_path.display());
    Ok(template::strip_html_comments(&rendered))
}
