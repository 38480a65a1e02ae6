// ABOUTME: Main template engine implementation using Handlebars
// ABOUTME: Renders a resolved template file with partials rooted at the base directory

use handlebars::Handlebars;
use serde_json::Value as JsonValue;
use std::path::Path;

use super::error::{Result, TemplateError};
use super::helpers;

/// Registry name under which the invocation's template file is registered.
/// Reserved so it cannot collide with partial names derived from files
/// under the base directory.
const ENTRY_TEMPLATE: &str = "__entry__";

/// Extension used when scanning the base directory for partials.
const PARTIAL_EXTENSION: &str = ".hbs";

pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a template engine rooted at the given base directory.
    ///
    /// Every `.hbs` file under the base directory becomes available as a
    /// partial, named by its extension-less relative path, so templates can
    /// use `{{> header}}` or `{{> emails/footer}}`. A missing base
    /// directory is tolerated: a pre-rendered temp template with no
    /// includes must still render.
    pub fn for_basedir(basedir: &Path) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // A variable the template references but the payload omits is a
        // render failure, never a silently-empty substitution.
        handlebars.set_strict_mode(true);
        handlebars.set_dev_mode(false);

        helpers::register_helpers(&mut handlebars)
            .map_err(|e| TemplateError::SystemError(e.to_string()))?;

        if basedir.is_dir() {
            handlebars.register_templates_directory(PARTIAL_EXTENSION, basedir)?;
        }

        Ok(Self { handlebars })
    }

    /// Compile the template file at `path` and render it with the payload
    /// as the variable context.
    pub fn render_file(&mut self, path: &Path, payload: &JsonValue) -> Result<String> {
        if !path.is_file() {
            return Err(TemplateError::TemplateNotFound(path.display().to_string()));
        }

        self.handlebars
            .register_template_file(ENTRY_TEMPLATE, path)?;

        let rendered = self.handlebars.render(ENTRY_TEMPLATE, payload)?;
        Ok(rendered)
    }
}
