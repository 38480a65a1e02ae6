// ABOUTME: Handlebars helper functions available to bridge templates
// ABOUTME: Implements built-in template functions for env vars, timestamps, and string shaping

use chrono::format::strftime::StrftimeItems;
use chrono::format::Item;
use chrono::Utc;
use handlebars::{Context, Handlebars, Helper, Output, RenderContext, RenderError};
use std::env;

/// Environment variable helper - gets environment variable value
pub fn env_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let var_name = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("env helper requires variable name parameter"))?;

    let default_value = h.param(1).and_then(|v| v.value().as_str()).unwrap_or("");

    let value = env::var(var_name).unwrap_or_else(|_| default_value.to_string());
    out.write(&value)?;
    Ok(())
}

/// Timestamp helper - formats current time with optional format string
pub fn timestamp_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let format = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .unwrap_or("%Y-%m-%d %H:%M:%S");

    // A bad strftime string panics inside DelayedFormat's ToString, so the
    // items are validated up front and the failure stays a render error.
    let items: Vec<Item> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(RenderError::new(format!(
            "invalid timestamp format: {}",
            format
        )));
    }

    let formatted = Utc::now().format_with_items(items.into_iter()).to_string();
    out.write(&formatted)?;
    Ok(())
}

/// Uppercase helper
pub fn upper_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("upper helper requires input parameter"))?;

    out.write(&input.to_uppercase())?;
    Ok(())
}

/// Lowercase helper
pub fn lower_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("lower helper requires input parameter"))?;

    out.write(&input.to_lowercase())?;
    Ok(())
}

/// Default helper - provides default value if variable is empty
pub fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let value = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");

    let default_value = h
        .param(1)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("default helper requires default value parameter"))?;

    let result = if value.is_empty() {
        default_value
    } else {
        value
    };

    out.write(result)?;
    Ok(())
}

/// JSON helper - serializes a context value back to JSON text
pub fn json_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let value = h
        .param(0)
        .map(|v| v.value())
        .ok_or_else(|| RenderError::new("json helper requires a value parameter"))?;

    let serialized = serde_json::to_string(value)
        .map_err(|e| RenderError::new(format!("JSON serialization error: {}", e)))?;
    out.write(&serialized)?;
    Ok(())
}

/// Register all built-in helpers with a Handlebars instance
pub fn register_helpers(
    handlebars: &mut Handlebars,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    handlebars.register_helper("env", Box::new(env_helper));
    handlebars.register_helper("timestamp", Box::new(timestamp_helper));
    handlebars.register_helper("upper", Box::new(upper_helper));
    handlebars.register_helper("lower", Box::new(lower_helper));
    handlebars.register_helper("default", Box::new(default_helper));
    handlebars.register_helper("json", Box::new(json_helper));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use handlebars::Handlebars;

    fn create_test_handlebars() -> Handlebars<'static> {
        let mut handlebars = Handlebars::new();
        register_helpers(&mut handlebars).unwrap();
        handlebars
    }

    #[test]
    fn test_env_helper() {
        std::env::set_var("TPLBRIDGE_TEST_VAR", "test_value");
        let handlebars = create_test_handlebars();
        let result = handlebars
            .render_template("{{env \"TPLBRIDGE_TEST_VAR\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(result, "test_value");

        let result_default = handlebars
            .render_template(
                "{{env \"TPLBRIDGE_NONEXISTENT_VAR\" \"default_value\"}}",
                &serde_json::json!({}),
            )
            .unwrap();
        assert_eq!(result_default, "default_value");
    }

    #[test]
    fn test_timestamp_helper() {
        let handlebars = create_test_handlebars();
        let result = handlebars
            .render_template("{{timestamp}}", &serde_json::json!({}))
            .unwrap();
        assert!(!result.is_empty());

        let result_formatted = handlebars
            .render_template("{{timestamp \"%Y\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(result_formatted.len(), 4); // Year should be 4 digits
    }

    #[test]
    fn test_timestamp_helper_invalid_format_is_render_error() {
        let handlebars = create_test_handlebars();

        // A dangling specifier must fail the render, not panic.
        let result = handlebars.render_template("{{timestamp \"%\"}}", &serde_json::json!({}));
        assert!(result.is_err());

        let result = handlebars.render_template("{{timestamp \"%Q!\"}}", &serde_json::json!({}));
        assert!(result.is_err());
    }

    #[test]
    fn test_case_helpers() {
        let handlebars = create_test_handlebars();
        let upper = handlebars
            .render_template("{{upper \"hello world\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(upper, "HELLO WORLD");

        let lower = handlebars
            .render_template("{{lower \"HELLO WORLD\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(lower, "hello world");
    }

    #[test]
    fn test_default_helper() {
        let handlebars = create_test_handlebars();
        let result = handlebars
            .render_template("{{default \"\" \"fallback\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(result, "fallback");

        let result2 = handlebars
            .render_template("{{default \"value\" \"fallback\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(result2, "value");
    }

    #[test]
    fn test_json_helper() {
        let handlebars = create_test_handlebars();
        let context = serde_json::json!({"items": [1, 2, 3]});
        let result = handlebars
            .render_template("{{json items}}", &context)
            .unwrap();
        assert_eq!(result, "[1,2,3]");
    }
}
