// ABOUTME: Template path resolution for the render bridge
// ABOUTME: Handles the pre-rendered temp-file heuristic and base-relative joining

use std::path::{Path, PathBuf};

/// Marker substring identifying a pre-rendered temp-file template.
///
/// Callers that render a template string on the fly write it into a
/// `mkstemp`-style file and pass that path directly. The calling side
/// recognizes those paths by this exact fragment, so it must stay a
/// substring match on this literal, never a general absolute-path check.
pub const TEMP_PATH_MARKER: &str = "/tmp/tmp";

/// Returns true if the template argument names a pre-rendered temp file
/// that should be used verbatim instead of being joined onto the base
/// directory.
pub fn is_prerendered_temp_path(template_arg: &str) -> bool {
    template_arg.contains(TEMP_PATH_MARKER)
}

/// Resolve the effective template path for an invocation.
///
/// Base-relative arguments are joined under `basedir`. A leading `/` on the
/// argument does not escape the base directory: such arguments are still
/// base-relative, matching the path semantics callers already rely on.
pub fn resolve_template_path(basedir: &Path, template_arg: &str) -> PathBuf {
    if is_prerendered_temp_path(template_arg) {
        PathBuf::from(template_arg)
    } else {
        basedir.join(template_arg.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_detected_by_marker() {
        assert!(is_prerendered_temp_path("/tmp/tmpa1b2c3"));
        assert!(is_prerendered_temp_path("/private/tmp/tmpXYZ.hbs"));
        assert!(!is_prerendered_temp_path("hello.hbs"));
        assert!(!is_prerendered_temp_path("/tmp/hello.hbs"));
    }

    #[test]
    fn test_marker_is_substring_not_prefix() {
        // The check is contains, not starts_with.
        assert!(is_prerendered_temp_path("prefix/tmp/tmpfile"));
    }

    #[test]
    fn test_temp_path_used_verbatim() {
        let resolved = resolve_template_path(Path::new("/templates"), "/tmp/tmpa1b2c3");
        assert_eq!(resolved, PathBuf::from("/tmp/tmpa1b2c3"));
    }

    #[test]
    fn test_relative_arg_joined_to_basedir() {
        let resolved = resolve_template_path(Path::new("/templates"), "hello.hbs");
        assert_eq!(resolved, PathBuf::from("/templates/hello.hbs"));
    }

    #[test]
    fn test_nested_relative_arg() {
        let resolved = resolve_template_path(Path::new("/templates"), "emails/welcome.hbs");
        assert_eq!(resolved, PathBuf::from("/templates/emails/welcome.hbs"));
    }

    #[test]
    fn test_leading_slash_stays_under_basedir() {
        let resolved = resolve_template_path(Path::new("/templates"), "/hello.hbs");
        assert_eq!(resolved, PathBuf::from("/templates/hello.hbs"));
    }
}
