// ABOUTME: Stdout contract for the render bridge
// ABOUTME: Emits rendered text or the sentinel error line consumed by the calling process

/// Prefix the calling process scans for to detect a failed render.
///
/// Failure is reported on stdout rather than through the exit code because
/// the caller lives in a different language runtime and pattern-matches the
/// output stream. The literal must stay byte-exact for existing callers.
pub const ERROR_SENTINEL: &str = "#<PugJS_Error_for_python>: ";

/// Write the rendered, comment-stripped text to stdout, newline-terminated.
pub fn write_rendered(text: &str) {
    println!("{}", text);
}

/// Write the sentinel error line to stdout.
///
/// The caller treats the sentinel as a single line, so embedded newlines in
/// the description are collapsed to spaces.
pub fn write_failure(description: &str) {
    println!("{}{}", ERROR_SENTINEL, single_line(description));
}

fn single_line(description: &str) -> String {
    description.replace(['\r', '\n'], " ")
}
