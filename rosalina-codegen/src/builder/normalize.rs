//! Canonical whitespace pass applied to every rendered body.

/// Normalize whitespace so that equal trees always print to equal bytes.
///
/// - line endings become `\n`
/// - trailing whitespace is removed
/// - runs of blank lines collapse to one
/// - no blank line directly inside `{` or before `}`
/// - no leading or trailing blank lines; output ends with exactly one `\n`
///
/// Indentation is left untouched; it is produced by the builder per nesting
/// depth. The pass is idempotent.
pub fn normalize(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<&str> = Vec::new();
    let mut pending_blank = false;

    for line in unified.lines().map(str::trim_end) {
        if line.is_empty() {
            pending_blank = true;
            continue;
        }

        if pending_blank {
            let after_open = lines.last().is_some_and(|prev| prev.trim_start() == "{");
            let before_close = line.trim_start().starts_with('}');
            if !lines.is_empty() && !after_open && !before_close {
                lines.push("");
            }
            pending_blank = false;
        }

        lines.push(line);
    }

    if lines.is_empty() {
        return String::new();
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
