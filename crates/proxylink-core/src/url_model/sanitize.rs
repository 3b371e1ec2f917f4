//! Filename sanitization for `Content-Disposition` and saved downloads.

/// Longest filename most filesystems accept, in bytes.
const NAME_MAX: usize = 255;

/// Makes `name` safe to use as a single path component.
///
/// Separators, NUL, quotes and control characters become `_`; runs of `_`
/// collapse; leading/trailing dots, spaces and underscores are dropped; the
/// result is cut to 255 bytes on a char boundary.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let unsafe_char = matches!(c, '/' | '\\' | '"' | '\0') || c.is_control() || c.is_whitespace();
        let c = if unsafe_char { '_' } else { c };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches(|c: char| c == '.' || c == '_');
    let mut end = trimmed.len().min(NAME_MAX);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}
