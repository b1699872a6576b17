//! Rewriting of raw identifier components into DNS-safe text.

/// Scheme marker in runtime image references, e.g. `docker-pullable://`.
const SCHEME_MARKER: &str = "://";

/// Replaces characters that are illegal in DNS names with hyphens.
///
/// Scheme markers collapse to a single `-`, every other character outside
/// `[a-zA-Z0-9.-]` becomes one `-`. Illegal characters at either end are
/// dropped rather than replaced, so no hyphen is manufactured at the edges.
/// The result is ASCII and sanitizing it again returns it unchanged. It is
/// not necessarily a valid DNS name.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c: char| !is_allowed(c));

    let mut out = String::with_capacity(trimmed.len());
    for (i, segment) in trimmed.split(SCHEME_MARKER).enumerate() {
        if i > 0 {
            out.push('-');
        }
        out.extend(
            segment
                .chars()
                .map(|c| if is_allowed(c) { c } else { '-' }),
        );
    }
    out
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-'
}
