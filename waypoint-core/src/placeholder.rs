use std::collections::BTreeSet;

/// Collect the names of all `{token}` placeholders in `s`.
///
/// Unbalanced braces and empty `{}` pairs contribute nothing; this never
/// fails. Duplicate tokens collapse.
///
/// ```
/// # use waypoint_core::placeholder::extract_placeholders;
/// let tokens = extract_placeholders("/cars/{id}/owners/{owner}");
/// assert!(tokens.contains("id") && tokens.contains("owner"));
/// assert!(extract_placeholders("/cars/{id").is_empty());
/// ```
pub fn extract_placeholders(s: &str) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    let mut rest = s;
    while let Some(start) = rest.find('{') {
        let after_open = &rest[start + 1..];
        let Some(end) = after_open.find('}') else {
            break;
        };
        let candidate = &after_open[..end];
        // `{a{b}`: restart from the innermost opening brace.
        if let Some(inner) = candidate.rfind('{') {
            rest = &after_open[inner..];
            continue;
        }
        if !candidate.is_empty() {
            tokens.insert(candidate.to_string());
        }
        rest = &after_open[end + 1..];
    }
    tokens
}

/// Whether `s` contains at least one placeholder.
pub fn has_placeholders(s: &str) -> bool {
    !extract_placeholders(s).is_empty()
}
