//! Declaration names derived from endpoint paths

use url::Url;

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split on anything that can't appear in an identifier and capitalize each part
pub fn pascal_case(s: &str) -> String {
    s.split(|c: char| !is_identifier_char(c))
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

/// Derive a declaration name from an endpoint path.
///
/// `/users/1/posts` becomes `UsersPosts`: numeric segments are dropped and
/// the rest are capitalized and joined. Absolute URLs use their path only,
/// query strings and fragments are ignored. Returns `None` when nothing is left.
pub fn interface_name(api: &str) -> Option<String> {
    let path = match Url::parse(api) {
        Ok(url) if api.contains("://") => url.path().to_owned(),
        _ => api.split(['?', '#']).next().unwrap_or_default().to_owned(),
    };

    let name: String = path
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty() && !is_integral(segment))
        .map(pascal_case)
        .collect();

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Placeholder name for endpoints whose path yields no name
pub fn anonymous_name(index: usize) -> String {
    format!("Anonymous{index}")
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_integral(segment: &str) -> bool {
    segment
        .parse::<f64>()
        .is_ok_and(|n| n.is_finite() && n.fract() == 0.0)
}
