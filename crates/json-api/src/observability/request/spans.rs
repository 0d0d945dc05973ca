//! Span naming for HTTP requests.

/// Route template and span name for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RequestSpanName {
    pub(super) route: String,
    pub(super) span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = route_template(path);
    let span_name = format!("{method} {route}");

    RequestSpanName { route, span_name }
}

/// Collapse numeric identifiers so metrics and span names stay low-cardinality.
fn route_template(path: &str) -> String {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return "/".to_owned();
    }

    let segments: Vec<&str> = trimmed
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}
