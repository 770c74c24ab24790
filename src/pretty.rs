use serde_json::Value;

/// Render a JSON node as indented text for people to read.
///
/// Returns an empty string when there is nothing to render, or when
/// rendering fails; the failure is logged, never returned.
pub fn format(node: Option<&Value>) -> String {
    let node = match node {
        Some(node) => node,
        None => return String::new(),
    };
    match serde_json::to_string_pretty(node) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("can't convert JSON object {} to pretty string: {}", node, err);
            String::new()
        }
    }
}
