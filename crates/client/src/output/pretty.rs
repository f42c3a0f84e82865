//! Pretty output formatting.

use cla_core::Operation;
use serde_json::Value;

use crate::client::ops::ReleaseVersion;

/// Format any JSON value for display.
///
/// Arrays get a count header; everything else is indented JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Array(items) if items.is_empty() => "No results.".to_string(),
        Value::Array(items) => {
            let mut output = format!("RESULTS ({})\n", items.len());
            output.push_str(&"-".repeat(40));
            for item in items {
                output.push('\n');
                output.push_str(&serde_json::to_string_pretty(item).unwrap_or_default());
            }
            output
        }
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}

/// Format the backend release version for display.
pub fn format_release_version(version: &ReleaseVersion) -> String {
    format!(
        "Version: {}\n  Commit: {}\n  Branch: {}\n  Built: {}",
        version.version, version.commit, version.branch, version.build_date
    )
}

/// Format the routing table for display.
pub fn format_endpoints(operations: &[Operation]) -> String {
    let width = operations
        .iter()
        .map(|op| op.name().len())
        .max()
        .unwrap_or(0);
    let mut output = format!("ENDPOINTS ({})\n", operations.len());
    output.push_str(&"-".repeat(40));
    for op in operations {
        let endpoint = op.endpoint();
        output.push_str(&format!(
            "\n{:<width$}  {:<6} {}  {:<6} {}",
            op.name(),
            endpoint.method.to_string(),
            endpoint.version,
            endpoint.auth.to_string(),
            endpoint.path,
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_empty_array() {
        assert_eq!(format_value(&json!([])), "No results.");
    }

    #[test]
    fn test_format_array_has_count() {
        let output = format_value(&json!([{ "user_id": "u1" }, { "user_id": "u2" }]));
        assert!(output.starts_with("RESULTS (2)"));
        assert!(output.contains("\"u2\""));
    }

    #[test]
    fn test_format_string_is_verbatim() {
        assert_eq!(format_value(&json!("<svg/>")), "<svg/>");
    }

    #[test]
    fn test_format_release_version() {
        let version = ReleaseVersion {
            version: "v1.2.3".to_string(),
            commit: "abc123".to_string(),
            branch: "main".to_string(),
            build_date: "2020-01-01".to_string(),
        };
        let output = format_release_version(&version);
        assert!(output.starts_with("Version: v1.2.3"));
        assert!(output.contains("Commit: abc123"));
    }

    #[test]
    fn test_format_endpoints() {
        let output = format_endpoints(&[Operation::GetUser, Operation::GetGerrit]);
        assert!(output.starts_with("ENDPOINTS (2)"));
        assert!(output.contains("/v2/user/{user_id}"));
        assert!(output.contains("bearer"));
    }
}
