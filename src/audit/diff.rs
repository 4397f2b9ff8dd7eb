//! Diff generation for audit logging
//!
//! Summarizes which top-level fields changed between two snapshots of a book.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Only top-level field changes are reported, e.g.
/// `quantity: 4 -> 2, title: "Old" -> "New"`.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let truncated: String = s.chars().take(47).collect();
                format!("\"{}...\"", truncated)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_field_change() {
        let before = json!({"title": "Dune", "quantity": 4});
        let after = json!({"title": "Dune", "quantity": 2});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "quantity: 4 -> 2");
    }

    #[test]
    fn test_string_field_change() {
        let before = json!({"title": "Old Title"});
        let after = json!({"title": "New Title"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("title: \"Old Title\" -> \"New Title\""));
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"author": "A"});
        let after = json!({"title": "T"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("author: \"A\" -> (removed)"));
        assert!(diff.contains("title: (added) -> \"T\""));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"title": "Same"});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_long_strings_truncated() {
        let long = "x".repeat(80);
        let diff = generate_diff(&json!({"title": "short"}), &json!({"title": long})).unwrap();
        assert!(diff.ends_with("...\""));
    }

    #[test]
    fn test_non_object_values() {
        assert_eq!(generate_diff(&json!(1), &json!(2)).unwrap(), "1 -> 2");
    }
}
