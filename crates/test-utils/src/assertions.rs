//! Snapshot testing assertions for lint output
//!
//! Violations are formatted consistently for readable snapshots.

/// Format a list of messages for snapshot testing, one numbered line each.
///
/// # Example
///
/// ```ignore
/// use sass_order_test_utils::format_messages;
///
/// let violations = lint_source(&file, source, &config)?;
/// insta::assert_snapshot!(format_messages(&violations));
/// ```
pub fn format_messages<T: std::fmt::Display>(messages: &[T]) -> String {
    if messages.is_empty() {
        return String::from("(no violations)");
    }

    messages
        .iter()
        .enumerate()
        .map(|(i, m)| format!("[{}] {m}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
