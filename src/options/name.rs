use tracing::debug;

/// Cut `value` down to at most `max` bytes, keeping the leading part.
/// The cut is moved back to the nearest character boundary so the result
/// stays valid UTF-8.
pub(crate) fn truncate(mut value: String, max: usize, field: &str) -> String {
    if value.len() <= max {
        return value;
    }

    let mut end = max;
    while !value.is_char_boundary(end) {
        end -= 1;
    }

    debug!(
        field,
        original_length = value.len(),
        truncated_length = end,
        "truncating AnalysisRun name component"
    );
    value.truncate(end);
    value
}
