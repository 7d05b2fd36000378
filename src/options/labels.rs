use std::collections::BTreeMap;

/// Merge `labels` into `target`. An unset target takes the map as is,
/// otherwise entries are copied over, replacing existing keys.
pub(crate) fn merge(target: &mut Option<BTreeMap<String, String>>, labels: BTreeMap<String, String>) {
    match target {
        Some(existing) => existing.extend(labels),
        None => *target = Some(labels),
    }
}
