//! Unknown-id diagnostics
//!
//! Lookups over the hierarchy never fail: an unknown id yields an empty or
//! false result. These helpers make such paths observable without changing
//! the outcome.

/// Counter incremented every time a lookup misses
pub const UNKNOWN_SPACE_COUNTER: &str = "scope_unknown_space_id_total";

/// Record a lookup of an id that is not part of the hierarchy
///
/// `operation` names the caller (e.g. `"ancestors_of"`, `"toggle"`).
pub fn unknown_space(operation: &'static str, id: &str) {
    tracing::debug!(operation, space_id = id, "space id not found in hierarchy");
    metrics::counter!(UNKNOWN_SPACE_COUNTER, "operation" => operation).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SpaceForest, SpaceNode};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};

    fn counters(snapshotter: &Snapshotter) -> Vec<(String, u64)> {
        snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .filter(|(key, ..)| key.key().name() == UNKNOWN_SPACE_COUNTER)
            .filter_map(|(key, _, _, value)| match value {
                DebugValue::Counter(count) => {
                    let operation = key
                        .key()
                        .labels()
                        .find(|label| label.key() == "operation")
                        .map(|label| label.value().to_string())
                        .unwrap_or_default();
                    Some((operation, count))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn unknown_lookups_increment_counter() {
        let forest = SpaceForest::new(vec![
            SpaceNode::new("all", "All").with_child(SpaceNode::new("eng", "Engineering"))
        ])
        .unwrap();
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            assert!(forest.ancestors_of("missing").is_empty());
            assert!(forest.ancestors_of("nowhere").is_empty());
            assert!(forest.descendants_of("missing").is_empty());
            assert_eq!(forest.ancestors_of("eng").len(), 1);
        });

        let mut seen = counters(&snapshotter);
        seen.sort();
        assert_eq!(
            seen,
            vec![("ancestors_of".to_string(), 2), ("descendants_of".to_string(), 1)]
        );
    }
}
