//! Proptest strategies for reconciliation inputs

use proptest::prelude::*;

/// Strategy for DNS-label style resource names
pub fn resource_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,20}"
}

/// Strategy for child reference kinds, including ones the client does not know
pub fn child_kind_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("TaskRun".to_string()),
        Just("Run".to_string()),
        Just("CustomRun".to_string()),
        "[A-Z][a-zA-Z]{2,12}",
    ]
}

/// Strategy for condition reasons reported by steps
pub fn reason_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Succeeded".to_string()),
        Just("Failed".to_string()),
        Just("Running".to_string()),
        Just("Cancelled".to_string()),
    ]
}

/// Strategy for a set of step records: (name, pipeline task, reason)
pub fn step_records_strategy() -> impl Strategy<Value = Vec<(String, String, String)>> {
    prop::collection::btree_map(
        resource_name_strategy(),
        (resource_name_strategy(), reason_strategy()),
        0..8,
    )
    .prop_map(|records| {
        records
            .into_iter()
            .map(|(name, (task, reason))| (name, task, reason))
            .collect()
    })
}
