use super::condition::Condition;
use super::meta::{ObjectMeta, Resource};
use crate::constants::kinds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A custom-task step spawned by a pipeline run
///
/// Runs are executed by external controllers, so besides the common condition and
/// timing fields their status carries an opaque `extraFields` payload owned by the
/// controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub status: RunStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<RunResult>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub extra_fields: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub name: String,
    pub value: String,
}

impl Run {
    pub fn new(metadata: ObjectMeta, status: RunStatus) -> Self {
        Self { metadata, status }
    }
}

impl RunStatus {
    /// Status carrying a single `Succeeded` condition
    pub fn with_condition(status: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            conditions: vec![Condition::succeeded(status, reason)],
            ..Self::default()
        }
    }
}

impl Resource for Run {
    const KIND: &'static str = kinds::RUN;

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}
