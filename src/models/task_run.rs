use super::condition::Condition;
use super::meta::{ObjectMeta, Resource};
use crate::constants::kinds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single unit of work spawned by a pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRun {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub status: TaskRunStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRunStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub task_results: Vec<TaskRunResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRunResult {
    pub name: String,
    pub value: String,
}

impl TaskRun {
    pub fn new(metadata: ObjectMeta, status: TaskRunStatus) -> Self {
        Self { metadata, status }
    }
}

impl TaskRunStatus {
    /// Status carrying a single `Succeeded` condition
    pub fn with_condition(status: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            conditions: vec![Condition::succeeded(status, reason)],
            ..Self::default()
        }
    }
}

impl Resource for TaskRun {
    const KIND: &'static str = kinds::TASK_RUN;

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}
