use super::condition::Condition;
use super::meta::{ObjectMeta, Resource};
use super::run::RunStatus;
use super::task_run::TaskRunStatus;
use crate::constants::kinds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Top-level execution record for one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRun {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub status: PipelineRunStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
    /// References to the TaskRuns/Runs this run spawned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_references: Option<Vec<ChildReference>>,
    /// TaskRun name -> status, filled in on read from the live store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_runs: Option<BTreeMap<String, PipelineRunTaskRunStatus>>,
    /// Run name -> status, filled in on read from the live store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs: Option<BTreeMap<String, PipelineRunRunStatus>>,
}

/// Kind of a child reference
///
/// Kinds this crate does not know about deserialize into [`ChildKind::Unknown`]
/// instead of failing, so new engine kinds never break reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChildKind {
    TaskRun,
    Run,
    Unknown(String),
}

impl ChildKind {
    pub fn as_str(&self) -> &str {
        match self {
            ChildKind::TaskRun => kinds::TASK_RUN,
            ChildKind::Run => kinds::RUN,
            ChildKind::Unknown(kind) => kind,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ChildKind::Unknown(_))
    }
}

impl From<String> for ChildKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            kinds::TASK_RUN => ChildKind::TaskRun,
            kinds::RUN => ChildKind::Run,
            _ => ChildKind::Unknown(kind),
        }
    }
}

impl From<&str> for ChildKind {
    fn from(kind: &str) -> Self {
        ChildKind::from(kind.to_string())
    }
}

impl From<ChildKind> for String {
    fn from(kind: ChildKind) -> Self {
        match kind {
            ChildKind::Unknown(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ChildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildReference {
    pub kind: ChildKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pipeline_task_name: String,
}

impl ChildReference {
    pub fn new(kind: impl Into<ChildKind>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            pipeline_task_name: String::new(),
        }
    }

    pub fn with_pipeline_task(mut self, pipeline_task_name: impl Into<String>) -> Self {
        self.pipeline_task_name = pipeline_task_name.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunTaskRunStatus {
    pub pipeline_task_name: String,
    pub status: TaskRunStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunRunStatus {
    pub pipeline_task_name: String,
    pub status: RunStatus,
}

impl PipelineRun {
    pub fn new(metadata: ObjectMeta) -> Self {
        Self {
            metadata,
            status: PipelineRunStatus::default(),
        }
    }

    pub fn with_child(mut self, child: ChildReference) -> Self {
        self.status
            .child_references
            .get_or_insert_with(Vec::new)
            .push(child);
        self
    }

    pub fn child_references(&self) -> &[ChildReference] {
        self.status.child_references.as_deref().unwrap_or_default()
    }
}

impl Resource for PipelineRun {
    const KIND: &'static str = kinds::PIPELINE_RUN;

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}
