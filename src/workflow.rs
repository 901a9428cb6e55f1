//! # Workflow View
//!
//! [`Workflow`] is the external-facing representation handed back by the workflow
//! client: a PipelineRun whose status already carries the merged TaskRun/Run maps,
//! plus the accessors callers use to reason about run state.

use crate::constants::conditions;
use crate::models::{
    Condition, PipelineRun, PipelineRunRunStatus, PipelineRunTaskRunStatus, Resource,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workflow {
    run: PipelineRun,
}

impl Workflow {
    pub fn new(run: PipelineRun) -> Self {
        Self { run }
    }

    pub fn name(&self) -> &str {
        self.run.name()
    }

    pub fn namespace(&self) -> &str {
        self.run.namespace()
    }

    /// Value of the run-correlation label, if the run carries one
    pub fn run_id(&self, label_key: &str) -> Option<&str> {
        self.run.label(label_key)
    }

    /// Reason of the `Succeeded` condition, or an empty string while none is reported
    pub fn condition(&self) -> &str {
        self.succeeded_condition()
            .and_then(|c| c.reason.as_deref())
            .unwrap_or_default()
    }

    /// A run is final once its `Succeeded` condition is no longer `Unknown`
    pub fn is_in_final_state(&self) -> bool {
        self.succeeded_condition()
            .is_some_and(|c| !c.is_unknown())
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.run.status.start_time
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.run.status.completion_time
    }

    pub fn task_run_statuses(&self) -> Option<&BTreeMap<String, PipelineRunTaskRunStatus>> {
        self.run.status.task_runs.as_ref()
    }

    pub fn run_statuses(&self) -> Option<&BTreeMap<String, PipelineRunRunStatus>> {
        self.run.status.runs.as_ref()
    }

    pub fn pipeline_run(&self) -> &PipelineRun {
        &self.run
    }

    pub fn into_inner(self) -> PipelineRun {
        self.run
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.run)
    }

    fn succeeded_condition(&self) -> Option<&Condition> {
        Condition::find(&self.run.status.conditions, conditions::SUCCEEDED)
    }
}

impl From<PipelineRun> for Workflow {
    fn from(run: PipelineRun) -> Self {
        Self::new(run)
    }
}
