//! Test data builders for PipelineRuns and their per-step records

use workflow_client::models::{
    ChildReference, ObjectMeta, PipelineRun, Run, RunStatus, TaskRun, TaskRunStatus,
};
use workflow_client::{LABEL_KEY_PIPELINE_TASK, LABEL_KEY_WORKFLOW_RUN_ID};

/// Builder for cached PipelineRuns
pub struct PipelineRunBuilder {
    namespace: String,
    name: String,
    run_id: Option<String>,
    children: Vec<ChildReference>,
}

impl PipelineRunBuilder {
    /// Run whose run-id label equals its name
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            run_id: Some(name.to_string()),
            children: Vec::new(),
        }
    }

    pub fn with_run_id(mut self, run_id: &str) -> Self {
        self.run_id = Some(run_id.to_string());
        self
    }

    pub fn without_run_id(mut self) -> Self {
        self.run_id = None;
        self
    }

    pub fn with_child(mut self, kind: &str, name: &str) -> Self {
        self.children.push(ChildReference::new(kind, name));
        self
    }

    pub fn build(self) -> PipelineRun {
        let mut metadata = ObjectMeta::new(&self.namespace, &self.name);
        if let Some(run_id) = self.run_id {
            metadata = metadata.with_label(LABEL_KEY_WORKFLOW_RUN_ID, run_id);
        }
        let mut run = PipelineRun::new(metadata);
        if !self.children.is_empty() {
            run.status.child_references = Some(self.children);
        }
        run
    }
}

fn step_metadata(namespace: &str, name: &str, run_id: &str, pipeline_task: &str) -> ObjectMeta {
    ObjectMeta::new(namespace, name)
        .with_label(LABEL_KEY_WORKFLOW_RUN_ID, run_id)
        .with_label(LABEL_KEY_PIPELINE_TASK, pipeline_task)
}

/// TaskRun labelled for the given run with a `Succeeded` condition
pub fn task_run(namespace: &str, name: &str, run_id: &str, pipeline_task: &str, reason: &str) -> TaskRun {
    let status = if reason == "Running" {
        TaskRunStatus::with_condition("Unknown", reason)
    } else {
        TaskRunStatus::with_condition("True", reason)
    };
    TaskRun::new(step_metadata(namespace, name, run_id, pipeline_task), status)
}

/// Run labelled for the given run with a `Succeeded` condition
pub fn custom_run(namespace: &str, name: &str, run_id: &str, pipeline_task: &str, reason: &str) -> Run {
    Run::new(
        step_metadata(namespace, name, run_id, pipeline_task),
        RunStatus::with_condition("True", reason),
    )
}
