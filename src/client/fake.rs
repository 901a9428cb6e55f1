//! In-memory [`WorkflowClientInterface`] for testing code that consumes workflows

use super::traits::WorkflowClientInterface;
use crate::error::{Result, StoreError, WorkflowClientError};
use crate::models::PipelineRun;
use crate::workflow::Workflow;
use async_trait::async_trait;
use dashmap::DashMap;

/// Serves pre-seeded workflows by namespace and name
#[derive(Debug, Default)]
pub struct FakeWorkflowClient {
    workflows: DashMap<(String, String), Workflow>,
}

impl FakeWorkflowClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a workflow, replacing any existing one with the same identity
    pub fn create(&self, workflow: impl Into<Workflow>) {
        let workflow = workflow.into();
        let key = (workflow.namespace().to_string(), workflow.name().to_string());
        self.workflows.insert(key, workflow);
    }

    pub fn delete(&self, namespace: &str, name: &str) -> Option<Workflow> {
        self.workflows
            .remove(&(namespace.to_string(), name.to_string()))
            .map(|(_, workflow)| workflow)
    }

    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}

#[async_trait]
impl WorkflowClientInterface for FakeWorkflowClient {
    async fn get(&self, namespace: &str, name: &str) -> Result<Workflow> {
        self.workflows
            .get(&(namespace.to_string(), name.to_string()))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                WorkflowClientError::from_lookup(
                    namespace,
                    name,
                    StoreError::not_found(
                        <PipelineRun as crate::models::Resource>::KIND,
                        namespace,
                        name,
                    ),
                )
            })
    }
}
