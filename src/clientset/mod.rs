//! # Live Store Clientset
//!
//! The authoritative, on-demand side of the reconciler: list queries against the
//! cluster store for TaskRuns and Runs, scoped by namespace and a label selector.
//!
//! Implementations are expected to be safe for concurrent use and to apply their own
//! timeout/retry policy; callers layer cancellation on top through
//! [`crate::client::RequestContext`].

pub mod memory;
pub mod selector;

use crate::error::StoreResult;
use crate::models::{Run, TaskRun};
use async_trait::async_trait;

pub use memory::MemoryClientset;
pub use selector::LabelSelector;

/// Options for a list query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Comma-separated `key=value` terms, e.g. `pipeline/runid=run-1`
    pub label_selector: String,
}

impl ListOptions {
    pub fn with_label_selector(selector: impl Into<String>) -> Self {
        Self {
            label_selector: selector.into(),
        }
    }
}

/// List access to the per-step records of pipeline runs
#[async_trait]
pub trait PipelineClientset: Send + Sync {
    async fn list_task_runs(&self, namespace: &str, options: &ListOptions)
        -> StoreResult<Vec<TaskRun>>;

    async fn list_runs(&self, namespace: &str, options: &ListOptions) -> StoreResult<Vec<Run>>;
}
