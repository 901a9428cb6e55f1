//! # Constants
//!
//! Label keys, resource kind names and defaults shared between the cache,
//! the live-store clients and the reconciler.

/// Label carried by a PipelineRun and every TaskRun/Run it spawned
pub const LABEL_KEY_WORKFLOW_RUN_ID: &str = "pipeline/runid";

/// Label naming the pipeline task a TaskRun/Run was created for
pub const LABEL_KEY_PIPELINE_TASK: &str = "tekton.dev/pipelineTask";

/// Resource kind names as they appear in child references
pub mod kinds {
    pub const PIPELINE_RUN: &str = "PipelineRun";
    pub const TASK_RUN: &str = "TaskRun";
    pub const RUN: &str = "Run";
}

/// Condition types and statuses used by the execution engine
pub mod conditions {
    pub const SUCCEEDED: &str = "Succeeded";
    pub const STATUS_TRUE: &str = "True";
    pub const STATUS_FALSE: &str = "False";
    pub const STATUS_UNKNOWN: &str = "Unknown";
}

/// Default configuration values
pub mod defaults {
    pub const LIST_TIMEOUT_MS: u64 = 30_000;
    pub const CACHE_SYNC_TIMEOUT_MS: u64 = 60_000;
    pub const CACHE_SYNC_POLL_INTERVAL_MS: u64 = 100;
}
