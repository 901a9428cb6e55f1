//! # Workflow Client Configuration
//!
//! Settings for the workflow client: which labels correlate TaskRuns/Runs with their
//! PipelineRun, and how long to wait on the live store and on the initial cache sync.
//!
//! Precedence (highest to lowest):
//! 1. `WORKFLOW_CLIENT__*` environment variables
//! 2. Config file (`WORKFLOW_CLIENT_CONFIG`, or `./config/workflow-client.toml`)
//! 3. Default values
//!
//! ```rust,no_run
//! use workflow_client::config::WorkflowClientConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WorkflowClientConfig::load()?;
//! println!("Correlating on label {}", config.run_id_label_key);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use crate::constants::{defaults, LABEL_KEY_PIPELINE_TASK, LABEL_KEY_WORKFLOW_RUN_ID};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use error::{ConfigResult, ConfigurationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowClientConfig {
    /// Label shared by a PipelineRun and its TaskRuns/Runs
    pub run_id_label_key: String,
    /// Label naming the pipeline task a TaskRun/Run belongs to
    pub pipeline_task_label_key: String,
    /// Deadline applied to each live list query; 0 disables it
    pub list_timeout_ms: u64,
    /// How long `wait_for_cache_sync` waits before giving up
    pub cache_sync_timeout_ms: u64,
    pub cache_sync_poll_interval_ms: u64,
}

impl Default for WorkflowClientConfig {
    fn default() -> Self {
        Self {
            run_id_label_key: LABEL_KEY_WORKFLOW_RUN_ID.to_string(),
            pipeline_task_label_key: LABEL_KEY_PIPELINE_TASK.to_string(),
            list_timeout_ms: defaults::LIST_TIMEOUT_MS,
            cache_sync_timeout_ms: defaults::CACHE_SYNC_TIMEOUT_MS,
            cache_sync_poll_interval_ms: defaults::CACHE_SYNC_POLL_INTERVAL_MS,
        }
    }
}

impl WorkflowClientConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.run_id_label_key.trim().is_empty() {
            return Err(ConfigurationError::missing_required_field(
                "run_id_label_key",
                "workflow client",
            ));
        }
        if self.pipeline_task_label_key.trim().is_empty() {
            return Err(ConfigurationError::missing_required_field(
                "pipeline_task_label_key",
                "workflow client",
            ));
        }
        if self.run_id_label_key.contains(['=', ',']) {
            return Err(ConfigurationError::invalid_value(
                "run_id_label_key",
                &self.run_id_label_key,
                "label keys cannot contain '=' or ','",
            ));
        }
        if self.cache_sync_poll_interval_ms == 0 {
            return Err(ConfigurationError::invalid_value(
                "cache_sync_poll_interval_ms",
                self.cache_sync_poll_interval_ms,
                "poll interval must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Deadline for each live list query, if one is configured
    pub fn list_timeout(&self) -> Option<Duration> {
        (self.list_timeout_ms > 0).then(|| Duration::from_millis(self.list_timeout_ms))
    }

    pub fn cache_sync_timeout(&self) -> Duration {
        Duration::from_millis(self.cache_sync_timeout_ms)
    }

    /// Poll period for `wait_for_cache_sync`, never shorter than 1ms
    pub fn cache_sync_poll_interval(&self) -> Duration {
        Duration::from_millis(self.cache_sync_poll_interval_ms.max(1))
    }
}
