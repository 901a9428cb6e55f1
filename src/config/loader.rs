//! Configuration loading
//!
//! Layers defaults, an optional config file and environment overrides using the
//! `config` crate, then validates the result.

use super::error::{ConfigResult, ConfigurationError};
use super::WorkflowClientConfig;
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "WORKFLOW_CLIENT_CONFIG";

/// Prefix for per-field overrides, e.g. `WORKFLOW_CLIENT__LIST_TIMEOUT_MS=5000`
pub const ENV_PREFIX: &str = "WORKFLOW_CLIENT";

const DEFAULT_CONFIG_PATH: &str = "config/workflow-client.toml";

impl WorkflowClientConfig {
    /// Load configuration from the default file location and the environment
    pub fn load() -> ConfigResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::build(Some(Path::new(&path)), true, ENV_PREFIX),
            Err(_) => Self::build(Some(Path::new(DEFAULT_CONFIG_PATH)), false, ENV_PREFIX),
        }
    }

    /// Load configuration from a specific file, still honoring environment overrides
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        Self::build(Some(path), true, ENV_PREFIX)
    }

    pub fn default_config_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_PATH)
    }

    fn build(file: Option<&Path>, required: bool, env_prefix: &str) -> ConfigResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = file {
            debug!(
                path = %path.display(),
                required = required,
                "Adding workflow client config file source"
            );
            builder = builder.add_source(File::from(path).required(required));
        }

        builder = builder.add_source(
            Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let source_name = file
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "environment".to_string());

        let config: WorkflowClientConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ConfigurationError::load_failed(&source_name, e))?;

        config.validate()?;

        debug!(
            run_id_label_key = %config.run_id_label_key,
            list_timeout_ms = config.list_timeout_ms,
            "Workflow client configuration loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = toml_file("run_id_label_key = \"example.com/run\"\nlist_timeout_ms = 5000\n");

        let config =
            WorkflowClientConfig::build(Some(file.path()), true, "WFC_TEST_FILE_ONLY").unwrap();

        assert_eq!(config.run_id_label_key, "example.com/run");
        assert_eq!(config.list_timeout_ms, 5000);
        assert_eq!(config.pipeline_task_label_key, "tekton.dev/pipelineTask");
    }

    #[test]
    fn test_missing_optional_file_uses_defaults() {
        let config = WorkflowClientConfig::build(
            Some(Path::new("does/not/exist.toml")),
            false,
            "WFC_TEST_MISSING",
        )
        .unwrap();
        assert_eq!(config, WorkflowClientConfig::default());
    }

    #[test]
    fn test_missing_required_file_fails() {
        let err = WorkflowClientConfig::build(
            Some(Path::new("does/not/exist.toml")),
            true,
            "WFC_TEST_REQUIRED",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::LoadFailed { .. }));
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = toml_file("list_timeout_ms = 5000\n");
        std::env::set_var("WFC_TEST_ENV__LIST_TIMEOUT_MS", "750");

        let config = WorkflowClientConfig::build(Some(file.path()), true, "WFC_TEST_ENV").unwrap();
        std::env::remove_var("WFC_TEST_ENV__LIST_TIMEOUT_MS");

        assert_eq!(config.list_timeout_ms, 750);
    }

    #[test]
    fn test_invalid_file_values_fail_validation() {
        let file = toml_file("cache_sync_poll_interval_ms = 0\n");
        let err =
            WorkflowClientConfig::build(Some(file.path()), true, "WFC_TEST_INVALID").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue { .. }));
    }
}
