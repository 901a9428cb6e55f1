//! Cache-backed workflow client with live status reconciliation
//!
//! The cached PipelineRun is only ever read. Reconciliation happens on an owned clone,
//! so concurrent callers sharing the cache never observe each other's merged maps.
//! Both live queries run sequentially and any failure aborts the whole call: callers
//! get either a fully merged view or an error, never a partial one.

use super::context::RequestContext;
use super::traits::WorkflowClientInterface;
use crate::cache::{PipelineRunInformer, ResourceEventHandler};
use crate::clientset::{LabelSelector, ListOptions, PipelineClientset};
use crate::config::WorkflowClientConfig;
use crate::error::{Result, WorkflowClientError};
use crate::logging;
use crate::models::{
    ChildKind, ChildReference, PipelineRun, PipelineRunRunStatus, PipelineRunTaskRunStatus,
    Resource,
};
use crate::workflow::Workflow;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, trace, warn};

const FETCH_TASK_RUNS_FAILED: &str = "can't fetch taskruns";
const FETCH_RUNS_FAILED: &str = "can't fetch runs";

/// Which supported child kinds a run references
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChildKindPresence {
    pub task_runs: bool,
    pub runs: bool,
}

impl ChildKindPresence {
    /// Scan child references once; unknown kinds are skipped
    pub fn classify(children: &[ChildReference]) -> Self {
        let mut presence = Self::default();
        for child in children {
            match &child.kind {
                ChildKind::TaskRun => presence.task_runs = true,
                ChildKind::Run => presence.runs = true,
                ChildKind::Unknown(kind) => {
                    trace!(kind = %kind, child = %child.name, "Ignoring child reference of unknown kind");
                }
            }
        }
        presence
    }

    pub fn any(&self) -> bool {
        self.task_runs || self.runs
    }
}

/// Client that reads PipelineRuns from an informer cache and merges in live
/// TaskRun/Run statuses
pub struct WorkflowClient {
    informer: Arc<dyn PipelineRunInformer>,
    clientset: Arc<dyn PipelineClientset>,
    config: WorkflowClientConfig,
}

impl std::fmt::Debug for WorkflowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowClient")
            .field("informer", &"<Arc<dyn PipelineRunInformer>>")
            .field("clientset", &"<Arc<dyn PipelineClientset>>")
            .field("config", &self.config)
            .finish()
    }
}

impl WorkflowClient {
    pub fn new(
        informer: Arc<dyn PipelineRunInformer>,
        clientset: Arc<dyn PipelineClientset>,
    ) -> Self {
        Self::with_config(informer, clientset, WorkflowClientConfig::default())
    }

    pub fn with_config(
        informer: Arc<dyn PipelineRunInformer>,
        clientset: Arc<dyn PipelineClientset>,
        config: WorkflowClientConfig,
    ) -> Self {
        Self {
            informer,
            clientset,
            config,
        }
    }

    pub fn config(&self) -> &WorkflowClientConfig {
        &self.config
    }

    /// Register a handler for cache add/update/delete notifications
    pub fn add_event_handler(&self, handler: Arc<dyn ResourceEventHandler<PipelineRun>>) {
        self.informer.add_event_handler(handler);
    }

    /// Whether the informer has completed its initial sync
    pub fn has_synced(&self) -> bool {
        self.informer.has_synced()
    }

    /// Poll `has_synced` until it reports true or the configured timeout elapses
    pub async fn wait_for_cache_sync(&self) -> bool {
        self.wait_for_cache_sync_within(self.config.cache_sync_timeout())
            .await
    }

    pub async fn wait_for_cache_sync_within(&self, timeout: Duration) -> bool {
        let started = Instant::now();
        let mut interval = tokio::time::interval(self.config.cache_sync_poll_interval());

        loop {
            interval.tick().await;
            if self.has_synced() {
                info!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "PipelineRun cache synced"
                );
                return true;
            }
            if started.elapsed() >= timeout {
                warn!(
                    timeout_ms = timeout.as_millis() as u64,
                    "Timed out waiting for PipelineRun cache to sync"
                );
                return false;
            }
        }
    }

    /// Resolve a run with a caller-supplied cancellation/deadline context
    pub async fn get_with_context(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        name: &str,
    ) -> Result<Workflow> {
        let cached = self
            .informer
            .lister()
            .get(namespace, name)
            .map_err(|e| {
                debug!(namespace = %namespace, name = %name, error = %e, "PipelineRun cache lookup failed");
                WorkflowClientError::from_lookup(namespace, name, e)
            })?;

        let workflow = self.reconcile(ctx, (*cached).clone()).await?;

        logging::log_workflow_operation("get", namespace, name, "reconciled", None);
        Ok(workflow)
    }

    /// Attach live TaskRun/Run statuses to a run and wrap it as a [`Workflow`]
    ///
    /// Maps are only set for kinds the run actually references; a kind with no
    /// children keeps `None` rather than an empty map.
    pub async fn reconcile(&self, ctx: &RequestContext, mut run: PipelineRun) -> Result<Workflow> {
        let presence = ChildKindPresence::classify(run.child_references());
        if !presence.any() {
            return Ok(Workflow::new(run));
        }

        let run_id = run.label(&self.config.run_id_label_key).unwrap_or_default();
        if run_id.is_empty() {
            warn!(
                namespace = %run.namespace(),
                name = %run.name(),
                label = %self.config.run_id_label_key,
                "PipelineRun has child references but no run-id label"
            );
        }
        let options = ListOptions::with_label_selector(
            LabelSelector::equals(self.config.run_id_label_key.as_str(), run_id).to_string(),
        );
        let namespace = run.namespace().to_string();

        // An error from either fetch drops `run`, so no partially merged view escapes
        if presence.task_runs {
            run.status.task_runs =
                Some(self.fetch_task_run_statuses(ctx, &namespace, &options).await?);
        }
        if presence.runs {
            run.status.runs = Some(self.fetch_run_statuses(ctx, &namespace, &options).await?);
        }
        Ok(Workflow::new(run))
    }

    async fn fetch_task_run_statuses(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        options: &ListOptions,
    ) -> Result<BTreeMap<String, PipelineRunTaskRunStatus>> {
        let task_runs = ctx
            .bounded_by(self.config.list_timeout())
            .run(self.clientset.list_task_runs(namespace, options))
            .await
            .map_err(|e| {
                logging::log_error(
                    "workflow_client",
                    "list_task_runs",
                    &e.to_string(),
                    Some(options.label_selector.as_str()),
                );
                WorkflowClientError::internal_server(e, FETCH_TASK_RUNS_FAILED)
            })?;

        debug!(
            namespace = %namespace,
            selector = %options.label_selector,
            count = task_runs.len(),
            "Fetched TaskRuns"
        );

        // The view must own its statuses; query results are not retained
        Ok(task_runs
            .iter()
            .map(|task_run| {
                (
                    task_run.name().to_string(),
                    PipelineRunTaskRunStatus {
                        pipeline_task_name: self.pipeline_task_of(task_run),
                        status: task_run.status.clone(),
                    },
                )
            })
            .collect())
    }

    async fn fetch_run_statuses(
        &self,
        ctx: &RequestContext,
        namespace: &str,
        options: &ListOptions,
    ) -> Result<BTreeMap<String, PipelineRunRunStatus>> {
        let runs = ctx
            .bounded_by(self.config.list_timeout())
            .run(self.clientset.list_runs(namespace, options))
            .await
            .map_err(|e| {
                logging::log_error(
                    "workflow_client",
                    "list_runs",
                    &e.to_string(),
                    Some(options.label_selector.as_str()),
                );
                WorkflowClientError::internal_server(e, FETCH_RUNS_FAILED)
            })?;

        debug!(
            namespace = %namespace,
            selector = %options.label_selector,
            count = runs.len(),
            "Fetched Runs"
        );

        Ok(runs
            .iter()
            .map(|run| {
                (
                    run.name().to_string(),
                    PipelineRunRunStatus {
                        pipeline_task_name: self.pipeline_task_of(run),
                        status: run.status.clone(),
                    },
                )
            })
            .collect())
    }

    fn pipeline_task_of<R: Resource>(&self, record: &R) -> String {
        record
            .label(&self.config.pipeline_task_label_key)
            .unwrap_or_default()
            .to_string()
    }
}

#[async_trait]
impl WorkflowClientInterface for WorkflowClient {
    async fn get(&self, namespace: &str, name: &str) -> Result<Workflow> {
        self.get_with_context(&RequestContext::background(), namespace, name)
            .await
    }
}
