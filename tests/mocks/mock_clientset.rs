//! Mock Clientset Implementation for Testing
//!
//! Wraps the in-memory clientset with call tracking, per-kind failure injection and
//! an optional response delay for exercising cancellation and deadlines.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use workflow_client::clientset::{ListOptions, MemoryClientset, PipelineClientset};
use workflow_client::models::{Run, TaskRun};
use workflow_client::{StoreError, StoreResult};

/// A single recorded list call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCall {
    pub kind: &'static str,
    pub namespace: String,
    pub label_selector: String,
}

#[derive(Default)]
pub struct MockClientset {
    inner: MemoryClientset,
    task_run_failure: Mutex<Option<StoreError>>,
    run_failure: Mutex<Option<StoreError>>,
    delay: Mutex<Option<Duration>>,
    calls: Mutex<Vec<ListCall>>,
    task_run_calls: AtomicUsize,
    run_calls: AtomicUsize,
}

impl MockClientset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_task_run(&self, task_run: TaskRun) {
        self.inner.create_task_run(task_run);
    }

    pub fn create_run(&self, run: Run) {
        self.inner.create_run(run);
    }

    /// Make every TaskRun list fail with the given error
    pub fn fail_task_runs(&self, error: StoreError) {
        *self.task_run_failure.lock() = Some(error);
    }

    /// Make every Run list fail with the given error
    pub fn fail_runs(&self, error: StoreError) {
        *self.run_failure.lock() = Some(error);
    }

    /// Delay every list call, simulating a slow store
    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock() = Some(delay);
        self
    }

    pub fn task_run_calls(&self) -> usize {
        self.task_run_calls.load(Ordering::SeqCst)
    }

    pub fn run_calls(&self) -> usize {
        self.run_calls.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<ListCall> {
        self.calls.lock().clone()
    }

    fn record(&self, kind: &'static str, namespace: &str, options: &ListOptions) {
        self.calls.lock().push(ListCall {
            kind,
            namespace: namespace.to_string(),
            label_selector: options.label_selector.clone(),
        });
    }

    async fn simulate_latency(&self) {
        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl PipelineClientset for MockClientset {
    async fn list_task_runs(
        &self,
        namespace: &str,
        options: &ListOptions,
    ) -> StoreResult<Vec<TaskRun>> {
        self.task_run_calls.fetch_add(1, Ordering::SeqCst);
        self.record("TaskRun", namespace, options);
        self.simulate_latency().await;

        let failure = self.task_run_failure.lock().clone();
        if let Some(error) = failure {
            return Err(error);
        }
        self.inner.list_task_runs(namespace, options).await
    }

    async fn list_runs(&self, namespace: &str, options: &ListOptions) -> StoreResult<Vec<Run>> {
        self.run_calls.fetch_add(1, Ordering::SeqCst);
        self.record("Run", namespace, options);
        self.simulate_latency().await;

        let failure = self.run_failure.lock().clone();
        if let Some(error) = failure {
            return Err(error);
        }
        self.inner.list_runs(namespace, options).await
    }
}
