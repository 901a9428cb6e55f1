//! In-process clientset for TaskRuns and Runs

use super::selector::LabelSelector;
use super::{ListOptions, PipelineClientset};
use crate::error::StoreResult;
use crate::models::{Resource, Run, TaskRun};
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

type Key = (String, String);

/// Clientset holding records in memory, filtered the way the cluster store filters
///
/// List results are owned copies; mutating them never affects stored records.
#[derive(Debug, Default)]
pub struct MemoryClientset {
    task_runs: DashMap<Key, TaskRun>,
    runs: DashMap<Key, Run>,
}

impl MemoryClientset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_task_run(&self, task_run: TaskRun) {
        let key = (task_run.namespace().to_string(), task_run.name().to_string());
        self.task_runs.insert(key, task_run);
    }

    pub fn create_run(&self, run: Run) {
        let key = (run.namespace().to_string(), run.name().to_string());
        self.runs.insert(key, run);
    }

    pub fn delete_task_run(&self, namespace: &str, name: &str) -> Option<TaskRun> {
        self.task_runs
            .remove(&(namespace.to_string(), name.to_string()))
            .map(|(_, task_run)| task_run)
    }

    pub fn delete_run(&self, namespace: &str, name: &str) -> Option<Run> {
        self.runs
            .remove(&(namespace.to_string(), name.to_string()))
            .map(|(_, run)| run)
    }
}

fn select<T: Resource>(
    items: &DashMap<Key, T>,
    namespace: &str,
    options: &ListOptions,
) -> StoreResult<Vec<T>> {
    let selector: LabelSelector = options.label_selector.parse()?;
    let mut selected: Vec<T> = items
        .iter()
        .filter(|entry| entry.key().0 == namespace)
        .filter(|entry| selector.matches(&entry.value().metadata().labels))
        .map(|entry| entry.value().clone())
        .collect();
    selected.sort_by(|a, b| a.name().cmp(b.name()));

    debug!(
        kind = T::KIND,
        namespace = %namespace,
        selector = %selector,
        matched = selected.len(),
        "Listed records"
    );
    Ok(selected)
}

#[async_trait]
impl PipelineClientset for MemoryClientset {
    async fn list_task_runs(
        &self,
        namespace: &str,
        options: &ListOptions,
    ) -> StoreResult<Vec<TaskRun>> {
        select(&self.task_runs, namespace, options)
    }

    async fn list_runs(&self, namespace: &str, options: &ListOptions) -> StoreResult<Vec<Run>> {
        select(&self.runs, namespace, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ObjectMeta, RunStatus, TaskRunStatus};

    fn task_run(namespace: &str, name: &str, run_id: &str) -> TaskRun {
        TaskRun::new(
            ObjectMeta::new(namespace, name).with_label("pipeline/runid", run_id),
            TaskRunStatus::default(),
        )
    }

    #[tokio::test]
    async fn test_list_filters_by_namespace_and_selector() {
        let clientset = MemoryClientset::new();
        clientset.create_task_run(task_run("ns", "b", "run-1"));
        clientset.create_task_run(task_run("ns", "a", "run-1"));
        clientset.create_task_run(task_run("ns", "c", "run-2"));
        clientset.create_task_run(task_run("other", "d", "run-1"));

        let options = ListOptions::with_label_selector("pipeline/runid=run-1");
        let names: Vec<String> = clientset
            .list_task_runs("ns", &options)
            .await
            .unwrap()
            .into_iter()
            .map(|tr| tr.metadata.name)
            .collect();

        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_invalid_selector_is_an_error() {
        let clientset = MemoryClientset::new();
        clientset.create_run(Run::new(ObjectMeta::new("ns", "r"), RunStatus::default()));

        let options = ListOptions::with_label_selector("notaterm");
        assert!(clientset.list_runs("ns", &options).await.is_err());
    }

    #[tokio::test]
    async fn test_delete() {
        let clientset = MemoryClientset::new();
        clientset.create_task_run(task_run("ns", "a", "run-1"));

        assert!(clientset.delete_task_run("ns", "a").is_some());
        assert!(clientset.delete_task_run("ns", "a").is_none());
        assert!(clientset.delete_run("ns", "a").is_none());
    }
}
