//! In-process informer backed by a concurrent map
//!
//! Runs are indexed by `(namespace, name)`. Writers (`upsert`, `delete`, `replace`)
//! notify registered handlers after the map has been updated; handlers are invoked
//! outside of any map shard lock.

use super::informer::{PipelineRunInformer, PipelineRunLister, ResourceEventHandler};
use crate::error::{StoreError, StoreResult};
use crate::models::{PipelineRun, Resource};
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

type Key = (String, String);

fn key_for(namespace: &str, name: &str) -> Key {
    (namespace.to_string(), name.to_string())
}

/// Namespace/name index over cached runs
#[derive(Debug, Default)]
pub struct MemoryLister {
    items: DashMap<Key, Arc<PipelineRun>>,
}

impl MemoryLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl PipelineRunLister for MemoryLister {
    fn get(&self, namespace: &str, name: &str) -> StoreResult<Arc<PipelineRun>> {
        self.items
            .get(&key_for(namespace, name))
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| StoreError::not_found(PipelineRun::KIND, namespace, name))
    }

    fn list(&self, namespace: &str) -> StoreResult<Vec<Arc<PipelineRun>>> {
        let mut runs: Vec<Arc<PipelineRun>> = self
            .items
            .iter()
            .filter(|entry| entry.key().0 == namespace)
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        runs.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(runs)
    }
}

/// Informer whose cache is fed directly by the owning process
#[derive(Default)]
pub struct MemoryInformer {
    lister: Arc<MemoryLister>,
    handlers: RwLock<Vec<Arc<dyn ResourceEventHandler<PipelineRun>>>>,
    synced: AtomicBool,
}

impl std::fmt::Debug for MemoryInformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryInformer")
            .field("cached_runs", &self.lister.len())
            .field("handlers", &self.handlers.read().len())
            .field("synced", &self.synced.load(Ordering::Acquire))
            .finish()
    }
}

impl MemoryInformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a run, notifying handlers of an add or an update
    pub fn upsert(&self, run: PipelineRun) {
        let key = key_for(run.namespace(), run.name());
        let new = Arc::new(run);
        let old = self.lister.items.insert(key, Arc::clone(&new));

        debug!(
            namespace = %new.namespace(),
            name = %new.name(),
            update = old.is_some(),
            "Cached PipelineRun"
        );

        let handlers = self.handlers.read().clone();
        match old {
            Some(old) => handlers.iter().for_each(|h| h.on_update(&old, &new)),
            None => handlers.iter().for_each(|h| h.on_add(&new)),
        }
    }

    /// Remove a run, notifying handlers if it was present
    pub fn delete(&self, namespace: &str, name: &str) -> Option<Arc<PipelineRun>> {
        let (_, removed) = self.lister.items.remove(&key_for(namespace, name))?;

        debug!(namespace = %namespace, name = %name, "Evicted PipelineRun");

        let handlers = self.handlers.read().clone();
        handlers.iter().for_each(|h| h.on_delete(&removed));
        Some(removed)
    }

    /// Load the initial listing and mark the cache as synced
    pub fn replace(&self, runs: impl IntoIterator<Item = PipelineRun>) {
        for run in runs {
            self.upsert(run);
        }
        self.mark_synced();
    }

    pub fn mark_synced(&self) {
        self.synced.store(true, Ordering::Release);
    }

    pub fn memory_lister(&self) -> Arc<MemoryLister> {
        Arc::clone(&self.lister)
    }
}

impl PipelineRunInformer for MemoryInformer {
    fn lister(&self) -> Arc<dyn PipelineRunLister> {
        self.lister.clone()
    }

    fn has_synced(&self) -> bool {
        self.synced.load(Ordering::Acquire)
    }

    fn add_event_handler(&self, handler: Arc<dyn ResourceEventHandler<PipelineRun>>) {
        self.handlers.write().push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ResourceEventHandlerFuncs;
    use crate::models::ObjectMeta;
    use std::sync::atomic::AtomicUsize;

    fn run(namespace: &str, name: &str) -> PipelineRun {
        PipelineRun::new(ObjectMeta::new(namespace, name))
    }

    #[test]
    fn test_get_and_not_found() {
        let informer = MemoryInformer::new();
        informer.upsert(run("ns", "run-1"));

        let lister = informer.lister();
        assert_eq!(lister.get("ns", "run-1").unwrap().name(), "run-1");

        let err = lister.get("other", "run-1").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_is_scoped_to_namespace() {
        let informer = MemoryInformer::new();
        informer.upsert(run("ns", "b"));
        informer.upsert(run("ns", "a"));
        informer.upsert(run("other", "c"));

        let names: Vec<String> = informer
            .lister()
            .list("ns")
            .unwrap()
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_handlers_see_add_update_delete() {
        let informer = MemoryInformer::new();
        let adds = Arc::new(AtomicUsize::new(0));
        let updates = Arc::new(AtomicUsize::new(0));
        let deletes = Arc::new(AtomicUsize::new(0));

        let (a, u, d) = (adds.clone(), updates.clone(), deletes.clone());
        informer.add_event_handler(Arc::new(
            ResourceEventHandlerFuncs::<PipelineRun>::new()
                .on_add(move |_| {
                    a.fetch_add(1, Ordering::SeqCst);
                })
                .on_update(move |_, _| {
                    u.fetch_add(1, Ordering::SeqCst);
                })
                .on_delete(move |_| {
                    d.fetch_add(1, Ordering::SeqCst);
                }),
        ));

        informer.upsert(run("ns", "run-1"));
        informer.upsert(run("ns", "run-1"));
        assert!(informer.delete("ns", "run-1").is_some());
        assert!(informer.delete("ns", "run-1").is_none());

        assert_eq!(adds.load(Ordering::SeqCst), 1);
        assert_eq!(updates.load(Ordering::SeqCst), 1);
        assert_eq!(deletes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_replace_marks_synced() {
        let informer = MemoryInformer::new();
        assert!(!informer.has_synced());

        informer.replace(vec![run("ns", "a"), run("ns", "b")]);

        assert!(informer.has_synced());
        assert_eq!(informer.memory_lister().len(), 2);
    }
}
