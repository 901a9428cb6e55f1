//! Informer and lister traits

use crate::error::StoreResult;
use crate::models::PipelineRun;
use std::fmt;
use std::sync::Arc;

/// Indexed read access to cached PipelineRuns
pub trait PipelineRunLister: Send + Sync {
    /// Look up a run by namespace and name
    ///
    /// Returns `StoreError::NotFound` when the cache holds no such run.
    fn get(&self, namespace: &str, name: &str) -> StoreResult<Arc<PipelineRun>>;

    /// All cached runs in a namespace, sorted by name
    ///
    /// Not used by `WorkflowClient::get`; it is part of the lister surface for
    /// embedders that enumerate runs, such as a list endpoint or a resync loop.
    fn list(&self, namespace: &str) -> StoreResult<Vec<Arc<PipelineRun>>>;
}

/// Receives notifications as the cache changes
pub trait ResourceEventHandler<T>: Send + Sync {
    fn on_add(&self, obj: &T);

    fn on_update(&self, old: &T, new: &T);

    fn on_delete(&self, obj: &T);
}

type AddFn<T> = Box<dyn Fn(&T) + Send + Sync>;
type UpdateFn<T> = Box<dyn Fn(&T, &T) + Send + Sync>;
type DeleteFn<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Closure-backed event handler; unset callbacks are no-ops
pub struct ResourceEventHandlerFuncs<T> {
    add_func: Option<AddFn<T>>,
    update_func: Option<UpdateFn<T>>,
    delete_func: Option<DeleteFn<T>>,
}

impl<T> Default for ResourceEventHandlerFuncs<T> {
    fn default() -> Self {
        Self {
            add_func: None,
            update_func: None,
            delete_func: None,
        }
    }
}

impl<T> fmt::Debug for ResourceEventHandlerFuncs<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceEventHandlerFuncs")
            .field("add_func", &self.add_func.is_some())
            .field("update_func", &self.update_func.is_some())
            .field("delete_func", &self.delete_func.is_some())
            .finish()
    }
}

impl<T> ResourceEventHandlerFuncs<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_add(mut self, f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.add_func = Some(Box::new(f));
        self
    }

    pub fn on_update(mut self, f: impl Fn(&T, &T) + Send + Sync + 'static) -> Self {
        self.update_func = Some(Box::new(f));
        self
    }

    pub fn on_delete(mut self, f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.delete_func = Some(Box::new(f));
        self
    }
}

impl<T> ResourceEventHandler<T> for ResourceEventHandlerFuncs<T> {
    fn on_add(&self, obj: &T) {
        if let Some(f) = &self.add_func {
            f(obj);
        }
    }

    fn on_update(&self, old: &T, new: &T) {
        if let Some(f) = &self.update_func {
            f(old, new);
        }
    }

    fn on_delete(&self, obj: &T) {
        if let Some(f) = &self.delete_func {
            f(obj);
        }
    }
}

/// Shared informer over PipelineRuns
pub trait PipelineRunInformer: Send + Sync {
    fn lister(&self) -> Arc<dyn PipelineRunLister>;

    /// Whether the initial list into the cache has completed
    fn has_synced(&self) -> bool;

    fn add_event_handler(&self, handler: Arc<dyn ResourceEventHandler<PipelineRun>>);
}
