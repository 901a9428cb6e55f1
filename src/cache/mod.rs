//! # PipelineRun Cache
//!
//! Boundary traits for the informer that keeps a local, indexed copy of
//! PipelineRuns, plus an in-process implementation.
//!
//! ```text
//! PipelineRunInformer
//!   ├── lister()            -> PipelineRunLister (namespace/name index, read-only)
//!   ├── has_synced()        -> initial list completed?
//!   └── add_event_handler() -> add/update/delete notifications
//! ```
//!
//! Population and freshness belong to whoever drives the informer. Readers only
//! ever receive `Arc<PipelineRun>` snapshots and must clone before modifying.

pub mod informer;
pub mod memory;

pub use informer::{
    PipelineRunInformer, PipelineRunLister, ResourceEventHandler, ResourceEventHandlerFuncs,
};
pub use memory::{MemoryInformer, MemoryLister};
