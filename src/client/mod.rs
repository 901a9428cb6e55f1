//! # Workflow Client
//!
//! Resolves a PipelineRun from the informer cache and reconciles its status with
//! live TaskRun/Run queries.
//!
//! ```text
//! get(namespace, name)
//!   ├── lister.get()            cache hit or NotFound/Generic
//!   └── reconcile()
//!         ├── classify child references (TaskRun / Run / unknown)
//!         ├── list TaskRuns by run-id label   (only if TaskRun children exist)
//!         ├── list Runs by run-id label       (only if Run children exist)
//!         └── attach maps, wrap as Workflow
//! ```

pub mod context;
pub mod fake;
pub mod traits;
pub mod workflow_client;

pub use context::RequestContext;
pub use fake::FakeWorkflowClient;
pub use traits::WorkflowClientInterface;
pub use workflow_client::{ChildKindPresence, WorkflowClient};
