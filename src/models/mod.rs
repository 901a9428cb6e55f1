//! # Resource Models
//!
//! Typed views of the execution engine's resources. A [`PipelineRun`] is the
//! top-level execution record; [`TaskRun`] and [`Run`] are the per-step records it
//! spawns, correlated back to it through a shared run-id label.
//!
//! All types serialize in the engine's camelCase wire shape so records read from the
//! cluster can be deserialized directly.

pub mod condition;
pub mod meta;
pub mod pipeline_run;
pub mod run;
pub mod task_run;

pub use condition::Condition;
pub use meta::{ObjectMeta, Resource};
pub use pipeline_run::{
    ChildKind, ChildReference, PipelineRun, PipelineRunRunStatus, PipelineRunStatus,
    PipelineRunTaskRunStatus,
};
pub use run::{Run, RunResult, RunStatus};
pub use task_run::{TaskRun, TaskRunResult, TaskRunStatus};
