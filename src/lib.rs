#![allow(clippy::doc_markdown)] // Allow technical terms like PipelineRun, TaskRun in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Workflow Client
//!
//! Read-side status reconciliation for pipeline runs.
//!
//! ## Overview
//!
//! The execution engine splits a run's status across several independently updated
//! records: the PipelineRun itself, plus one TaskRun or Run per step. This crate
//! answers "what is the current status of run E?" by reading the PipelineRun from a
//! local informer cache and merging in live TaskRun/Run statuses fetched by the
//! run-id label they share.
//!
//! ## Module Organization
//!
//! - [`client`] - `WorkflowClient`, request contexts and the fake client
//! - [`cache`] - Informer/lister boundary and an in-process informer
//! - [`clientset`] - Live TaskRun/Run list queries and label selectors
//! - [`models`] - PipelineRun, TaskRun, Run and their statuses
//! - [`workflow`] - The normalized `Workflow` view returned to callers
//! - [`config`] - Configuration loading
//! - [`error`] - Error classification (NotFound / Generic / Internal)
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use workflow_client::cache::MemoryInformer;
//! use workflow_client::client::{WorkflowClient, WorkflowClientInterface};
//! use workflow_client::clientset::MemoryClientset;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let informer = Arc::new(MemoryInformer::new());
//! let clientset = Arc::new(MemoryClientset::new());
//! let client = WorkflowClient::new(informer, clientset);
//!
//! let workflow = client.get("kubeflow", "run-1").await?;
//! if let Some(task_runs) = workflow.task_run_statuses() {
//!     for (name, status) in task_runs {
//!         println!("{name}: {}", status.pipeline_task_name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod clientset;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod workflow;

pub use client::{FakeWorkflowClient, RequestContext, WorkflowClient, WorkflowClientInterface};
pub use config::WorkflowClientConfig;
pub use constants::{LABEL_KEY_PIPELINE_TASK, LABEL_KEY_WORKFLOW_RUN_ID};
pub use error::{CustomCode, Result, StoreError, StoreResult, WorkflowClientError};
pub use workflow::Workflow;
