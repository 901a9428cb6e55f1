//! # Workflow Client Traits
//!
//! The capability surface consumed by orchestration and API layers. Anything that can
//! resolve a run identity to a reconciled [`Workflow`] implements
//! [`WorkflowClientInterface`], which lets callers swap the live client for
//! [`crate::client::FakeWorkflowClient`] in tests.

use crate::error::Result;
use crate::workflow::Workflow;
use async_trait::async_trait;

#[async_trait]
pub trait WorkflowClientInterface: Send + Sync {
    /// Resolve a run by namespace and name into its merged status view
    ///
    /// # Returns
    ///
    /// * `Ok(Workflow)` - The run with TaskRun/Run statuses attached
    /// * `Err(NotFound)` - The run is not in the cache
    /// * `Err(Generic)` - The cache lookup failed for another reason
    /// * `Err(InternalServer)` - A live TaskRun/Run query failed
    async fn get(&self, namespace: &str, name: &str) -> Result<Workflow>;
}
