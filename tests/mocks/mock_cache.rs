//! Informer whose lister always fails, for exercising the generic error path

use std::sync::Arc;
use workflow_client::cache::{PipelineRunInformer, PipelineRunLister, ResourceEventHandler};
use workflow_client::models::PipelineRun;
use workflow_client::{StoreError, StoreResult};

pub struct FailingLister {
    error: StoreError,
}

impl PipelineRunLister for FailingLister {
    fn get(&self, _namespace: &str, _name: &str) -> StoreResult<Arc<PipelineRun>> {
        Err(self.error.clone())
    }

    fn list(&self, _namespace: &str) -> StoreResult<Vec<Arc<PipelineRun>>> {
        Err(self.error.clone())
    }
}

pub struct FailingInformer {
    lister: Arc<FailingLister>,
}

impl FailingInformer {
    pub fn new(error: StoreError) -> Self {
        Self {
            lister: Arc::new(FailingLister { error }),
        }
    }
}

impl PipelineRunInformer for FailingInformer {
    fn lister(&self) -> Arc<dyn PipelineRunLister> {
        self.lister.clone()
    }

    fn has_synced(&self) -> bool {
        true
    }

    fn add_event_handler(&self, _handler: Arc<dyn ResourceEventHandler<PipelineRun>>) {}
}
