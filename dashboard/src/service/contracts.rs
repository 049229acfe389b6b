use backend_api::{ContractsApi, Error};
use model::view::contracts::ContractSubmission;
use serde_json::Value;
use std::sync::Arc;
use tracing::trace;

#[derive(Debug)]
pub struct Submissions {
    backend: Arc<dyn ContractsApi>,
}

impl Submissions {
    pub fn new(backend: Arc<dyn ContractsApi>) -> Self { Self { backend } }

    /// Forwards the form payload to the backend. Failures come back to the
    /// caller as-is, the presentation side decides what to show and keeps
    /// its form state on that path.
    pub async fn submit(
        &self,
        submission: &ContractSubmission,
    ) -> Result<Value, Error> {
        trace!("submit: {:?}", submission);

        self.backend.contracts_post(submission).await
    }
}
