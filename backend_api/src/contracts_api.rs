use async_trait::async_trait;
use model::view::contracts::{BidRecord, ContractSubmission};
use reqwest_middleware::ClientWithMiddleware;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{instrument, trace};

use super::{configuration, Error};

#[derive(Clone, Debug)]
pub struct ContractsApiClient {
    configuration: configuration::Configuration,
    client:        Arc<ClientWithMiddleware>,
}

impl ContractsApiClient {
    pub fn new(
        configuration: configuration::Configuration,
        client: Arc<ClientWithMiddleware>,
    ) -> ContractsApiClient {
        ContractsApiClient { configuration, client }
    }
}

#[async_trait]
pub trait ContractsApi: Debug + Sync + Send {
    /// Sends an estimation form payload to the backend. One POST per call,
    /// no retry.
    async fn contracts_post(
        &self,
        submission: &ContractSubmission,
    ) -> Result<Value, Error>;
    /// Retrieves the historical bid records, in server order.
    async fn bids_get(&self) -> Result<Vec<BidRecord>, Error>;
}

#[async_trait]
impl ContractsApi for ContractsApiClient {
    #[instrument(level = "trace", skip(self))]
    async fn contracts_post(
        &self,
        submission: &ContractSubmission,
    ) -> Result<Value, Error> {
        let uri_str = format!("{}/contracts", self.configuration.base_path);
        trace!("Requesting {}", uri_str);

        let response =
            self.client.post(&uri_str).json(submission).send().await?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(Error::from((status, response.text().await)))
        }
    }

    #[instrument(level = "trace", skip(self))]
    async fn bids_get(&self) -> Result<Vec<BidRecord>, Error> {
        let uri_str = format!("{}/bids", self.configuration.base_path);
        trace!("Requesting {}", uri_str);

        let response = self.client.get(&uri_str).send().await?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(Error::from((status, response.text().await)))
        }
    }
}
