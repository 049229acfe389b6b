use reqwest::StatusCode;

pub use self::configuration::{ApiUrl, Configuration, DEFAULT_API_URL};
pub use self::contracts_api::{ContractsApi, ContractsApiClient};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Reqwest failed with error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Reqwest middleware failed with error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),
    #[error("Failed to decode the response payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("The API responded {code}: {content}")]
    Api { code: StatusCode, content: String },
}

impl From<(StatusCode, Result<String, reqwest::Error>)> for Error {
    fn from(
        (code, content): (StatusCode, Result<String, reqwest::Error>),
    ) -> Self {
        match content {
            Ok(content) => Error::Api { code, content },
            Err(err) => Error::from(err),
        }
    }
}

pub mod configuration;

mod contracts_api;
