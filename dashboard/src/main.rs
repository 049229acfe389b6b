use anyhow::Context;
use backend_api::{ApiUrl, Configuration, ContractsApiClient, DEFAULT_API_URL};
use helper::env_var;
use helper::init::{get_subscriber, init_subscriber};
use model::domain::win_rate::WinRateSplit;
use model::view::contracts::ContractSubmission;
use reqwest_middleware::ClientBuilder;
use std::env::var;
use std::sync::Arc;
use tracing::{debug, info};

mod service;

env_var!(API_BASE_URL);
env_var!(SUBMIT_PAYLOAD);

/// The form side guarantees non-empty fields before anything is sent, so
/// the same check applies to payloads arriving from the env.
fn ensure_filled(submission: &ContractSubmission) -> anyhow::Result<()> {
    for (field, value) in [
        ("contractSize", &submission.contract_size),
        ("distance", &submission.distance),
        ("projectSize", &submission.project_size),
        ("projectType", &submission.project_type),
        ("otherContractors", &submission.other_contractors),
    ] {
        anyhow::ensure!(!value.is_empty(), "{} must not be empty", field);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("dashboard".into(), "info".into());
    init_subscriber(subscriber);

    debug!("Tracing initialized.");

    let base_path = ApiUrl::try_new(
        var(API_BASE_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
    )
    .context("API_BASE_URL is not a valid http(s) url")?;

    let http_client =
        Arc::new(ClientBuilder::new(reqwest::Client::new()).build());
    let backend = Arc::new(ContractsApiClient::new(
        Configuration::new(base_path),
        http_client,
    ));

    if let Ok(raw) = var(SUBMIT_PAYLOAD) {
        let submission: ContractSubmission = serde_json::from_str(&raw)
            .context("SUBMIT_PAYLOAD is not a valid contract submission")?;
        ensure_filled(&submission)?;

        let submissions =
            service::contracts::Submissions::new(backend.clone());
        let reply = submissions
            .submit(&submission)
            .await
            .context("The backend refused the contract submission")?;
        info!("Submission accepted: {}", reply);
    }

    let bid_board = service::bids::BidBoard::new(backend);
    let bids = bid_board.fetch_bids().await;

    for bid in &bids {
        info!("{}: {}%", bid.name, bid.win_percentage);
    }
    let split = WinRateSplit::from_records(&bids);
    info!(
        "Overall bid win outlook: {}% won, {}% remaining",
        split.win, split.remaining
    );

    Ok(())
}
