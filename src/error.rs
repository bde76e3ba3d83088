use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to the league info endpoint failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("could not decode league info: {0}")]
    Json(#[from] serde_json::Error),

    #[error("league info endpoint answered {status}: {body}")]
    Status { status: StatusCode, body: String },
}
