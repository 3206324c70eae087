//! Error types for the MLB Stats CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MlbError>;

#[derive(Error, Debug)]
pub enum MlbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse season year: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),
}
