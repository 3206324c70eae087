//! MLB Stats API integration: HTTP client and response models.

pub mod http;
pub mod types;
