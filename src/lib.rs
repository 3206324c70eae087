//! MLB Stats CLI Library
//!
//! A small Rust client for the public MLB Stats API (`statsapi.mlb.com`),
//! providing team rosters, league leaders, and player season stat lines.
//!
//! ## Features
//!
//! - **Roster Lookup**: Fetch a team's 40-man roster by its 2–3 letter code
//! - **League Leaders**: Top players for a stat category, hitting or pitching
//! - **Player Stats**: Search an active player by name and print their season line
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_stats::{commands::roster::handle_roster, mlb::http::MlbClient};
//!
//! # async fn example() -> mlb_stats::Result<()> {
//! let client = MlbClient::new();
//! handle_roster(&client, "CIN").await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod mlb;
pub mod reference;

// Re-export commonly used types
pub use cli::types::{PlayerId, Season};
pub use error::{MlbError, Result};
pub use reference::StatGroup;
