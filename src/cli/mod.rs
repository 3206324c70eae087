//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::Season;

#[derive(Debug, Parser)]
#[clap(name = "mlb-stats", about = "A CLI tool to fetch MLB stats")]
pub struct Mlb {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get a team's 40-man roster.
    Roster {
        /// The team's code (e.g. CIN, NYY, LAD).
        team_code: String,
    },

    /// Get league leaders for a stat.
    Leaders {
        /// The stat to get leaders for (e.g. HR, AVG, SO).
        stat_code: String,

        /// Season year (e.g. 2024).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Number of leaders to show.
        #[clap(long, short, default_value_t = 10)]
        limit: u32,
    },

    /// Get a player's season stats.
    ///
    /// Searches active players by full name, then fetches both hitting and
    /// pitching lines for the season.
    Stats {
        /// The full name of the player.
        player_name: String,

        /// Season year (e.g. 2024).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,
    },
}
