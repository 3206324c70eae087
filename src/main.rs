//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use mlb_stats::{
    cli::{Commands, Mlb},
    commands::{leaders::handle_leaders, roster::handle_roster, stats::handle_stats},
    mlb::http::MlbClient,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Mlb::parse();
    let client = MlbClient::new();

    match app.command {
        Commands::Roster { team_code } => handle_roster(&client, &team_code).await?,

        Commands::Leaders {
            stat_code,
            season,
            limit,
        } => handle_leaders(&client, &stat_code, season, limit).await?,

        Commands::Stats {
            player_name,
            season,
        } => handle_stats(&client, &player_name, season).await?,
    }

    Ok(())
}
