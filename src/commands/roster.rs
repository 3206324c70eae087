//! Roster command implementation.

use crate::mlb::http::MlbClient;
use crate::mlb::types::RosterResponse;
use crate::reference::{team_codes, team_id};
use crate::Result;

/// Handle the roster command.
pub async fn handle_roster(client: &MlbClient, team_code: &str) -> Result<()> {
    let code = team_code.to_uppercase();
    let Some(team_id) = team_id(&code) else {
        println!("Error: Team code '{team_code}' not found.");
        println!("Known codes: {:?}", team_codes());
        return Ok(());
    };

    println!("Fetching roster for {code} (ID: {team_id})...");

    let roster = match client.roster(team_id).await {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error fetching roster from API: {e}");
            return Ok(());
        }
    };

    println!("--- 40-Man Roster ---");
    for line in render_roster(&roster) {
        println!("{line}");
    }

    Ok(())
}

/// One line per roster entry: jersey number, name, position.
pub fn render_roster(roster: &RosterResponse) -> Vec<String> {
    roster
        .roster
        .iter()
        .map(|entry| {
            let jersey = entry.jersey_number.as_deref().unwrap_or("N/A");
            let name = entry
                .person
                .full_name
                .as_deref()
                .unwrap_or("Unknown Player");
            let position = entry
                .position
                .as_ref()
                .and_then(|p| p.name.as_deref())
                .unwrap_or("Unknown");
            format!("  #{jersey:<3} - {name:<25} ({position})")
        })
        .collect()
}
