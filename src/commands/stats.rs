//! Player season stats command implementation.
//!
//! Two sequential round trips: resolve the player's id from a name search,
//! then fetch the season line for both stat groups.

use crate::cli::types::Season;
use crate::mlb::http::MlbClient;
use crate::mlb::types::PlayerStatsResponse;
use crate::Result;

/// Handle the stats command.
pub async fn handle_stats(client: &MlbClient, player_name: &str, season: Season) -> Result<()> {
    println!("Searching for active player: '{player_name}'...");

    let player_id = match client.search_player(player_name).await {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Error searching for player: {e}");
            return Ok(());
        }
    };

    let Some(player_id) = player_id else {
        println!("Error: Could not find an active player named '{player_name}'.");
        return Ok(());
    };

    println!("Found player ID: {player_id}. Fetching stats for {season}...");

    let stats = match client.player_stats(player_id, season).await {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error fetching player stats: {e}");
            return Ok(());
        }
    };

    if stats.stats.is_empty() {
        println!("No stats found for {player_name} in {season}.");
        return Ok(());
    }

    println!("--- Stats for {player_name} ({season}) ---");

    let lines = render_stat_groups(&stats);
    if lines.is_empty() {
        println!("No hitting or pitching stats found for {player_name} in {season}.");
        return Ok(());
    }
    for line in lines {
        println!("{line}");
    }

    Ok(())
}

/// Render every stat group that has season splits. Hitting and pitching get
/// fixed two-line summaries; an empty result means no group had data.
pub fn render_stat_groups(stats: &PlayerStatsResponse) -> Vec<String> {
    let mut lines = Vec::new();

    for group in &stats.stats {
        let Some(split) = group.splits.first() else {
            continue;
        };
        let group_name = group
            .group
            .as_ref()
            .and_then(|g| g.display_name.as_deref())
            .unwrap_or("Unknown");

        lines.push(format!("--- {group_name} ---"));

        match group_name {
            "hitting" => {
                lines.push(format!(
                    "  AVG: {} | HR: {} | RBI: {}",
                    split.display_stat("avg"),
                    split.display_stat("homeRuns"),
                    split.display_stat("rbi"),
                ));
                lines.push(format!(
                    "  Games: {} | Hits: {} | SB: {}",
                    split.display_stat("gamesPlayed"),
                    split.display_stat("hits"),
                    split.display_stat("stolenBases"),
                ));
            }
            "pitching" => {
                lines.push(format!(
                    "  W-L: {}-{} | ERA: {} | SO: {}",
                    split.display_stat("wins"),
                    split.display_stat("losses"),
                    split.display_stat("era"),
                    split.display_stat("strikeOuts"),
                ));
                lines.push(format!(
                    "  Games: {} | IP: {} | WHIP: {}",
                    split.display_stat("gamesPitched"),
                    split.display_stat("inningsPitched"),
                    split.display_stat("whip"),
                ));
            }
            _ => {}
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_hitting_and_pitching_lines() {
        let stats: PlayerStatsResponse = serde_json::from_value(json!({
            "stats": [
                {
                    "group": {"displayName": "hitting"},
                    "splits": [{"stat": {
                        "avg": ".310", "homeRuns": 54, "rbi": 130,
                        "gamesPlayed": 159, "hits": 197, "stolenBases": 59
                    }}]
                },
                {
                    "group": {"displayName": "pitching"},
                    "splits": [{"stat": {
                        "wins": 10, "losses": 5, "era": "2.77", "strikeOuts": 167,
                        "gamesPitched": 23, "inningsPitched": "132.0", "whip": "1.04"
                    }}]
                }
            ]
        }))
        .unwrap();

        let lines = render_stat_groups(&stats);
        assert_eq!(lines[0], "--- hitting ---");
        assert_eq!(lines[1], "  AVG: .310 | HR: 54 | RBI: 130");
        assert_eq!(lines[2], "  Games: 159 | Hits: 197 | SB: 59");
        assert_eq!(lines[3], "--- pitching ---");
        assert_eq!(lines[4], "  W-L: 10-5 | ERA: 2.77 | SO: 167");
        assert_eq!(lines[5], "  Games: 23 | IP: 132.0 | WHIP: 1.04");
    }

    #[test]
    fn groups_without_splits_render_nothing() {
        let stats: PlayerStatsResponse = serde_json::from_value(json!({
            "stats": [
                {"group": {"displayName": "hitting"}, "splits": []}
            ]
        }))
        .unwrap();

        assert!(render_stat_groups(&stats).is_empty());
    }

    #[test]
    fn missing_stat_fields_render_na() {
        let stats: PlayerStatsResponse = serde_json::from_value(json!({
            "stats": [
                {
                    "group": {"displayName": "hitting"},
                    "splits": [{"stat": {"avg": ".250"}}]
                }
            ]
        }))
        .unwrap();

        let lines = render_stat_groups(&stats);
        assert_eq!(lines[1], "  AVG: .250 | HR: N/A | RBI: N/A");
    }
}
