//! League leaders command implementation.

use crate::cli::types::Season;
use crate::mlb::http::MlbClient;
use crate::mlb::types::Leader;
use crate::reference::{stat_category, stat_codes};
use crate::Result;

/// Handle the leaders command.
pub async fn handle_leaders(
    client: &MlbClient,
    stat_code: &str,
    season: Season,
    limit: u32,
) -> Result<()> {
    let code = stat_code.to_uppercase();
    let Some((category, group)) = stat_category(&code) else {
        println!("Error: Unknown stat category '{code}'");
        println!("Known codes: {:?}", stat_codes());
        return Ok(());
    };

    println!("Fetching {group} leaders for {code} in {season}...");

    let data = match client.league_leaders(category, season, group, limit).await {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error fetching leaders from API: {e}");
            return Ok(());
        }
    };

    // The response nests leaders one level down, one category per request.
    let leaders = data
        .league_leaders
        .first()
        .map(|category| category.leaders.as_slice())
        .unwrap_or_default();

    if leaders.is_empty() {
        println!("No leaders found for {code} in {season}.");
        return Ok(());
    }

    println!("--- Top {limit} {group} leaders for {code} ({season}) ---");
    for line in render_leaders(leaders) {
        println!("{line}");
    }

    Ok(())
}

/// One line per leader: rank, name, team, stat value.
pub fn render_leaders(leaders: &[Leader]) -> Vec<String> {
    leaders
        .iter()
        .map(|leader| {
            let rank = leader
                .rank
                .map(|r| r.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            let name = leader.person.full_name.as_deref().unwrap_or("Unknown");
            let team = leader
                .team
                .as_ref()
                .and_then(|t| t.name.as_deref())
                .unwrap_or("N/A");
            let value = leader.value.as_deref().unwrap_or("N/A");
            format!("  {rank}. {name:<25} ({team}) - {value}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_rank_name_team_and_value() {
        let leaders: Vec<Leader> = serde_json::from_value(json!([
            {
                "rank": 1,
                "person": {"id": 592450, "fullName": "Aaron Judge"},
                "team": {"name": "New York Yankees"},
                "value": "58"
            }
        ]))
        .unwrap();

        let lines = render_leaders(&leaders);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("  1. "));
        assert!(lines[0].contains("Aaron Judge"));
        assert!(lines[0].contains("(New York Yankees) - 58"));
    }

    #[test]
    fn missing_team_and_value_render_placeholders() {
        let leaders: Vec<Leader> =
            serde_json::from_value(json!([{"person": {"id": 1}}])).unwrap();
        let lines = render_leaders(&leaders);
        assert!(lines[0].contains("N/A."));
        assert!(lines[0].contains("Unknown"));
        assert!(lines[0].contains("(N/A) - N/A"));
    }
}
