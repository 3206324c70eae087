//! Serde models for the MLB Stats API response schema.
//!
//! The schema is the external service's, not ours: fields the display layer
//! might miss are `Option` or defaulted, and the free-form stat object stays
//! as raw JSON (the API mixes strings like ".312" with plain numbers).

use crate::cli::types::PlayerId;
use serde::Deserialize;
use serde_json::{Map, Value};

/// `/teams/{id}/roster` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterResponse {
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub person: Person,
    #[serde(rename = "jerseyNumber", default)]
    pub jersey_number: Option<String>,
    #[serde(default)]
    pub position: Option<PositionRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: PlayerId,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PositionRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// `/stats/leaders` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadersResponse {
    #[serde(rename = "leagueLeaders", default)]
    pub league_leaders: Vec<LeaderCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaderCategory {
    #[serde(default)]
    pub leaders: Vec<Leader>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Leader {
    #[serde(default)]
    pub rank: Option<u32>,
    pub person: Person,
    #[serde(default)]
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// `/people/search` response.
#[derive(Debug, Clone, Deserialize)]
pub struct PeopleResponse {
    #[serde(default)]
    pub people: Vec<Person>,
}

/// `/people/{id}/stats` response.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerStatsResponse {
    #[serde(default)]
    pub stats: Vec<StatGroupSplits>,
}

/// One stat group (hitting or pitching) with its season splits.
#[derive(Debug, Clone, Deserialize)]
pub struct StatGroupSplits {
    #[serde(default)]
    pub group: Option<GroupRef>,
    #[serde(default)]
    pub splits: Vec<StatSplit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupRef {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSplit {
    #[serde(default)]
    pub stat: Map<String, Value>,
}

impl StatSplit {
    /// Render a stat field for display, `N/A` when absent.
    pub fn display_stat(&self, key: &str) -> String {
        match self.stat.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(v) => v.to_string(),
            None => "N/A".to_string(),
        }
    }
}
