//! HTTP client for the MLB Stats API.
//!
//! Every operation is a single GET: build the path and query, send, check
//! status, decode JSON. Errors propagate as [`MlbError`]; the command layer
//! decides how to surface them.

use reqwest::Client;

use crate::cli::types::{PlayerId, Season};
use crate::error::Result;
use crate::mlb::types::{LeadersResponse, PeopleResponse, PlayerStatsResponse, RosterResponse};
use crate::reference::StatGroup;


/// Base URL for the public MLB Stats API.
pub const API_BASE_URL: &str = "https://statsapi.mlb.com";

/// The `sportId` query value for MLB.
const MLB_SPORT_ID: &str = "1";

/// Thin client over `statsapi.mlb.com`.
pub struct MlbClient {
    http: Client,
    base_url: String,
}

impl Default for MlbClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MlbClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Client against an alternate base URL. Tests point this at a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the 40-man roster for a team id.
    pub async fn roster(&self, team_id: u32) -> Result<RosterResponse> {
        let url = format!("{}/api/v1/teams/{}/roster", self.base_url, team_id);

        let res = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<RosterResponse>()
            .await?;

        Ok(res)
    }

    /// Fetch league leaders for a stat category and season.
    pub async fn league_leaders(
        &self,
        category: &str,
        season: Season,
        group: StatGroup,
        limit: u32,
    ) -> Result<LeadersResponse> {
        let url = format!("{}/api/v1/stats/leaders", self.base_url);
        let season = season.to_string();
        let limit = limit.to_string();
        let params = [
            ("leaderCategories", category),
            ("season", season.as_str()),
            ("statGroup", group.as_str()),
            ("limit", limit.as_str()),
            ("sportId", MLB_SPORT_ID),
        ];

        let res = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<LeadersResponse>()
            .await?;

        Ok(res)
    }

    /// Search active players by full name, returning the first match's id.
    ///
    /// The API is case-insensitive; the name is lowercased anyway. An empty
    /// result set is `Ok(None)`, distinct from a transport failure.
    pub async fn search_player(&self, full_name: &str) -> Result<Option<PlayerId>> {
        let url = format!("{}/api/v1/people/search", self.base_url);
        let names = full_name.to_lowercase();
        let params = [
            ("names", names.as_str()),
            ("active", "true"),
            ("sportId", MLB_SPORT_ID),
        ];

        let res = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<PeopleResponse>()
            .await?;

        Ok(res.people.first().map(|p| p.id))
    }

    /// Fetch a player's season stats, both hitting and pitching groups.
    pub async fn player_stats(
        &self,
        player_id: PlayerId,
        season: Season,
    ) -> Result<PlayerStatsResponse> {
        let url = format!("{}/api/v1/people/{}/stats", self.base_url, player_id);
        let season = season.to_string();
        let params = [
            ("stats", "season"),
            ("group", "hitting,pitching"),
            ("season", season.as_str()),
            ("sportId", MLB_SPORT_ID),
        ];

        let res = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<PlayerStatsResponse>()
            .await?;

        Ok(res)
    }
}
