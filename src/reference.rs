//! Static lookup tables: team codes and stat categories.
//!
//! Both tables are fixed and exhaustive for the codes this tool supports.
//! Lookups are case-insensitive on the user-supplied code.

use std::fmt;

/// All 30 MLB franchises, public abbreviation to Stats API team id.
pub const TEAM_IDS: &[(&str, u32)] = &[
    ("LAA", 108), // Los Angeles Angels
    ("ARI", 109), // Arizona Diamondbacks
    ("BAL", 110), // Baltimore Orioles
    ("BOS", 111), // Boston Red Sox
    ("CHC", 112), // Chicago Cubs
    ("CIN", 113), // Cincinnati Reds
    ("CLE", 114), // Cleveland Guardians
    ("COL", 115), // Colorado Rockies
    ("DET", 116), // Detroit Tigers
    ("HOU", 117), // Houston Astros
    ("KC", 118),  // Kansas City Royals
    ("LAD", 119), // Los Angeles Dodgers
    ("WSH", 120), // Washington Nationals
    ("NYM", 121), // New York Mets
    ("OAK", 133), // Oakland Athletics
    ("PIT", 134), // Pittsburgh Pirates
    ("SD", 135),  // San Diego Padres
    ("SEA", 136), // Seattle Mariners
    ("SF", 137),  // San Francisco Giants
    ("STL", 138), // St. Louis Cardinals
    ("TB", 139),  // Tampa Bay Rays
    ("TEX", 140), // Texas Rangers
    ("TOR", 141), // Toronto Blue Jays
    ("MIN", 142), // Minnesota Twins
    ("PHI", 143), // Philadelphia Phillies
    ("ATL", 144), // Atlanta Braves
    ("CWS", 145), // Chicago White Sox
    ("MIA", 146), // Miami Marlins
    ("NYY", 147), // New York Yankees
    ("MIL", 158), // Milwaukee Brewers
];

/// Whether a stat category counts for batters or pitchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatGroup {
    Hitting,
    Pitching,
}

impl StatGroup {
    /// The `statGroup` query value the API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatGroup::Hitting => "hitting",
            StatGroup::Pitching => "pitching",
        }
    }
}

impl fmt::Display for StatGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short stat code to the API's `leaderCategories` name, with its group.
pub const STAT_CATEGORIES: &[(&str, &str, StatGroup)] = &[
    ("HR", "homeRuns", StatGroup::Hitting),
    ("AVG", "battingAverage", StatGroup::Hitting),
    ("RBI", "runsBattedIn", StatGroup::Hitting),
    ("H", "hits", StatGroup::Hitting),
    ("SB", "stolenBases", StatGroup::Hitting),
    ("SO", "strikeOuts", StatGroup::Pitching),
    ("ERA", "earnedRunAverage", StatGroup::Pitching),
];

/// Look up a team's numeric id from its 2–3 letter code.
pub fn team_id(code: &str) -> Option<u32> {
    let code = code.to_uppercase();
    TEAM_IDS
        .iter()
        .find(|(abbr, _)| *abbr == code)
        .map(|(_, id)| *id)
}

/// Resolve a short stat code to its API category name and stat group.
pub fn stat_category(code: &str) -> Option<(&'static str, StatGroup)> {
    let code = code.to_uppercase();
    STAT_CATEGORIES
        .iter()
        .find(|(abbr, _, _)| *abbr == code)
        .map(|(_, category, group)| (*category, *group))
}

/// All supported team codes, for error listings.
pub fn team_codes() -> Vec<&'static str> {
    TEAM_IDS.iter().map(|(abbr, _)| *abbr).collect()
}

/// All supported stat codes, for error listings.
pub fn stat_codes() -> Vec<&'static str> {
    STAT_CATEGORIES.iter().map(|(abbr, _, _)| *abbr).collect()
}
