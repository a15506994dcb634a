use serde::Serialize;

/// A single row of the regular season standings table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingRow {
    pub rank: u32,
    pub team_name: String,
    pub team_logo: String,
    pub match_point: i32,
    /// Match record as shown on the page, e.g. `"10-2"`.
    pub match_wl: String,
    pub net_game_win: i32,
    /// Game record as shown on the page, e.g. `"21-7"`.
    pub game_wl: String,
}

/// Award point ranking of a single player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MvpStanding {
    pub rank: Option<u32>,
    pub player_name: String,
    pub player_logo: String,
    pub team_logo: String,
    pub point: Option<u32>,
}
