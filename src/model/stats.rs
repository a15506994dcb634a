use serde::Serialize;

use super::standings::MvpStanding;

/// Aggregate season statistics of a team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStat {
    pub team_name: String,
    pub team_logo: String,
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub gold: u64,
    pub damage: u64,
    pub lord_kills: u64,
    pub tortoise_kills: u64,
    pub tower_kills: u64,
}

/// Aggregate season statistics of a player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStat {
    pub player_name: String,
    pub player_logo: String,
    pub lane: String,
    pub total_games: u64,
    pub total_kills: u64,
    pub avg_kills: f32,
    pub total_deaths: u64,
    pub avg_deaths: f32,
    pub total_assists: u64,
    pub avg_assists: f32,
    pub avg_kda: f32,
    /// Raw text; the site formats it inconsistently.
    pub kill_participation: String,
}

/// Draft statistics of a hero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroStat {
    pub hero_name: String,
    pub hero_logo: String,
    pub pick: u32,
    pub ban: u32,
    pub win: u32,
    /// Percentage, e.g. `55.5` for `"55.50%"`.
    pub win_rate: f32,
}

/// Heroes played by a single player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroPoolEntry {
    pub player_name: String,
    pub team_logo: String,
    pub lane: String,
    pub total_heroes: u32,
    pub heroes: Vec<HeroPick>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroPick {
    pub hero_logo: String,
    pub pick: u32,
    pub pick_rate: f32,
}

/// Players who picked a single hero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPoolEntry {
    pub hero_name: String,
    pub hero_logo: String,
    pub total_picks: u32,
    pub players: Vec<PlayerPick>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPick {
    pub player_logo: String,
    pub player_info: String,
    pub pick: u32,
    pub pick_rate: f32,
}

/// Every table of the statistics page, extracted from a single fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub team_stats: Vec<TeamStat>,
    pub player_stats: Vec<PlayerStat>,
    pub hero_stats: Vec<HeroStat>,
    pub hero_pools: Vec<HeroPoolEntry>,
    pub player_pools: Vec<PlayerPoolEntry>,
    pub mvp_standings: Vec<MvpStanding>,
}
