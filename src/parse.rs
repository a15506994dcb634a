//! Extraction from HTML that was fetched by the caller.
//!
//! Each function takes the full page body and never fails on unexpected markup;
//! missing sections produce empty results and are logged at `warn`.

use crate::error::Result;
use crate::model::*;
use crate::mpl_scraper::{schedule, standings, stats, teams, transfers, Html};

/// Rows of the regular season standings table on `/standings`.
pub fn standings(html: &str) -> Result<Vec<StandingRow>> {
    standings::parse_standings(&Html::parse_document(html))
}

/// Team cards on `/teams`.
pub fn teams(html: &str) -> Result<Vec<TeamSummary>> {
    teams::parse_teams(&Html::parse_document(html))
}

/// Header, social links and roster of a `/team/{id}` page.
pub fn team_detail(html: &str) -> Result<TeamDetail> {
    teams::parse_team_detail(&Html::parse_document(html))
}

pub fn transfers(html: &str) -> Result<Vec<Transfer>> {
    transfers::parse_transfers(&Html::parse_document(html))
}

/// Every table on `/statistics`.
pub fn statistics(html: &str) -> Result<Statistics> {
    stats::parse_statistics(&Html::parse_document(html))
}

pub fn team_stats(html: &str) -> Result<Vec<TeamStat>> {
    stats::tables::parse_team_stats(&Html::parse_document(html))
}

pub fn player_stats(html: &str) -> Result<Vec<PlayerStat>> {
    stats::tables::parse_player_stats(&Html::parse_document(html))
}

pub fn hero_stats(html: &str) -> Result<Vec<HeroStat>> {
    stats::tables::parse_hero_stats(&Html::parse_document(html))
}

pub fn hero_pools(html: &str) -> Result<Vec<HeroPoolEntry>> {
    stats::pools::parse_hero_pools(&Html::parse_document(html))
}

pub fn player_pools(html: &str) -> Result<Vec<PlayerPoolEntry>> {
    stats::pools::parse_player_pools(&Html::parse_document(html))
}

pub fn mvp_standings(html: &str) -> Result<Vec<MvpStanding>> {
    stats::mvp::parse_mvp_standings(&Html::parse_document(html))
}

/// All weeks on `/schedule`.
pub fn schedule(html: &str) -> Result<Schedule> {
    schedule::parse_schedule(&Html::parse_document(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_yields_empty_results() {
        assert!(standings("").unwrap().is_empty());
        assert!(teams("").unwrap().is_empty());
        assert!(transfers("").unwrap().is_empty());
        assert!(schedule("").unwrap().is_empty());

        let statistics = statistics("<html><body></body></html>").unwrap();
        assert!(statistics.team_stats.is_empty());
        assert!(statistics.mvp_standings.is_empty());
    }

    #[test]
    fn test_schedule_from_markup() {
        let html = r#"<div id="week-7"><div class="col-6">
            <div class="match-date">Minggu, 5 Oktober 2025</div>
            <div class="match position-relative">
              <div class="team1"><div class="team-name">ONIC</div></div>
              <div class="score">3</div><div class="score">0</div>
              <div class="team2"><div class="team-name">Geek Fam</div></div>
            </div>
        </div></div>"#;

        let weeks = schedule(html).unwrap();
        let week = &weeks[&WeekLabel(7)];
        assert_eq!(week.matches.len(), 1);
        assert_eq!(week.matches[0].team1.score, Some(3));
        assert_eq!(week.matches[0].team2.score, Some(0));
        assert_eq!(week.matches[0].status, MatchStatus::Completed);
    }
}
