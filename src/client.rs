use tracing::instrument;

use crate::error::Result;
use crate::model::*;
use crate::mpl_scraper::{self, stats};

/// Environment variable overriding the site root used by [`MplClient::from_env`].
pub const BASE_URL_ENV: &str = "MPL_ID_BASE_URL";

/// The main entry point for scraping id-mpl.com.
///
/// `MplClient` wraps a [`reqwest::Client`] and exposes one method per
/// page section: standings, teams, transfers, statistics, and the schedule.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> mpl_id_scraper::Result<()> {
/// use mpl_id_scraper::MplClient;
///
/// let client = MplClient::new();
/// let standings = client.get_standings().await?;
/// println!("Found {} teams in the standings", standings.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MplClient {
    http: reqwest::Client,
    base_url: String,
}

impl MplClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            base_url: mpl_scraper::BASE_URL.to_string(),
        }
    }

    /// Point the client at a different site root, such as a mirror or a local fixture server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Create a client whose site root is taken from `MPL_ID_BASE_URL` when set.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new().with_base_url(url.trim()),
            _ => Self::new(),
        }
    }

    /// The site root requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the regular season standings table.
    #[instrument(skip(self))]
    pub async fn get_standings(&self) -> Result<Vec<StandingRow>> {
        mpl_scraper::standings::get_standings(&self.http, &self.base_url).await
    }

    /// Fetch the list of participating teams.
    #[instrument(skip(self))]
    pub async fn get_teams(&self) -> Result<Vec<TeamSummary>> {
        mpl_scraper::teams::get_teams(&self.http, &self.base_url).await
    }

    /// Fetch a team's profile, social links and roster. `team_id` is the slug from the team URL.
    #[instrument(skip(self))]
    pub async fn get_team(&self, team_id: &str) -> Result<TeamDetail> {
        mpl_scraper::teams::get_team_detail(&self.http, &self.base_url, team_id).await
    }

    /// Fetch the player transfer list.
    #[instrument(skip(self))]
    pub async fn get_transfers(&self) -> Result<Vec<Transfer>> {
        mpl_scraper::transfers::get_transfers(&self.http, &self.base_url).await
    }

    /// Fetch every table on the statistics page with a single request.
    #[instrument(skip(self))]
    pub async fn get_statistics(&self) -> Result<Statistics> {
        stats::get_statistics(&self.http, &self.base_url).await
    }

    #[instrument(skip(self))]
    pub async fn get_team_stats(&self) -> Result<Vec<TeamStat>> {
        let document = stats::get_statistics_page(&self.http, &self.base_url).await?;
        stats::tables::parse_team_stats(&document)
    }

    #[instrument(skip(self))]
    pub async fn get_player_stats(&self) -> Result<Vec<PlayerStat>> {
        let document = stats::get_statistics_page(&self.http, &self.base_url).await?;
        stats::tables::parse_player_stats(&document)
    }

    #[instrument(skip(self))]
    pub async fn get_hero_stats(&self) -> Result<Vec<HeroStat>> {
        let document = stats::get_statistics_page(&self.http, &self.base_url).await?;
        stats::tables::parse_hero_stats(&document)
    }

    /// Fetch the heroes each player has picked.
    #[instrument(skip(self))]
    pub async fn get_hero_pools(&self) -> Result<Vec<HeroPoolEntry>> {
        let document = stats::get_statistics_page(&self.http, &self.base_url).await?;
        stats::pools::parse_hero_pools(&document)
    }

    /// Fetch the players who have picked each hero.
    #[instrument(skip(self))]
    pub async fn get_player_pools(&self) -> Result<Vec<PlayerPoolEntry>> {
        let document = stats::get_statistics_page(&self.http, &self.base_url).await?;
        stats::pools::parse_player_pools(&document)
    }

    #[instrument(skip(self))]
    pub async fn get_mvp_standings(&self) -> Result<Vec<MvpStanding>> {
        let document = stats::get_statistics_page(&self.http, &self.base_url).await?;
        stats::mvp::parse_mvp_standings(&document)
    }

    /// Fetch the full schedule, keyed by week.
    #[instrument(skip(self))]
    pub async fn get_schedule(&self) -> Result<Schedule> {
        mpl_scraper::schedule::get_schedule(&self.http, &self.base_url).await
    }

    /// Fetch a single schedule week. Returns `None` when the page has no such week.
    #[instrument(skip(self))]
    pub async fn get_schedule_week(&self, week: u32) -> Result<Option<WeekSchedule>> {
        let mut schedule = self.get_schedule().await?;
        Ok(schedule.remove(&WeekLabel(week)))
    }

    /// Fetch the schedule as a list of weeks in ascending week order.
    #[instrument(skip(self))]
    pub async fn get_schedule_weeks(&self) -> Result<Vec<WeekSchedule>> {
        let schedule = self.get_schedule().await?;
        Ok(schedule.into_values().collect())
    }
}

impl Default for MplClient {
    fn default() -> Self {
        Self::new()
    }
}
