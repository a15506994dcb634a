use scraper::{ElementRef, Selector};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::model::{RosterPlayer, SocialMedia, TeamDetail, TeamSummary};
use crate::mpl_scraper::{self, non_empty, select_attr, select_img, select_text};

#[instrument(skip(client))]
pub(crate) async fn get_teams(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<TeamSummary>> {
    let url = format!("{base_url}/teams");
    let document = mpl_scraper::get_document(client, &url).await?;
    let teams = parse_teams(&document)?;
    debug!(count = teams.len(), "parsed teams");
    Ok(teams)
}

pub(crate) fn parse_teams(document: &scraper::Html) -> Result<Vec<TeamSummary>> {
    let container_selector = Selector::parse("div.team-list")?;
    let card_selector = Selector::parse("div.team-card")?;
    let link_selector = Selector::parse("a[href]")?;
    let logo_selector = Selector::parse("img")?;
    let name_selector = Selector::parse(".team-name")?;

    let Some(container) = document.select(&container_selector).next() else {
        warn!("teams grid not found");
        return Ok(Vec::new());
    };

    let teams = container
        .select(&card_selector)
        .filter_map(|card| {
            let team_url = select_attr(&card, &link_selector, "href")?;
            Some(TeamSummary {
                team_url,
                team_logo: select_img(&card, &logo_selector).unwrap_or_default(),
                team_name: select_text(&card, &name_selector),
            })
        })
        .collect();

    Ok(teams)
}

#[instrument(skip(client))]
pub(crate) async fn get_team_detail(
    client: &reqwest::Client,
    base_url: &str,
    team_id: &str,
) -> Result<TeamDetail> {
    let url = format!("{base_url}/team/{team_id}");
    let document = mpl_scraper::get_document(client, &url).await?;
    let team = parse_team_detail(&document)?;
    debug!(
        team_id,
        name = team.team_name.as_deref().unwrap_or_default(),
        roster = team.roster.len(),
        "parsed team detail"
    );
    Ok(team)
}

pub(crate) fn parse_team_detail(document: &scraper::Html) -> Result<TeamDetail> {
    let header_selector = Selector::parse("div.team-header")?;
    let name_selector = Selector::parse(".team-name")?;
    let logo_selector = Selector::parse("img")?;

    let header = document.select(&header_selector).next();
    if header.is_none() {
        warn!("team header not found");
    }

    Ok(TeamDetail {
        team_logo: header.and_then(|h| select_img(&h, &logo_selector)),
        team_name: header.and_then(|h| non_empty(select_text(&h, &name_selector))),
        social_media: parse_social_media(document)?,
        roster: parse_roster(document)?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumIter, strum_macros::AsRefStr)]
#[strum(serialize_all = "lowercase")]
enum SocialPlatform {
    Facebook,
    Instagram,
    Youtube,
}

impl SocialPlatform {
    /// Classify a link by the icon classes it carries, e.g. `fab fa-instagram`.
    fn from_classes<'a>(mut classes: impl Iterator<Item = &'a str>) -> Option<Self> {
        classes.find_map(|class| {
            Self::iter().find(|platform| {
                let name: &str = platform.as_ref();
                class.contains(name)
            })
        })
    }
}

fn parse_social_media(document: &scraper::Html) -> Result<SocialMedia> {
    let link_selector = Selector::parse("div.team-social a[href]")?;
    let icon_selector = Selector::parse("i, span, svg")?;

    let mut social_media = SocialMedia::default();
    for link in document.select(&link_selector) {
        let classes = link
            .value()
            .classes()
            .chain(link.select(&icon_selector).flat_map(|icon| icon.value().classes()));
        let Some(platform) = SocialPlatform::from_classes(classes) else {
            continue;
        };
        let href = link.value().attr("href").map(str::trim).unwrap_or_default();
        if href.is_empty() {
            continue;
        }

        let slot = match platform {
            SocialPlatform::Facebook => &mut social_media.facebook,
            SocialPlatform::Instagram => &mut social_media.instagram,
            SocialPlatform::Youtube => &mut social_media.youtube,
        };
        slot.get_or_insert_with(|| href.to_string());
    }

    Ok(social_media)
}

fn parse_roster(document: &scraper::Html) -> Result<Vec<RosterPlayer>> {
    let section_selector = Selector::parse("[data-section=\"roster\"]")?;
    let card_selector = Selector::parse("div.col-lg-3")?;
    let img_selector = Selector::parse("img")?;
    let name_selector = Selector::parse(".player-name")?;
    let role_selector = Selector::parse(".player-role")?;

    let Some(section) = document.select(&section_selector).next() else {
        warn!("roster section not found");
        return Ok(Vec::new());
    };

    let roster = section
        .select(&card_selector)
        .map(|card: ElementRef| RosterPlayer {
            player_image: select_img(&card, &img_selector),
            player_name: non_empty(select_text(&card, &name_selector)),
            player_role: non_empty(select_text(&card, &role_selector)),
        })
        .collect();

    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAMS_HTML: &str = r#"
        <div class="container">
          <div class="team-list row">
            <div class="team-card col-6">
              <a href="https://id-mpl.com/team/onic">
                <img src="https://cdn.id-mpl.com/onic.png">
                <div class="team-name">ONIC</div>
              </a>
            </div>
            <div class="team-card col-6">
              <img src="https://cdn.id-mpl.com/tbd.png">
              <div class="team-name">TBD</div>
            </div>
            <div class="team-card col-6">
              <a href="https://id-mpl.com/team/evos">
                <img src="https://cdn.id-mpl.com/evos.png">
                <div class="team-name"> EVOS
                  Glory </div>
              </a>
            </div>
          </div>
        </div>
    "#;

    const TEAM_DETAIL_HTML: &str = r#"
        <div class="team-header">
          <img src="https://cdn.id-mpl.com/rrq.png">
          <h1 class="team-name">RRQ Hoshi</h1>
          <div class="team-social">
            <a href="https://instagram.com/teamrrq"><i class="fab fa-instagram"></i></a>
            <a href="https://youtube.com/@teamrrq"><i class="fab fa-youtube"></i></a>
            <a href="https://x.com/teamrrq"><i class="fab fa-x-twitter"></i></a>
          </div>
        </div>
        <section data-section="roster">
          <div class="row">
            <div class="col-lg-3 col-6">
              <img src="https://cdn.id-mpl.com/p/alberttt.png">
              <div class="player-name">Alberttt</div>
              <div class="player-role">Jungler</div>
            </div>
            <div class="col-lg-3 col-6">
              <div class="player-name">Coach Khezcute</div>
            </div>
          </div>
        </section>
    "#;

    #[test]
    fn test_parse_teams() {
        let document = scraper::Html::parse_document(TEAMS_HTML);
        let teams = parse_teams(&document).unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].team_url, "https://id-mpl.com/team/onic");
        assert_eq!(teams[0].team_logo, "https://cdn.id-mpl.com/onic.png");
        assert_eq!(teams[0].team_name, "ONIC");
        assert_eq!(teams[1].team_name, "EVOS Glory");
    }

    #[test]
    fn test_parse_teams_without_grid() {
        let document = scraper::Html::parse_document("<div class=\"team-card\"></div>");
        assert!(parse_teams(&document).unwrap().is_empty());
    }

    #[test]
    fn test_parse_team_detail() {
        let document = scraper::Html::parse_document(TEAM_DETAIL_HTML);
        let team = parse_team_detail(&document).unwrap();

        assert_eq!(team.team_name.as_deref(), Some("RRQ Hoshi"));
        assert_eq!(
            team.team_logo.as_deref(),
            Some("https://cdn.id-mpl.com/rrq.png")
        );
        assert_eq!(
            team.social_media.instagram.as_deref(),
            Some("https://instagram.com/teamrrq")
        );
        assert_eq!(
            team.social_media.youtube.as_deref(),
            Some("https://youtube.com/@teamrrq")
        );
        assert_eq!(team.social_media.facebook, None);

        assert_eq!(team.roster.len(), 2);
        assert_eq!(
            team.roster[0],
            RosterPlayer {
                player_image: Some("https://cdn.id-mpl.com/p/alberttt.png".to_string()),
                player_name: Some("Alberttt".to_string()),
                player_role: Some("Jungler".to_string()),
            }
        );
        assert_eq!(team.roster[1].player_image, None);
        assert_eq!(team.roster[1].player_role, None);
    }

    #[test]
    fn test_social_media_only_instagram() {
        let document = scraper::Html::parse_document(
            r#"<div class="team-social"><a href="https://instagram.com/onic"><i class="fa-brands fa-instagram"></i></a></div>"#,
        );
        let team = parse_team_detail(&document).unwrap();

        assert_eq!(
            team.social_media,
            SocialMedia {
                instagram: Some("https://instagram.com/onic".to_string()),
                ..Default::default()
            }
        );
        let json = serde_json::to_value(&team.social_media).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "instagram": "https://instagram.com/onic" })
        );
    }

    #[test]
    fn test_parse_team_detail_empty_page() {
        let document = scraper::Html::parse_document("<p>Not found</p>");
        let team = parse_team_detail(&document).unwrap();

        assert_eq!(team.team_name, None);
        assert_eq!(team.team_logo, None);
        assert_eq!(team.social_media, SocialMedia::default());
        assert!(team.roster.is_empty());
    }
}
