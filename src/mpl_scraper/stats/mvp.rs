use scraper::{Html, Selector};
use tracing::warn;

use crate::error::Result;
use crate::model::MvpStanding;
use crate::mpl_scraper::{own_text, select_img, select_text};

pub(crate) fn parse_mvp_standings(document: &Html) -> Result<Vec<MvpStanding>> {
    let tab_selector = Selector::parse("#standings-mvp")?;
    let card_selector = Selector::parse(".mvp-card")?;
    let rank_selector = Selector::parse(".mvp-rank")?;
    let name_selector = Selector::parse(".player-name")?;
    let player_logo_selector = Selector::parse("img.player-logo")?;
    let team_logo_selector = Selector::parse("img.team-logo")?;
    let point_selector = Selector::parse(".mvp-point")?;

    let Some(tab) = document.select(&tab_selector).next() else {
        warn!("mvp standings tab not found");
        return Ok(Vec::new());
    };

    let standings = tab
        .select(&card_selector)
        .map(|card| {
            let rank = select_text(&card, &rank_selector)
                .trim_start_matches('#')
                .trim()
                .parse()
                .ok();

            // The point element also holds a nested label; only its own text is the value.
            let point = card
                .select(&point_selector)
                .next()
                .map(|e| own_text(&e).replace([',', '.'], ""))
                .and_then(|text| text.parse().ok());
            if point.is_none() {
                warn!("mvp card without a readable point value");
            }

            MvpStanding {
                rank,
                player_name: select_text(&card, &name_selector),
                player_logo: select_img(&card, &player_logo_selector).unwrap_or_default(),
                team_logo: select_img(&card, &team_logo_selector).unwrap_or_default(),
                point,
            }
        })
        .collect();

    Ok(standings)
}
