use scraper::{ElementRef, Selector};
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::model::StandingRow;
use crate::mpl_scraper::{self, element_text, parse_i32, parse_u32, select_img, select_text};

#[instrument(skip(client))]
pub(crate) async fn get_standings(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<StandingRow>> {
    let url = format!("{base_url}/standings");
    let document = mpl_scraper::get_document(client, &url).await?;
    let standings = parse_standings(&document)?;
    debug!(count = standings.len(), "parsed standings");
    Ok(standings)
}

pub(crate) fn parse_standings(document: &scraper::Html) -> Result<Vec<StandingRow>> {
    let tab_selector = Selector::parse("div#standing-regular-season")?;
    let table_selector = Selector::parse("table.table-standings")?;
    let row_selector = Selector::parse("tbody > tr")?;

    let Some(tab) = document.select(&tab_selector).next() else {
        warn!("regular season standings tab not found");
        return Ok(Vec::new());
    };
    let Some(table) = tab.select(&table_selector).next() else {
        warn!("standings table not found in regular season tab");
        return Ok(Vec::new());
    };

    table
        .select(&row_selector)
        .filter_map(|row| parse_standing_row(&row).transpose())
        .collect()
}

fn parse_standing_row(row: &ElementRef) -> Result<Option<StandingRow>> {
    let td_selector = Selector::parse("td")?;
    let team_info_selector = Selector::parse("td.team-info")?;
    let rank_selector = Selector::parse("div.team-rank")?;
    let logo_selector = Selector::parse("img")?;
    let name_selector = Selector::parse("span.d-lg-block")?;

    // Spacer and ad rows have no team cell.
    let Some(team_info) = row.select(&team_info_selector).next() else {
        return Ok(None);
    };

    let cells: Vec<ElementRef> = row.select(&td_selector).collect();
    let cell = |index: usize| cells.get(index).map(element_text).unwrap_or_default();
    let record = |index: usize| cell(index).replace(' ', "");

    Ok(Some(StandingRow {
        rank: parse_u32(&select_text(&team_info, &rank_selector)),
        team_name: select_text(&team_info, &name_selector),
        team_logo: select_img(&team_info, &logo_selector).unwrap_or_default(),
        match_point: parse_i32(&cell(1)),
        match_wl: record(2),
        net_game_win: parse_i32(&cell(3)),
        game_wl: record(4),
    }))
}
