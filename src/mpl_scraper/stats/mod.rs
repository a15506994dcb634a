//! Parsers for the statistics page. One fetched page backs every table on it.

pub(crate) mod mvp;
pub(crate) mod pools;
pub(crate) mod tables;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::model::Statistics;
use crate::mpl_scraper::{self, element_text, select_img};

pub(crate) async fn get_statistics_page(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Html> {
    let url = format!("{base_url}/statistics");
    mpl_scraper::get_document(client, &url).await
}

#[instrument(skip(client))]
pub(crate) async fn get_statistics(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Statistics> {
    let document = get_statistics_page(client, base_url).await?;
    let statistics = parse_statistics(&document)?;
    debug!(
        teams = statistics.team_stats.len(),
        players = statistics.player_stats.len(),
        heroes = statistics.hero_stats.len(),
        "parsed statistics page"
    );
    Ok(statistics)
}

pub(crate) fn parse_statistics(document: &Html) -> Result<Statistics> {
    Ok(Statistics {
        team_stats: tables::parse_team_stats(document)?,
        player_stats: tables::parse_player_stats(document)?,
        hero_stats: tables::parse_hero_stats(document)?,
        hero_pools: pools::parse_hero_pools(document)?,
        player_pools: pools::parse_player_pools(document)?,
        mvp_standings: mvp::parse_mvp_standings(document)?,
    })
}

/// Body rows of the table with id `table_id`, as cell lists of at least `columns` cells.
///
/// Rows with fewer cells are skipped. A missing table yields no rows.
fn table_rows<'a>(
    document: &'a Html,
    table_id: &str,
    columns: usize,
) -> Result<Vec<Vec<ElementRef<'a>>>> {
    let table_selector = Selector::parse(&format!("table#{table_id}"))?;
    let row_selector = Selector::parse(&format!("table#{table_id} > tbody > tr"))?;

    if document.select(&table_selector).next().is_none() {
        warn!(table_id, "statistics table not found");
        return Ok(Vec::new());
    }

    let rows = document
        .select(&row_selector)
        .filter_map(|row| {
            let cells = child_cells(&row);
            if cells.len() < columns {
                warn!(
                    table_id,
                    found = cells.len(),
                    expected = columns,
                    "skipping short statistics row"
                );
                return None;
            }
            Some(cells)
        })
        .collect();

    Ok(rows)
}

/// The `td` children of a row, leaving out cells of tables nested inside it.
fn child_cells<'a>(row: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "td")
        .collect()
}

/// Name text and image of an entity cell (team, player or hero).
fn name_and_logo(cell: &ElementRef) -> Result<(String, String)> {
    let img_selector = Selector::parse("img")?;
    Ok((
        element_text(cell),
        select_img(cell, &img_selector).unwrap_or_default(),
    ))
}
