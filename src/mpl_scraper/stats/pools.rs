use scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::model::{HeroPick, HeroPoolEntry, PlayerPick, PlayerPoolEntry};
use crate::mpl_scraper::stats::{name_and_logo, table_rows};
use crate::mpl_scraper::{element_text, parse_pct, parse_u32, select_img, select_text};

pub(crate) fn parse_hero_pools(document: &Html) -> Result<Vec<HeroPoolEntry>> {
    let item_selector = Selector::parse(".hero-pool-list .hero-pool-item")?;
    let img_selector = Selector::parse("img")?;

    table_rows(document, "table-hero-pools", 3)?
        .iter()
        .map(|cells| {
            let (player_name, team_logo) = name_and_logo(&cells[0])?;
            let heroes = cells[3..]
                .iter()
                .flat_map(|cell| cell.select(&item_selector))
                .map(|item| {
                    let (pick, pick_rate) = pick_and_rate(&item)?;
                    Ok(HeroPick {
                        hero_logo: select_img(&item, &img_selector).unwrap_or_default(),
                        pick,
                        pick_rate,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(HeroPoolEntry {
                player_name,
                team_logo,
                lane: element_text(&cells[1]),
                total_heroes: parse_u32(&element_text(&cells[2])),
                heroes,
            })
        })
        .collect()
}

pub(crate) fn parse_player_pools(document: &Html) -> Result<Vec<PlayerPoolEntry>> {
    let item_selector = Selector::parse(".player-pool-list .player-pool-item")?;
    let img_selector = Selector::parse("img")?;
    let info_selector = Selector::parse(".pool-info")?;

    table_rows(document, "table-player-pools", 2)?
        .iter()
        .map(|cells| {
            let (hero_name, hero_logo) = name_and_logo(&cells[0])?;
            let players = cells[2..]
                .iter()
                .flat_map(|cell| cell.select(&item_selector))
                .map(|item| {
                    let (pick, pick_rate) = pick_and_rate(&item)?;
                    Ok(PlayerPick {
                        player_logo: select_img(&item, &img_selector).unwrap_or_default(),
                        player_info: select_text(&item, &info_selector),
                        pick,
                        pick_rate,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(PlayerPoolEntry {
                hero_name,
                hero_logo,
                total_picks: parse_u32(&element_text(&cells[1])),
                players,
            })
        })
        .collect()
}

fn pick_and_rate(item: &ElementRef) -> Result<(u32, f32)> {
    let pick_selector = Selector::parse(".pool-pick")?;
    let rate_selector = Selector::parse(".pool-rate")?;
    Ok((
        parse_u32(&select_text(item, &pick_selector)),
        parse_pct(&select_text(item, &rate_selector)),
    ))
}
