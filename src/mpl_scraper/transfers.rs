use scraper::{ElementRef, Selector};
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::model::{Transfer, TransferTeam};
use crate::mpl_scraper::{self, element_text, has_inline_style, non_empty, select_img, select_text};

/// Inline style of the player name inside a transfer card.
fn is_player_name(element: &ElementRef) -> bool {
    has_inline_style(element, "font-weight: 600")
}

/// Inline style of the player role inside a transfer card.
fn is_player_role(element: &ElementRef) -> bool {
    has_inline_style(element, "font-size: 12px")
}

#[instrument(skip(client))]
pub(crate) async fn get_transfers(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<Transfer>> {
    let url = format!("{base_url}/transfer");
    let document = mpl_scraper::get_document(client, &url).await?;
    let transfers = parse_transfers(&document)?;
    debug!(count = transfers.len(), "parsed transfers");
    Ok(transfers)
}

pub(crate) fn parse_transfers(document: &scraper::Html) -> Result<Vec<Transfer>> {
    let card_selector = Selector::parse("div.transfer-card")?;
    document
        .select(&card_selector)
        .map(|card| parse_transfer_card(&card))
        .collect()
}

fn parse_transfer_card(card: &ElementRef) -> Result<Transfer> {
    let date_selector = Selector::parse(".transfer-date")?;
    let player_selector = Selector::parse(".transfer-player")?;
    let styled_selector = Selector::parse("[style]")?;
    let team_selector = Selector::parse(".transfer-team")?;
    let logo_selector = Selector::parse("img")?;

    let player = card.select(&player_selector).next();
    let styled_text = |predicate: fn(&ElementRef) -> bool| {
        player.and_then(|p| {
            p.select(&styled_selector)
                .find(|e| predicate(e))
                .and_then(|e| non_empty(element_text(&e)))
        })
    };

    let mut teams = card.select(&team_selector).map(|column| TransferTeam {
        name: non_empty(element_text(&column)),
        logo: select_img(&column, &logo_selector),
    });
    let team_from = teams.next().unwrap_or_default();
    let team_to = teams.next().unwrap_or_else(|| {
        warn!("transfer card has fewer than two team columns");
        TransferTeam::default()
    });

    Ok(Transfer {
        transfer_date: non_empty(select_text(card, &date_selector)),
        player_name: styled_text(is_player_name),
        player_role: styled_text(is_player_role),
        team_from,
        team_to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSFERS_HTML: &str = r#"
        <div class="transfer-list">
          <div class="transfer-card row">
            <div class="col-3 transfer-date">12 Juli 2025</div>
            <div class="col-3 transfer-player">
              <div style="font-weight: 600; font-size: 16px">Kairi</div>
              <div style="font-size: 12px; color: #888">Jungler</div>
            </div>
            <div class="col-3 transfer-team">
              <img src="https://cdn.id-mpl.com/onic.png">
              <span>ONIC
                  Esports</span>
            </div>
            <div class="col-3 transfer-team">
              <img src="https://cdn.id-mpl.com/rrq.png">
              <span>RRQ   Hoshi</span>
            </div>
          </div>
          <div class="transfer-card row">
            <div class="col-3 transfer-date">1 Agustus 2025</div>
            <div class="col-3 transfer-player">
              <div style="font-weight:600">Sanz</div>
            </div>
            <div class="col-3 transfer-team"><span>Free Agent</span></div>
          </div>
        </div>
    "#;

    #[test]
    fn test_parse_transfers() {
        let document = scraper::Html::parse_document(TRANSFERS_HTML);
        let transfers = parse_transfers(&document).unwrap();

        assert_eq!(transfers.len(), 2);

        let first = &transfers[0];
        assert_eq!(first.transfer_date.as_deref(), Some("12 Juli 2025"));
        assert_eq!(first.player_name.as_deref(), Some("Kairi"));
        assert_eq!(first.player_role.as_deref(), Some("Jungler"));
        assert_eq!(first.team_from.name.as_deref(), Some("ONIC Esports"));
        assert_eq!(
            first.team_from.logo.as_deref(),
            Some("https://cdn.id-mpl.com/onic.png")
        );
        assert_eq!(first.team_to.name.as_deref(), Some("RRQ Hoshi"));
    }

    #[test]
    fn test_parse_transfer_with_single_team_column() {
        let document = scraper::Html::parse_document(TRANSFERS_HTML);
        let transfers = parse_transfers(&document).unwrap();

        let second = &transfers[1];
        assert_eq!(second.player_name.as_deref(), Some("Sanz"));
        assert_eq!(second.player_role, None);
        assert_eq!(second.team_from.name.as_deref(), Some("Free Agent"));
        assert_eq!(second.team_from.logo, None);
        assert_eq!(second.team_to, TransferTeam::default());
    }

    #[test]
    fn test_parse_transfers_empty_page() {
        let document = scraper::Html::parse_document("<div class=\"transfer-list\"></div>");
        assert!(parse_transfers(&document).unwrap().is_empty());
    }
}
