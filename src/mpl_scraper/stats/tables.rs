use scraper::Html;

use crate::error::Result;
use crate::model::{HeroStat, PlayerStat, TeamStat};
use crate::mpl_scraper::stats::{name_and_logo, table_rows};
use crate::mpl_scraper::{element_text, parse_count, parse_f32, parse_pct, parse_u32};

pub(crate) fn parse_team_stats(document: &Html) -> Result<Vec<TeamStat>> {
    table_rows(document, "table-team-statistics", 9)?
        .iter()
        .map(|cells| {
            let (team_name, team_logo) = name_and_logo(&cells[0])?;
            let count = |index: usize| parse_count(&element_text(&cells[index]));
            Ok(TeamStat {
                team_name,
                team_logo,
                kills: count(1),
                deaths: count(2),
                assists: count(3),
                gold: count(4),
                damage: count(5),
                lord_kills: count(6),
                tortoise_kills: count(7),
                tower_kills: count(8),
            })
        })
        .collect()
}

pub(crate) fn parse_player_stats(document: &Html) -> Result<Vec<PlayerStat>> {
    table_rows(document, "table-player-statistics", 11)?
        .iter()
        .map(|cells| {
            let (player_name, player_logo) = name_and_logo(&cells[0])?;
            let text = |index: usize| element_text(&cells[index]);
            let total = |index: usize| parse_count(&text(index));
            Ok(PlayerStat {
                player_name,
                player_logo,
                lane: text(1),
                total_games: total(2),
                total_kills: total(3),
                avg_kills: parse_f32(&text(4)),
                total_deaths: total(5),
                avg_deaths: parse_f32(&text(6)),
                total_assists: total(7),
                avg_assists: parse_f32(&text(8)),
                avg_kda: parse_f32(&text(9)),
                kill_participation: text(10),
            })
        })
        .collect()
}

pub(crate) fn parse_hero_stats(document: &Html) -> Result<Vec<HeroStat>> {
    table_rows(document, "table-hero-statistics", 5)?
        .iter()
        .map(|cells| {
            let (hero_name, hero_logo) = name_and_logo(&cells[0])?;
            let text = |index: usize| element_text(&cells[index]);
            Ok(HeroStat {
                hero_name,
                hero_logo,
                pick: parse_u32(&text(1)),
                ban: parse_u32(&text(2)),
                win: parse_u32(&text(3)),
                win_rate: parse_pct(&text(4)),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATISTICS_HTML: &str = r#"
        <table id="table-team-statistics" class="table">
          <thead><tr><th>Team</th><th>K</th><th>D</th><th>A</th><th>Gold</th><th>Dmg</th><th>Lord</th><th>Turtle</th><th>Tower</th></tr></thead>
          <tbody>
            <tr>
              <td><img src="https://cdn.id-mpl.com/onic.png"> ONIC </td>
              <td>1,204</td><td>987</td><td>2.511</td><td>5,812,330</td><td>12,000,450</td>
              <td>41</td><td>58</td><td>233</td>
            </tr>
            <tr>
              <td><img src="https://cdn.id-mpl.com/evos.png">EVOS Glory</td>
              <td>-</td><td>n/a</td><td>12</td><td>1,000</td><td>2,000</td>
              <td>3</td><td>4</td><td>5</td>
            </tr>
            <tr><td colspan="9">No more teams</td></tr>
          </tbody>
        </table>
        <table id="table-player-statistics">
          <tbody>
            <tr>
              <td><img src="https://cdn.id-mpl.com/p/kairi.png">Kairi</td>
              <td>Jungle</td><td>30</td><td>150</td><td>5.00</td><td>45</td><td>1,50</td>
              <td>1,204</td><td>7.00</td><td>8.00</td><td>72.5%</td>
            </tr>
            <tr>
              <td>Sanz</td>
              <td>Mid</td><td>x</td><td>100</td><td>abc</td><td>50</td><td>2.0</td>
              <td>150</td><td>5.0</td><td>5.0</td><td>KP: 65 %</td>
            </tr>
          </tbody>
        </table>
        <table id="table-hero-statistics">
          <tbody>
            <tr>
              <td><img src="https://cdn.id-mpl.com/h/fanny.png">Fanny</td>
              <td>40</td><td>60</td><td>22</td><td>55.00%</td>
            </tr>
          </tbody>
        </table>
    "#;

    #[test]
    fn test_parse_team_stats() {
        let document = Html::parse_document(STATISTICS_HTML);
        let stats = parse_team_stats(&document).unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(
            stats[0],
            TeamStat {
                team_name: "ONIC".to_string(),
                team_logo: "https://cdn.id-mpl.com/onic.png".to_string(),
                kills: 1204,
                deaths: 987,
                assists: 2511,
                gold: 5_812_330,
                damage: 12_000_450,
                lord_kills: 41,
                tortoise_kills: 58,
                tower_kills: 233,
            }
        );
    }

    #[test]
    fn test_parse_team_stats_malformed_cells_default_to_zero() {
        let document = Html::parse_document(STATISTICS_HTML);
        let stats = parse_team_stats(&document).unwrap();

        let evos = &stats[1];
        assert_eq!(evos.team_name, "EVOS Glory");
        assert_eq!(evos.kills, 0);
        assert_eq!(evos.deaths, 0);
        assert_eq!(evos.assists, 12);
        assert_eq!(evos.gold, 1000);
        assert_eq!(evos.tower_kills, 5);
    }

    #[test]
    fn test_parse_player_stats() {
        let document = Html::parse_document(STATISTICS_HTML);
        let stats = parse_player_stats(&document).unwrap();

        assert_eq!(stats.len(), 2);

        let kairi = &stats[0];
        assert_eq!(kairi.player_name, "Kairi");
        assert_eq!(kairi.player_logo, "https://cdn.id-mpl.com/p/kairi.png");
        assert_eq!(kairi.lane, "Jungle");
        assert_eq!(kairi.total_games, 30);
        assert_eq!(kairi.total_kills, 150);
        assert_eq!(kairi.avg_kills, 5.0);
        assert_eq!(kairi.avg_deaths, 1.5);
        assert_eq!(kairi.total_assists, 1204);
        assert_eq!(kairi.avg_kda, 8.0);
        assert_eq!(kairi.kill_participation, "72.5%");

        let sanz = &stats[1];
        assert_eq!(sanz.player_logo, "");
        assert_eq!(sanz.total_games, 0);
        assert_eq!(sanz.total_kills, 100);
        assert_eq!(sanz.avg_kills, 0.0);
        assert_eq!(sanz.avg_deaths, 2.0);
        assert_eq!(sanz.kill_participation, "KP: 65 %");
    }

    #[test]
    fn test_parse_hero_stats() {
        let document = Html::parse_document(STATISTICS_HTML);
        let stats = parse_hero_stats(&document).unwrap();

        assert_eq!(
            stats,
            vec![HeroStat {
                hero_name: "Fanny".to_string(),
                hero_logo: "https://cdn.id-mpl.com/h/fanny.png".to_string(),
                pick: 40,
                ban: 60,
                win: 22,
                win_rate: 55.0,
            }]
        );
    }

    #[test]
    fn test_missing_tables_yield_empty_lists() {
        let document = Html::parse_document("<p>Statistics are not available yet</p>");
        assert!(parse_team_stats(&document).unwrap().is_empty());
        assert!(parse_player_stats(&document).unwrap().is_empty());
        assert!(parse_hero_stats(&document).unwrap().is_empty());
    }
}
