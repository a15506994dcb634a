//! Weekly match schedule.
//!
//! The schedule page nests `week panel -> date group -> match card` without stable selectors,
//! and the layout differs between seasons. Week panels and date groups are each located by an
//! ordered list of strategies; the first strategy that finds anything wins. A panel whose date
//! groups yield no match cards is scanned once more for cards anywhere inside it, taking the
//! date from the closest preceding date-like text.

use std::collections::btree_map::Entry;
use std::fmt;

use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::model::{MatchStatus, Schedule, ScheduleMatch, TeamScore, WeekLabel, WeekSchedule};
use crate::mpl_scraper::{
    self, class_contains, element_text, locale, non_empty, own_text, select_attr, select_img,
    select_text,
};

const WEEK_ID_PREFIX: &str = "week-";

/// Label texts of this length or shorter are treated as decoration.
const MIN_LABEL_LEN: usize = 3;

#[instrument(skip(client))]
pub(crate) async fn get_schedule(client: &reqwest::Client, base_url: &str) -> Result<Schedule> {
    let url = format!("{base_url}/schedule");
    let document = mpl_scraper::get_document(client, &url).await?;
    let schedule = parse_schedule(&document)?;
    debug!(
        weeks = schedule.len(),
        matches = schedule.values().map(|w| w.matches.len()).sum::<usize>(),
        "parsed schedule"
    );
    Ok(schedule)
}

pub(crate) fn parse_schedule(document: &Html) -> Result<Schedule> {
    let panels = PanelStrategy::first_non_empty(document)?;
    if panels.is_empty() {
        warn!("no week panels found on schedule page");
    }

    let mut schedule = Schedule::new();
    for (position, panel) in panels.into_iter().enumerate() {
        let week = week_number(&panel).unwrap_or(position as u32 + 1);
        let matches = parse_week_panel(panel)?;
        if matches.is_empty() {
            debug!(week, "week panel has no matches");
        }

        match schedule.entry(WeekLabel(week)) {
            Entry::Vacant(entry) => {
                entry.insert(WeekSchedule { week, matches });
            }
            Entry::Occupied(_) => warn!(week, "ignoring duplicate week panel"),
        }
    }

    Ok(schedule)
}

/// An ordered family of ways to locate elements inside `Scope`.
trait Fallback<'a>: Copy + fmt::Display + IntoEnumIterator {
    type Scope: Copy;

    fn find(self, scope: Self::Scope) -> Result<Vec<ElementRef<'a>>>;

    /// Run each strategy in declaration order and return the first non-empty result.
    fn first_non_empty(scope: Self::Scope) -> Result<Vec<ElementRef<'a>>> {
        for strategy in Self::iter() {
            let found = strategy.find(scope)?;
            if !found.is_empty() {
                debug!(%strategy, count = found.len(), "strategy matched");
                return Ok(found);
            }
        }
        Ok(Vec::new())
    }
}

#[derive(Debug, Clone, Copy, strum_macros::Display, strum_macros::EnumIter)]
#[strum(serialize_all = "snake_case")]
enum PanelStrategy {
    /// `week-<N>` ids inside the tabs container.
    TabsContainer,
    /// `week-<N>` ids anywhere on the page.
    PageWideId,
    /// Outermost elements with `week` somewhere in their class attribute.
    ClassSubstring,
}

impl<'a> Fallback<'a> for PanelStrategy {
    type Scope = &'a Html;

    fn find(self, document: &'a Html) -> Result<Vec<ElementRef<'a>>> {
        let found = match self {
            PanelStrategy::TabsContainer => {
                let selector = Selector::parse(".tab-content [id^=\"week-\"]")?;
                document
                    .select(&selector)
                    .filter(|e| week_number_from_id(e).is_some())
                    .collect()
            }
            PanelStrategy::PageWideId => {
                let selector = Selector::parse("[id^=\"week-\"]")?;
                document
                    .select(&selector)
                    .filter(|e| week_number_from_id(e).is_some())
                    .collect()
            }
            PanelStrategy::ClassSubstring => {
                let selector = Selector::parse("[class*=\"week\"]")?;
                outermost(document.select(&selector).collect(), |e| {
                    class_contains(e, "week")
                })
            }
        };
        Ok(found)
    }
}

#[derive(Debug, Clone, Copy, strum_macros::Display, strum_macros::EnumIter)]
#[strum(serialize_all = "snake_case")]
enum DateGroupStrategy {
    /// `.match-date` elements inside column containers.
    ColumnContainers,
    /// Outermost elements whose class mentions both `match` and `date`.
    ClassSubstrings,
    /// Elements whose own text names a month or a weekday.
    LocaleText,
}

impl<'a> Fallback<'a> for DateGroupStrategy {
    type Scope = ElementRef<'a>;

    fn find(self, panel: ElementRef<'a>) -> Result<Vec<ElementRef<'a>>> {
        let found = match self {
            DateGroupStrategy::ColumnContainers => {
                let selector = Selector::parse("[class*=\"col\"] .match-date")?;
                panel.select(&selector).collect()
            }
            DateGroupStrategy::ClassSubstrings => {
                let selector = Selector::parse("[class*=\"match\"][class*=\"date\"]")?;
                outermost(panel.select(&selector).collect(), is_date_class)
            }
            DateGroupStrategy::LocaleText => panel
                .descendants()
                .skip(1)
                .filter_map(ElementRef::wrap)
                .filter(|e| locale::is_date_like(&own_text(e)))
                .collect(),
        };
        Ok(found)
    }
}

/// Drop every candidate nested inside an ancestor that also satisfies `matches`.
fn outermost<'a>(
    candidates: Vec<ElementRef<'a>>,
    matches: impl Fn(&ElementRef<'a>) -> bool,
) -> Vec<ElementRef<'a>> {
    candidates
        .into_iter()
        .filter(|e| {
            !e.ancestors()
                .filter_map(ElementRef::wrap)
                .any(|ancestor| matches(&ancestor))
        })
        .collect()
}

fn week_number_from_id(element: &ElementRef) -> Option<u32> {
    element
        .value()
        .id()?
        .strip_prefix(WEEK_ID_PREFIX)
        .filter(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))?
        .parse()
        .ok()
}

/// Week number from a `week-<N>` id, else from the digits of a `week` class.
fn week_number(panel: &ElementRef) -> Option<u32> {
    week_number_from_id(panel).or_else(|| {
        panel
            .value()
            .classes()
            .filter(|c| c.contains("week"))
            .find_map(|c| {
                c.chars()
                    .filter(char::is_ascii_digit)
                    .collect::<String>()
                    .parse()
                    .ok()
            })
    })
}

fn parse_week_panel(panel: ElementRef) -> Result<Vec<ScheduleMatch>> {
    let mut matches = Vec::new();
    for date_group in DateGroupStrategy::first_non_empty(panel)? {
        let label = date_label(&date_group);
        for card in match_cards_after(&date_group) {
            matches.push(parse_match_card(&card, &label)?);
        }
    }

    if matches.is_empty() {
        matches = scan_match_cards(panel)?;
        if !matches.is_empty() {
            debug!(count = matches.len(), "found matches by direct scan");
        }
    }

    Ok(matches)
}

fn is_date_class(element: &ElementRef) -> bool {
    class_contains(element, "match") && class_contains(element, "date")
}

fn is_date_group(element: &ElementRef) -> bool {
    is_date_class(element) || locale::is_date_like(&own_text(element))
}

fn is_match_card(element: &ElementRef) -> bool {
    element.value().classes().any(|c| c == "position-relative")
        && class_contains(element, "match")
        && !is_date_class(element)
}

/// Match cards following a date element, up to the next date element.
fn match_cards_after<'a>(date_group: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    date_group
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|e| !is_date_group(e))
        .filter(is_match_card)
        .collect()
}

/// Prefer the first nested element with meaningful text, else the element's whole text.
fn date_label(date_group: &ElementRef) -> String {
    date_group
        .children()
        .filter_map(ElementRef::wrap)
        .map(|child| element_text(&child))
        .find(|text| text.chars().count() > MIN_LABEL_LEN)
        .unwrap_or_else(|| element_text(date_group))
}

/// Flat scan for match cards anywhere in the panel.
fn scan_match_cards(panel: ElementRef) -> Result<Vec<ScheduleMatch>> {
    let card_selector = Selector::parse(".position-relative[class*=\"match\"]")?;
    panel
        .select(&card_selector)
        .filter(is_match_card)
        .map(|card| {
            let label = nearest_date_label(&card, &panel).unwrap_or_else(|| {
                warn!("match card without a preceding date");
                String::new()
            });
            parse_match_card(&card, &label)
        })
        .collect()
}

/// Walk back through preceding siblings, then the ancestors' preceding siblings, up to `panel`.
fn nearest_date_label(card: &ElementRef, panel: &ElementRef) -> Option<String> {
    let mut current = *card;
    loop {
        let found = current
            .prev_siblings()
            .filter_map(ElementRef::wrap)
            .find_map(|sibling| date_label_within(&sibling));
        if found.is_some() {
            return found;
        }

        let parent = current.parent().and_then(ElementRef::wrap)?;
        if parent == *panel {
            return None;
        }
        current = parent;
    }
}

fn date_label_within(element: &ElementRef) -> Option<String> {
    if is_date_class(element) {
        return Some(date_label(element));
    }
    if !locale::is_date_like(&element_text(element)) {
        return None;
    }
    // The closest date is the last one in document order.
    element
        .descendants()
        .filter_map(ElementRef::wrap)
        .map(|e| own_text(&e))
        .filter(|text| locale::is_date_like(text))
        .last()
}

fn parse_match_card(card: &ElementRef, date: &str) -> Result<ScheduleMatch> {
    let team1_selector = Selector::parse(".team1")?;
    let team2_selector = Selector::parse(".team2")?;
    let score_selector = Selector::parse(".score")?;
    let styled_selector = Selector::parse("[style]")?;
    let onclick_selector = Selector::parse("[onclick]")?;
    let replay_selector = Selector::parse("a.button-watch")?;

    // Both scores or neither.
    let (score1, score2) = card
        .select(&score_selector)
        .take(2)
        .map(|e| element_text(&e).parse::<u32>().ok())
        .collect_tuple()
        .and_then(|(a, b)| a.zip(b))
        .unzip();

    let match_time = card
        .select(&styled_selector)
        .filter(is_time_element)
        .map(|e| element_text(&e))
        .min_by_key(String::len);

    let match_id = card
        .value()
        .attr("onclick")
        .or_else(|| {
            card.select(&onclick_selector)
                .find_map(|e| e.value().attr("onclick"))
        })
        .and_then(numeric_argument);

    let replay_link = select_attr(card, &replay_selector, "href");

    let status = MatchStatus::derive(score1.is_some(), replay_link.is_some());

    Ok(ScheduleMatch {
        match_id,
        match_date: date.to_string(),
        calendar_date: locale::parse_date(date),
        match_time,
        team1: parse_team(card, &team1_selector, score1)?,
        team2: parse_team(card, &team2_selector, score2)?,
        replay_link,
        status,
    })
}

fn parse_team(
    card: &ElementRef,
    block_selector: &Selector,
    score: Option<u32>,
) -> Result<TeamScore> {
    let name_selector = Selector::parse(".team-name")?;
    let img_selector = Selector::parse("img")?;

    let Some(block) = card.select(block_selector).next() else {
        warn!("match card without team block");
        return Ok(TeamScore {
            name: String::new(),
            logo: String::new(),
            score,
        });
    };

    let name = non_empty(select_text(&block, &name_selector))
        .or_else(|| select_attr(&block, &img_selector, "alt"))
        .unwrap_or_default();

    Ok(TeamScore {
        name,
        logo: select_img(&block, &img_selector).unwrap_or_default(),
        score,
    })
}

/// The kickoff time sits in an inline-styled element of its own.
fn is_time_element(element: &ElementRef) -> bool {
    element.value().attr("style").is_some() && looks_like_time(&element_text(element))
}

/// Whether `text` contains a clock time such as `15:15` or `9:30 WIB`.
fn looks_like_time(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.iter().enumerate().any(|(i, c)| {
        *c == ':'
            && i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(char::is_ascii_digit)
            && chars.get(i + 2).is_some_and(char::is_ascii_digit)
    })
}

/// First numeric argument of an inline handler such as `openMatch('1234', this)`.
fn numeric_argument(handler: &str) -> Option<u64> {
    let (_, args) = handler.split_once('(')?;
    let args = args.split(')').next().unwrap_or_default();
    args.split(',')
        .map(|arg| arg.trim().trim_matches(|c| c == '\'' || c == '"'))
        .find_map(|arg| arg.parse().ok())
}
