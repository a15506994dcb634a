//! Indonesian calendar words used by the site's date labels.

use chrono::NaiveDate;

const MONTHS: [(&str, u32); 23] = [
    ("januari", 1),
    ("jan", 1),
    ("februari", 2),
    ("feb", 2),
    ("maret", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("mei", 5),
    ("juni", 6),
    ("jun", 6),
    ("juli", 7),
    ("jul", 7),
    ("agustus", 8),
    ("agu", 8),
    ("september", 9),
    ("sep", 9),
    ("oktober", 10),
    ("okt", 10),
    ("november", 11),
    ("nov", 11),
    ("desember", 12),
    ("des", 12),
];

const WEEKDAYS: [&str; 7] = ["senin", "selasa", "rabu", "kamis", "jumat", "sabtu", "minggu"];

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

fn month_number(word: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, month)| *month)
}

/// Whether `text` contains a month or weekday name.
pub(crate) fn is_date_like(text: &str) -> bool {
    words(text).any(|w| month_number(&w).is_some() || WEEKDAYS.contains(&w.as_str()))
}

/// Parse labels like `"Jumat, 15 Agustus 2025"` or `"15 Agu 2025"`.
///
/// Returns `None` unless a day, a month name and a four digit year are all present.
pub(crate) fn parse_date(text: &str) -> Option<NaiveDate> {
    let words: Vec<String> = words(text).collect();
    let (index, month) = words
        .iter()
        .enumerate()
        .find_map(|(i, w)| month_number(w).map(|m| (i, m)))?;

    let day: u32 = words.get(index.checked_sub(1)?)?.parse().ok()?;
    let year = words.get(index + 1).filter(|w| w.len() == 4)?;
    let year: i32 = year.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
