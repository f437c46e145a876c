//! Date parsing across the formats the source boards actually emit, the
//! expiry predicate, and display formatting.

use chrono::NaiveDate;

/// Formats observed in the wild, tried in order.
const DATE_FORMATS: [&str; 7] = [
    "%d/%b/%Y",      // 25/Jan/2026
    "%d-%m-%Y",      // 23-01-2026
    "%d-%m-%Y - %a", // 23-01-2026 - Fri
    "%d-%m-%Y - %A", // 23-01-2026 - Friday
    "%Y-%m-%d",      // 2026-01-23
    "%d %B %Y",      // 27 January 2026
    "%d %b %Y",      // 27 Jan 2026
];

/// Best-effort calendar date from a free-text field. Ordinal suffixes and
/// commas are stripped first; ISO datetimes contribute their date part.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    let cleaned = normalize(s);
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(&cleaned, fmt) {
            return Some(d);
        }
    }
    if let Some((date_part, _)) = cleaned.split_once('T') {
        if let Ok(d) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
            return Some(d);
        }
    }
    None
}

/// Strictly-before-today, date-only. Unparsable or absent deadlines never
/// expire a job.
pub fn is_expired(deadline: Option<&str>, today: NaiveDate) -> bool {
    deadline.and_then(parse_date).is_some_and(|d| d < today)
}

/// "27 Jan 2026" when the value parses, the raw string when it does not,
/// a fixed placeholder when it is absent or blank.
pub fn format_display(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => "Date not specified".to_string(),
        Some(s) => match parse_date(s) {
            Some(d) => d.format("%d %b %Y").to_string(),
            None => s.to_string(),
        },
    }
}

fn normalize(s: &str) -> String {
    let no_commas = s.replace(',', " ").trim_end_matches('.').to_string();
    let collapsed = no_commas.split_whitespace().collect::<Vec<_>>().join(" ");
    strip_ordinals(&collapsed)
}

/// "1st", "22nd", "3rd", "4th" -> bare day numbers.
fn strip_ordinals(s: &str) -> String {
    s.split(' ')
        .map(|token| {
            let lower = token.to_lowercase();
            let (digits, suffix) = lower.split_at(lower.find(|c: char| !c.is_ascii_digit()).unwrap_or(lower.len()));
            if !digits.is_empty() && matches!(suffix, "st" | "nd" | "rd" | "th") {
                digits.to_string()
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
