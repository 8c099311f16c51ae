//! Derived presentation fields for a single search result.

use chrono::{DateTime, NaiveDate, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use url::Url;

use crate::models::domain::{section::DEFAULT_CATEGORIES, RawResult, SourceRef};

pub const UNKNOWN_SOURCE: &str = "Unknown Source";

pub const PLACEHOLDER_COLORS: [&str; 6] = ["3498db", "e74c3c", "f39c12", "9b59b6", "2ecc71", "1a1a1a"];

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/400x200";

/// Host of `url` without a leading `www.`.
pub fn domain_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .filter(|host| !host.is_empty())
        .map(|host| match host.strip_prefix("www.") {
            Some(stripped) => stripped.to_string(),
            None => host,
        })
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string())
}

/// Colour is keyed on the UTF-16 length of the domain.
pub fn placeholder_thumbnail(domain: &str) -> String {
    let color = PLACEHOLDER_COLORS[domain.encode_utf16().count() % PLACEHOLDER_COLORS.len()];
    format!(
        "{}/{}/ffffff?text={}",
        PLACEHOLDER_BASE,
        color,
        urlencoding::encode(domain)
    )
}

/// Provider image if present, otherwise a placeholder keyed on the domain.
pub fn thumbnail_of(result: &RawResult) -> String {
    match result.image() {
        Some(image) => image.to_string(),
        None => placeholder_thumbnail(&domain_of(&result.url)),
    }
}

pub fn source_ref(result: &RawResult) -> SourceRef {
    SourceRef {
        title: result.title.clone(),
        url: result.url.clone(),
        domain: domain_of(&result.url),
        published_date: result.published_date.clone(),
    }
}

/// First `max_chars` characters followed by `...`.
pub fn snippet(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

pub fn parse_published_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecencyLabel {
    pub text: String,
    /// No usable publish date; the text is filler.
    pub estimated: bool,
}

fn plural(n: i64, unit: &str) -> String {
    format!("{} {}{} ago", n, unit, if n == 1 { "" } else { "s" })
}

/// Clock and random source behind the non-derived presentation fields.
pub struct Labeler {
    now: DateTime<Utc>,
    rng: StdRng,
}

impl Labeler {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(now: DateTime<Utc>, seed: u64) -> Self {
        Self {
            now,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn recency_label(&mut self, published_date: Option<&str>) -> RecencyLabel {
        let Some(published) = published_date.and_then(parse_published_date) else {
            let hours = self.rng.random_range(1..=24);
            return RecencyLabel {
                text: plural(hours, "hour"),
                estimated: true,
            };
        };

        let hours = (self.now - published).num_hours();
        let days = hours / 24;
        let text = if hours < 1 {
            "Just now".to_string()
        } else if hours < 24 {
            plural(hours, "hour")
        } else if days < 7 {
            plural(days, "day")
        } else {
            published.format("%-m/%-d/%Y").to_string()
        };

        RecencyLabel {
            text,
            estimated: false,
        }
    }

    /// Keyword pick from `categories`, else a random member of it.
    pub fn category_of(&mut self, title: &str, categories: &[&str]) -> String {
        let categories = if categories.is_empty() {
            DEFAULT_CATEGORIES
        } else {
            categories
        };
        let pick = |i: usize| categories.get(i).unwrap_or(&categories[0]).to_string();

        let title = title.to_lowercase();
        if title.contains("ai") || title.contains("artificial intelligence") {
            return pick(0);
        }
        if title.contains("startup") || title.contains("funding") {
            return pick(1);
        }
        if title.contains("research") || title.contains("study") {
            return pick(2);
        }

        let i = self.rng.random_range(0..categories.len());
        categories[i].to_string()
    }
}
