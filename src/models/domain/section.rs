use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::errors::AppError;

/// Fixed topic domains of the news feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    GeoAi,
    Academic,
    Startup,
    Creator,
    Legal,
    Dev,
}

/// Categories used when a section string is not one of ours.
pub const DEFAULT_CATEGORIES: &[&str] = &["Technology"];

impl Section {
    pub const ALL: [Section; 6] = [
        Section::GeoAi,
        Section::Academic,
        Section::Startup,
        Section::Creator,
        Section::Legal,
        Section::Dev,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::GeoAi => "geo-ai",
            Section::Academic => "academic",
            Section::Startup => "startup",
            Section::Creator => "creator",
            Section::Legal => "legal",
            Section::Dev => "dev",
        }
    }

    /// Search query used to fill the section's feed.
    pub fn news_query(&self) -> &'static str {
        match self {
            Section::GeoAi => "latest geospatial AI satellite mapping location intelligence news",
            Section::Academic => "recent academic research breakthroughs scientific discoveries",
            Section::Startup => "startup funding rounds venture capital business news",
            Section::Creator => "social media creator economy platform updates viral content",
            Section::Legal => "legal technology AI regulation privacy law updates",
            Section::Dev => "programming developer tools software engineering news",
        }
    }

    /// Ordered keyword groups, all lowercase. Earlier groups win ties.
    pub fn keyword_groups(&self) -> &'static [&'static [&'static str]] {
        match self {
            Section::GeoAi => &[
                &["satellite", "imagery", "earth", "mapping"],
                &["climate", "weather", "environmental"],
                &["navigation", "gps", "location"],
                &["smart city", "urban", "infrastructure"],
                &["disaster", "emergency", "response"],
            ],
            Section::Academic => &[
                &["quantum", "computing", "physics"],
                &["medical", "health", "drug", "research"],
                &["ai", "machine learning", "artificial intelligence"],
                &["climate", "environment", "sustainability"],
                &["neuroscience", "brain", "cognitive"],
            ],
            Section::Startup => &[
                &["funding", "investment", "venture capital"],
                &["fintech", "financial", "payment"],
                &["healthcare", "medical", "biotech"],
                &["ai", "artificial intelligence", "machine learning"],
                &["climate tech", "clean energy", "sustainability"],
            ],
            Section::Creator => &[
                &["tiktok", "instagram", "youtube"],
                &["algorithm", "platform", "update"],
                &["influencer", "creator", "content"],
                &["monetization", "revenue", "earnings"],
                &["viral", "trending", "engagement"],
            ],
            Section::Legal => &[
                &["ai regulation", "artificial intelligence", "compliance"],
                &["privacy", "data protection", "gdpr"],
                &["blockchain", "crypto", "smart contract"],
                &["employment", "remote work", "labor"],
                &["intellectual property", "patent", "copyright"],
            ],
            Section::Dev => &[
                &["react", "vue", "angular", "frontend"],
                &["ai tools", "copilot", "coding assistant"],
                &["rust", "go", "python", "javascript"],
                &["kubernetes", "docker", "devops"],
                &["security", "vulnerability", "cybersecurity"],
            ],
        }
    }

    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Section::GeoAi => &[
                "Environmental Tech",
                "Navigation",
                "Climate Tech",
                "Smart Cities",
                "Emergency Tech",
            ],
            Section::Academic => &[
                "Quantum Physics",
                "Medical Research",
                "Education",
                "Climate Science",
                "Neuroscience",
            ],
            Section::Startup => &["Healthcare", "Fintech", "Climate Tech", "EdTech", "Robotics"],
            Section::Creator => &[
                "Platform Updates",
                "Instagram",
                "YouTube",
                "Virtual Influencers",
                "Live Streaming",
            ],
            Section::Legal => &[
                "AI Regulation",
                "Privacy Law",
                "Blockchain Law",
                "Data Protection",
                "Employment Law",
            ],
            Section::Dev => &[
                "Frontend",
                "AI Tools",
                "Programming Languages",
                "DevOps",
                "Web Technologies",
            ],
        }
    }
}

/// Keyword table for a raw section name; unknown names have none.
pub fn keyword_groups_for(section: &str) -> &'static [&'static [&'static str]] {
    section
        .parse::<Section>()
        .map(|s| s.keyword_groups())
        .unwrap_or(&[])
}

/// Category labels for a raw section name.
pub fn categories_for(section: &str) -> &'static [&'static str] {
    section
        .parse::<Section>()
        .map(|s| s.categories())
        .unwrap_or(DEFAULT_CATEGORIES)
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| AppError::InvalidInput("Invalid section specified".to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
