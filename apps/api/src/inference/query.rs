//! Query Builder — derives the free-text retrieval query from a profile.

use std::collections::HashSet;

use tracing::{error, info, warn};

use crate::models::profile::Profile;

pub const MAX_QUERY_CHARS: usize = 5000;
const DESCRIPTION_LINE_CHARS: usize = 100;
const SUMMARY_CHARS: usize = 100;

/// Terms that sharpen retrieval when they appear in a position description.
pub const KEYWORDS: &[&str] = &[
    "투자",
    "리드",
    "Leadership",
    "Data",
    "Lead",
    "책임자",
    "대표",
    "IPO",
    "총괄",
    "인수",
    "합병",
    "CTO",
    "CEO",
    "CPO",
    "Head",
    "Manager",
    "Director",
    "성장",
    "유치",
    "전략",
    "분석",
    "운영",
    "AI",
    "M&A",
];

/// Keywords found in `text` as case-insensitive substrings, in `keywords` order.
pub fn extract_keywords<'a>(text: &str, keywords: &[&'a str]) -> Vec<&'a str> {
    if text.is_empty() {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();
    keywords
        .iter()
        .copied()
        .filter(|kw| text_lower.contains(&kw.to_lowercase()))
        .collect()
}

/// Builds the general retrieval query. Returns an empty string when the
/// profile contributes nothing; callers treat that as "no general query".
pub fn build_search_query(profile: &Profile) -> String {
    let mut parts: Vec<String> = Vec::new();

    for position in &profile.positions {
        if let Some(company) = &position.company_name {
            parts.push(company.clone());
        }
        if let Some(title) = &position.title {
            parts.push(title.clone());
        }
        if let Some(description) = &position.description {
            let first_line = description.split('\n').next().unwrap_or_default().trim();
            parts.push(first_line.chars().take(DESCRIPTION_LINE_CHARS).collect());
            parts.extend(
                extract_keywords(description, KEYWORDS)
                    .into_iter()
                    .map(str::to_string),
            );
        }
    }

    if !profile.skills.is_empty() {
        parts.push(profile.skills.join(", "));
    }
    if let Some(headline) = &profile.headline {
        parts.push(headline.clone());
    }
    if let Some(summary) = &profile.summary {
        parts.push(summary.chars().take(SUMMARY_CHARS).collect());
    }

    let mut seen = HashSet::new();
    let unique: Vec<&str> = parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .filter(|p| seen.insert(*p))
        .collect();

    let mut query = unique.join(" ");

    let length = query.chars().count();
    if length > MAX_QUERY_CHARS {
        warn!("Search query too long ({length} chars), truncating to {MAX_QUERY_CHARS}");
        query = query.chars().take(MAX_QUERY_CHARS).collect();
    }

    if query.is_empty() {
        error!("Search query is empty: profile has no searchable fields");
        return query;
    }

    info!("Search query: '{query}'");
    query
}
