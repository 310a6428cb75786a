//! Response Parser & Validator — turns free-form generator output into
//! canonical `(tag, evidence)` results.
//!
//! Each line is judged on its own and yields `Result<InferredResult, LineRejection>`.
//! A rejected line is logged and dropped; nothing here aborts the response.
//!
//! Accepted line shapes (after an optional leading "- "):
//! - `태그명 (근거)` — split on the LAST `(`; the tag part must match a
//!   canonical tag after normalization.
//! - `태그명` — the whole line must match; evidence is [`EVIDENCE_NOT_SPECIFIED`].
//!
//! Lines naming several tags ("IPO, M&A 경험 (…)") are never split: the
//! combined candidate matches nothing and the line is discarded.

use std::fmt;

use tracing::{debug, info, warn};

use crate::inference::tags::normalize_tag;

pub const EVIDENCE_NOT_SPECIFIED: &str = "근거 명시 안됨";

/// A validated tag with its supporting evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredResult {
    /// Canonical spelling, never the generator's.
    pub tag: String,
    pub evidence: String,
}

impl fmt::Display for InferredResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.tag, self.evidence)
    }
}

/// Why a non-blank line was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRejection {
    UnknownTag { candidate: String },
}

impl fmt::Display for LineRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRejection::UnknownTag { candidate } => {
                write!(f, "'{candidate}' is not in the tag list")
            }
        }
    }
}

/// Parses the whole generator response. `None` or blank input yields an
/// empty list. Duplicate tags are kept in line order.
pub fn parse_response(raw: Option<&str>, canonical_tags: &[&str]) -> Vec<InferredResult> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        warn!("Generator response is empty");
        return Vec::new();
    };

    let mut results = Vec::new();
    for line in raw.lines() {
        let Some(content) = line_content(line) else {
            continue;
        };
        match parse_line(content, canonical_tags) {
            Ok(result) => {
                debug!("Parsed tag='{}' evidence='{}'", result.tag, result.evidence);
                results.push(result);
            }
            Err(rejection) => warn!("Dropping line '{}': {rejection}", line.trim()),
        }
    }

    info!("Parsed {} tags from generator response", results.len());
    results
}

/// Trims the line and strips one leading "- " bullet. `None` for blank lines.
fn line_content(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let content = trimmed
        .strip_prefix("- ")
        .map(str::trim)
        .unwrap_or(trimmed);
    (!content.is_empty()).then_some(content)
}

/// Validates one non-blank, de-bulleted line.
///
/// A line ending in `)` is split on its last `(`; any other line is matched
/// whole as a bare tag.
pub fn parse_line(
    content: &str,
    canonical_tags: &[&str],
) -> Result<InferredResult, LineRejection> {
    let Some((tag_candidate, evidence)) = content
        .strip_suffix(')')
        .and_then(|inner| inner.rsplit_once('('))
    else {
        return bare_tag(content, canonical_tags);
    };

    let tag = match_canonical(tag_candidate.trim(), canonical_tags)?;
    let evidence = evidence.trim();
    Ok(InferredResult {
        tag: tag.to_string(),
        evidence: if evidence.is_empty() {
            EVIDENCE_NOT_SPECIFIED.to_string()
        } else {
            evidence.to_string()
        },
    })
}

fn bare_tag(candidate: &str, canonical_tags: &[&str]) -> Result<InferredResult, LineRejection> {
    let tag = match_canonical(candidate.trim(), canonical_tags)?;
    Ok(InferredResult {
        tag: tag.to_string(),
        evidence: EVIDENCE_NOT_SPECIFIED.to_string(),
    })
}

fn match_canonical<'a>(
    candidate: &str,
    canonical_tags: &[&'a str],
) -> Result<&'a str, LineRejection> {
    let normalized = normalize_tag(candidate);
    canonical_tags
        .iter()
        .copied()
        .find(|tag| normalize_tag(tag) == normalized)
        .ok_or_else(|| LineRejection::UnknownTag {
            candidate: candidate.to_string(),
        })
}
