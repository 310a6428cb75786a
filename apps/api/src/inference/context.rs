//! Context Formatter — renders retrieved documents as the reference block
//! embedded in the prompt.

use tracing::warn;

use crate::models::document::{
    RetrievedDocument, META_COMPANY_NAME, META_NEWS_DATE, META_RANK, META_SOURCE,
    META_UNIVERSITY_NAME,
};

pub const CONTEXT_START: &str = "---참고 자료 시작---";
pub const CONTEXT_END: &str = "---참고 자료 끝---";
pub const NO_RESULTS: &str = "검색된 결과가 없습니다.";
const UNKNOWN_SOURCE: &str = "알 수 없음";
/// Loaders write this when a company name could not be resolved.
const NO_INFO: &str = "정보 없음";
/// Loaders write this when a news item has no publication date.
const NO_DATE: &str = "날짜 정보 기본값";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextLimits {
    pub max_chars_per_doc: usize,
    /// Soft bound: exceeding it is logged, never truncated.
    pub max_total_chars: usize,
}

impl Default for ContextLimits {
    fn default() -> Self {
        Self {
            max_chars_per_doc: 500,
            max_total_chars: 10_000,
        }
    }
}

pub fn format_documents(documents: &[RetrievedDocument], limits: ContextLimits) -> String {
    if documents.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut context = format!("{CONTEXT_START}\n");
    for (i, doc) in documents.iter().enumerate() {
        context.push_str(&document_line(i + 1, doc, limits.max_chars_per_doc));
        context.push('\n');
    }
    context.push_str(CONTEXT_END);

    let total = context.chars().count();
    if total > limits.max_total_chars {
        warn!(
            "Reference context is {total} chars (soft limit {})",
            limits.max_total_chars
        );
    }
    context
}

fn document_line(index: usize, doc: &RetrievedDocument, max_chars: usize) -> String {
    let preview: String = doc
        .content
        .replace('\n', " ")
        .trim()
        .chars()
        .take(max_chars)
        .collect();

    let source = doc
        .meta_str(META_SOURCE)
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());
    let mut info = format!("출처: {source}");

    if let Some(company) = doc.meta_str(META_COMPANY_NAME).filter(|c| c != NO_INFO) {
        info.push_str(&format!(", 회사명: {company}"));
    }
    if let Some(date) = doc.meta_str(META_NEWS_DATE).filter(|d| d != NO_DATE) {
        info.push_str(&format!(", 날짜: {date}"));
    }
    if let Some(university) = doc.meta_str(META_UNIVERSITY_NAME) {
        info.push_str(&format!(", 대학명: {university}"));
    }
    if let Some(rank) = doc.meta_str(META_RANK) {
        info.push_str(&format!(", 순위: {rank}"));
    }

    format!("자료 {index} {info}: {preview}")
}
