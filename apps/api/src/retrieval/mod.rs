//! Evidence Retrieval — pulls supporting documents for a profile from the
//! three knowledge-base collections and merges them into one unique set.
//!
//! Each collection is an independent channel: a failing channel is logged and
//! contributes nothing, the others carry on.

use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

use crate::llm_client::LlmError;
use crate::models::document::RetrievedDocument;

pub mod pgvector;

/// Substituted for a blank general query when only a university query exists.
pub const EMPTY_QUERY_PLACEHOLDER: &str = "정보없음";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Embedding failed: {0}")]
    Embedding(#[from] LlmError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The knowledge-base collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Company,
    CompanyNews,
    UniversityRank,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Company => "company_collection",
            Collection::CompanyNews => "company_news_collection",
            Collection::UniversityRank => "university_rank_collection",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Top-k similarity search over a named collection.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn search(
        &self,
        collection: Collection,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<RetrievedDocument>, StoreError>;
}

/// Per-channel result counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrievalLimits {
    /// Applies to both the company and the news channel.
    pub per_source: usize,
    pub university: usize,
}

impl Default for RetrievalLimits {
    fn default() -> Self {
        Self {
            per_source: 4,
            university: 1,
        }
    }
}

/// Queries all channels and returns the merged, content-deduplicated documents.
///
/// Merge order is university → company → news. The university channel is not
/// queried at all when `university_query` is `None`; with a blank `query` as
/// well, no channel is queried.
pub async fn retrieve_evidence(
    store: &dyn DocumentStore,
    query: &str,
    university_query: Option<&str>,
    limits: RetrievalLimits,
) -> Vec<RetrievedDocument> {
    let query = match (query.trim().is_empty(), university_query) {
        (true, None) => {
            info!("Nothing to search for; skipping retrieval");
            return Vec::new();
        }
        (true, Some(_)) => EMPTY_QUERY_PLACEHOLDER,
        (false, _) => query,
    };

    let university = async {
        match university_query {
            Some(q) => {
                search_channel(store, Collection::UniversityRank, q, limits.university).await
            }
            None => Vec::new(),
        }
    };
    let company = search_channel(store, Collection::Company, query, limits.per_source);
    let news = search_channel(store, Collection::CompanyNews, query, limits.per_source);

    let (university_docs, company_docs, news_docs) = tokio::join!(university, company, news);

    let unique = dedup_by_content(
        university_docs
            .into_iter()
            .chain(company_docs)
            .chain(news_docs),
    );
    info!("Unique documents retrieved: {}", unique.len());
    unique
}

async fn search_channel(
    store: &dyn DocumentStore,
    collection: Collection,
    query: &str,
    top_k: usize,
) -> Vec<RetrievedDocument> {
    match store.search(collection, query, top_k).await {
        Ok(docs) => {
            if docs.is_empty() {
                info!("No results from {collection} for query '{query}'");
            } else {
                info!("{collection}: {} documents", docs.len());
            }
            docs
        }
        Err(e) => {
            error!("Search on {collection} failed: {e}");
            Vec::new()
        }
    }
}

/// Keeps the first document for each distinct content string.
fn dedup_by_content(
    docs: impl IntoIterator<Item = RetrievedDocument>,
) -> Vec<RetrievedDocument> {
    let mut seen = HashSet::new();
    docs.into_iter()
        .filter(|doc| seen.insert(doc.content.clone()))
        .collect()
}
