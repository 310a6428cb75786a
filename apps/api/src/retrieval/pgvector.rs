use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::{FromRow, PgPool};
use tracing::debug;

use crate::llm_client::LlmClient;
use crate::models::document::RetrievedDocument;
use crate::retrieval::{Collection, DocumentStore, StoreError};

/// Cosine-distance search over the LangChain PGVector tables.
const SEARCH_SQL: &str = r#"
    SELECT e.document, e.cmetadata
    FROM langchain_pg_embedding e
    JOIN langchain_pg_collection c ON e.collection_id = c.uuid
    WHERE c.name = $1
    ORDER BY e.embedding <=> $2::vector
    LIMIT $3
"#;

#[derive(Debug, FromRow)]
struct EmbeddingRow {
    document: Option<String>,
    cmetadata: Option<Value>,
}

impl From<EmbeddingRow> for RetrievedDocument {
    fn from(row: EmbeddingRow) -> Self {
        let metadata = match row.cmetadata {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        RetrievedDocument {
            content: row.document.unwrap_or_default(),
            metadata,
        }
    }
}

/// Document store backed by Postgres + pgvector, embedding queries through
/// the shared OpenAI client.
pub struct PgVectorStore {
    pool: PgPool,
    llm: Arc<LlmClient>,
}

impl PgVectorStore {
    pub fn new(pool: PgPool, llm: Arc<LlmClient>) -> Self {
        Self { pool, llm }
    }
}

#[async_trait]
impl DocumentStore for PgVectorStore {
    async fn search(
        &self,
        collection: Collection,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<RetrievedDocument>, StoreError> {
        let embedding = self.llm.embed(query).await?;

        let rows = sqlx::query_as::<_, EmbeddingRow>(SEARCH_SQL)
            .bind(collection.name())
            .bind(vector_literal(&embedding))
            .bind(top_k as i64)
            .fetch_all(&self.pool)
            .await?;

        debug!("{collection}: {} rows for top_k={top_k}", rows.len());
        Ok(rows.into_iter().map(RetrievedDocument::from).collect())
    }
}

/// pgvector text input format: `[0.1,0.2,...]`.
fn vector_literal(embedding: &[f32]) -> String {
    let values: Vec<String> = embedding.iter().map(|v| v.to_string()).collect();
    format!("[{}]", values.join(","))
}
