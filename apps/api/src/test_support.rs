//! In-memory stand-ins for the document store and the text generator.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{LlmError, TextGenerator};
use crate::models::document::RetrievedDocument;
use crate::retrieval::{Collection, DocumentStore, StoreError};

/// Serves canned documents per collection and records every search call.
#[derive(Default)]
pub struct StubStore {
    docs: HashMap<Collection, Vec<RetrievedDocument>>,
    failing: HashSet<Collection>,
    calls: Mutex<Vec<(Collection, String, usize)>>,
}

impl StubStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_docs(self, collection: Collection, contents: &[&str]) -> Self {
        let docs = contents
            .iter()
            .map(|c| RetrievedDocument::new(*c).with_meta("source", collection.name()))
            .collect();
        self.with_documents(collection, docs)
    }

    pub fn with_documents(mut self, collection: Collection, docs: Vec<RetrievedDocument>) -> Self {
        self.docs.insert(collection, docs);
        self
    }

    pub fn failing(mut self, collection: Collection) -> Self {
        self.failing.insert(collection);
        self
    }

    pub fn calls(&self) -> Vec<(Collection, String, usize)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, collection: Collection) -> usize {
        self.calls()
            .iter()
            .filter(|(c, _, _)| *c == collection)
            .count()
    }
}

#[async_trait]
impl DocumentStore for StubStore {
    async fn search(
        &self,
        collection: Collection,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<RetrievedDocument>, StoreError> {
        self.calls
            .lock()
            .unwrap()
            .push((collection, query.to_string(), top_k));

        if self.failing.contains(&collection) {
            return Err(StoreError::Embedding(LlmError::Api {
                status: 503,
                message: "store unavailable".to_string(),
            }));
        }

        Ok(self
            .docs
            .get(&collection)
            .map(|docs| docs.iter().take(top_k).cloned().collect())
            .unwrap_or_default())
    }
}

pub enum StubReply {
    Text(String),
    Nothing,
    Fail,
    MissingKey,
}

/// Returns a fixed reply and keeps every prompt it was given.
pub struct StubGenerator {
    reply: StubReply,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(StubReply::Text(text.to_string()))
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            StubReply::Text(text) => Ok(Some(text.clone())),
            StubReply::Nothing => Ok(None),
            StubReply::Fail => Err(LlmError::Api {
                status: 500,
                message: "engine down".to_string(),
            }),
            StubReply::MissingKey => Err(LlmError::MissingApiKey),
        }
    }
}
