use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata keys written by the corpus loaders.
pub const META_SOURCE: &str = "source";
pub const META_COMPANY_NAME: &str = "company_name";
pub const META_NEWS_DATE: &str = "news_date";
pub const META_UNIVERSITY_NAME: &str = "university_name";
pub const META_RANK: &str = "rank";

/// A document returned by a similarity lookup.
///
/// Documents carry no identity; within one request they are deduplicated by
/// exact `content` equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievedDocument {
    pub content: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl RetrievedDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: Map::new(),
        }
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }

    /// Metadata value rendered as text; `None` when absent, null or blank.
    pub fn meta_str(&self, key: &str) -> Option<String> {
        let rendered = match self.metadata.get(key)? {
            Value::Null => return None,
            Value::String(s) => s.trim().to_string(),
            other => other.to_string(),
        };
        (!rendered.is_empty()).then_some(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_str_renders_strings_and_numbers() {
        let doc = RetrievedDocument::new("서울대학교")
            .with_meta(META_UNIVERSITY_NAME, "서울대학교")
            .with_meta(META_RANK, 1);
        assert_eq!(doc.meta_str(META_UNIVERSITY_NAME).as_deref(), Some("서울대학교"));
        assert_eq!(doc.meta_str(META_RANK).as_deref(), Some("1"));
    }

    #[test]
    fn test_meta_str_none_for_missing_null_or_blank() {
        let doc = RetrievedDocument::new("x")
            .with_meta(META_NEWS_DATE, Value::Null)
            .with_meta(META_COMPANY_NAME, "  ");
        assert!(doc.meta_str(META_NEWS_DATE).is_none());
        assert!(doc.meta_str(META_COMPANY_NAME).is_none());
        assert!(doc.meta_str(META_SOURCE).is_none());
    }
}
