use crate::models::KnowledgeEntry;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading the knowledge base
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("Failed to read knowledge base {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid knowledge base format: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only snapshot of the curated fit scenarios
///
/// Built once at startup and shared by every request. Cloning only bumps a
/// reference count; entries are never mutated after construction. A reload
/// would build a new snapshot and swap the handle as a whole.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Arc<[KnowledgeEntry]>,
}

impl KnowledgeBase {
    pub fn from_entries(entries: Vec<KnowledgeEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn empty() -> Self {
        Self::from_entries(Vec::new())
    }

    /// Parse a JSON array of entries
    pub fn from_json(json: &str) -> Result<Self, KnowledgeBaseError> {
        let entries: Vec<KnowledgeEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Load the knowledge base from a JSON file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, KnowledgeBaseError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| KnowledgeBaseError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let kb = Self::from_json(&json)?;
        tracing::info!("Loaded {} knowledge base entries from {}", kb.len(), path.display());
        Ok(kb)
    }

    /// Load the knowledge base, falling back to an empty one when the file is unavailable
    ///
    /// A file that exists but does not parse is still an error.
    pub async fn load_or_empty<P: AsRef<Path>>(path: P) -> Result<Self, KnowledgeBaseError> {
        match Self::load(path).await {
            Ok(kb) => Ok(kb),
            Err(e @ KnowledgeBaseError::Io { .. }) => {
                tracing::error!("{}. Proceeding with an empty knowledge base.", e);
                Ok(Self::empty())
            }
            Err(e) => Err(e),
        }
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "description": "common with 32 36 band riding up",
            "recommendation": "Go down a band size",
            "reasoning": "The band provides most of the support",
            "fit_tips": "Start on the loosest hook",
            "common_issues": ["band_riding_up"]
        },
        {
            "description": "34 40 cups wrinkle at the top",
            "recommendation": "Try a smaller cup or a balconette",
            "reasoning": "Empty space at the top of the cup",
            "fit_tips": "Scoop and swoop after fastening"
        }
    ]"#;

    #[test]
    fn test_from_json_keeps_order() {
        let kb = KnowledgeBase::from_json(SAMPLE).unwrap();
        assert_eq!(kb.len(), 2);
        assert_eq!(kb.entries()[0].recommendation, "Go down a band size");
        assert!(kb.entries()[1].common_issues.is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = KnowledgeBase::from_json("{not json").unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::Parse(_)));
    }

    #[actix_web::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let kb = KnowledgeBase::load(file.path()).await.unwrap();
        assert_eq!(kb.len(), 2);
    }

    #[actix_web::test]
    async fn test_missing_file_is_empty() {
        let kb = KnowledgeBase::load_or_empty("/definitely/not/here.json").await.unwrap();
        assert!(kb.is_empty());

        let err = KnowledgeBase::load("/definitely/not/here.json").await.unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::Io { .. }));
    }

    #[actix_web::test]
    async fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"description\": 1}]").unwrap();

        assert!(KnowledgeBase::load_or_empty(file.path()).await.is_err());
    }
}
