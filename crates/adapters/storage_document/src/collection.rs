//! An ordered collection of schemaless JSON documents.
//!
//! Documents get a random id on insertion and keep insertion order. When a
//! file path is configured the whole collection is loaded from it on open and
//! rewritten after every write.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::DocumentStoreError;

/// A stored document: a generated id plus an arbitrary JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: uuid::Uuid,
    pub data: serde_json::Value,
}

/// A named, ordered set of [`Document`]s.
pub struct DocumentCollection {
    name: String,
    path: Option<PathBuf>,
    documents: RwLock<Vec<Document>>,
}

impl DocumentCollection {
    /// An empty collection that lives only in memory.
    #[must_use]
    pub fn in_memory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Open a collection mirrored to `path`, loading any documents already there.
    ///
    /// A missing file is treated as an empty collection; it is created on the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError`] if the file exists but cannot be read or parsed.
    pub async fn open(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Result<Self, DocumentStoreError> {
        let name = name.into();
        let path = path.into();

        let documents = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(DocumentStoreError::Io { path, source }),
        };

        tracing::debug!(collection = %name, path = %path.display(), count = documents.len(), "opened collection");

        Ok(Self {
            name,
            path: Some(path),
            documents: RwLock::new(documents),
        })
    }

    /// Collection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy of every document, in insertion order.
    pub async fn documents(&self) -> Vec<Document> {
        self.documents.read().await.clone()
    }

    /// Whether the collection holds at least one document.
    pub async fn is_populated(&self) -> bool {
        !self.documents.read().await.is_empty()
    }

    /// Append `items` as new documents and persist.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError`] if the collection cannot be written back.
    pub async fn add_all(&self, items: Vec<serde_json::Value>) -> Result<usize, DocumentStoreError> {
        let mut documents = self.documents.write().await;
        let count = items.len();
        let next = self.staged(&documents, items).await?;
        *documents = next;
        Ok(count)
    }

    /// Append `items` only if the collection is empty, as one step.
    ///
    /// Returns `None` when documents were already present.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError`] if the collection cannot be written back.
    pub async fn add_all_if_empty(
        &self,
        items: Vec<serde_json::Value>,
    ) -> Result<Option<usize>, DocumentStoreError> {
        let mut documents = self.documents.write().await;
        if !documents.is_empty() {
            return Ok(None);
        }
        let count = items.len();
        let next = self.staged(&documents, items).await?;
        *documents = next;
        Ok(Some(count))
    }

    /// `current` followed by `items`, written to the backing file.
    ///
    /// The caller swaps the result in only once this succeeds, so a failed
    /// write leaves the in-memory documents untouched.
    async fn staged(
        &self,
        current: &[Document],
        items: Vec<serde_json::Value>,
    ) -> Result<Vec<Document>, DocumentStoreError> {
        let mut next = Vec::with_capacity(current.len() + items.len());
        next.extend_from_slice(current);
        next.extend(items.into_iter().map(|data| Document {
            id: uuid::Uuid::new_v4(),
            data,
        }));
        self.persist(&next).await?;
        Ok(next)
    }

    async fn persist(&self, documents: &[Document]) -> Result<(), DocumentStoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let bytes = serde_json::to_vec_pretty(documents)?;
        tokio::fs::write(path, bytes)
            .await
            .map_err(|source| DocumentStoreError::Io {
                path: path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn should_keep_insertion_order() {
        let collection = DocumentCollection::in_memory("bookings");
        collection
            .add_all(vec![json!({"n": 1}), json!({"n": 2})])
            .await
            .unwrap();
        collection.add_all(vec![json!({"n": 3})]).await.unwrap();

        let values: Vec<i64> = collection
            .documents()
            .await
            .iter()
            .map(|d| d.data["n"].as_i64().unwrap())
            .collect();
        assert_eq!(values, [1, 2, 3]);
    }

    #[tokio::test]
    async fn should_assign_distinct_ids() {
        let collection = DocumentCollection::in_memory("bookings");
        collection
            .add_all(vec![json!({}), json!({})])
            .await
            .unwrap();

        let docs = collection.documents().await;
        assert_ne!(docs[0].id, docs[1].id);
    }

    #[tokio::test]
    async fn should_skip_conditional_add_when_populated() {
        let collection = DocumentCollection::in_memory("bookings");

        let first = collection.add_all_if_empty(vec![json!({"a": 1})]).await.unwrap();
        let second = collection.add_all_if_empty(vec![json!({"b": 2})]).await.unwrap();

        assert_eq!(first, Some(1));
        assert_eq!(second, None);
        assert_eq!(collection.documents().await.len(), 1);
    }

    #[tokio::test]
    async fn should_reload_documents_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");

        let collection = DocumentCollection::open("bookings", &path).await.unwrap();
        assert!(!collection.is_populated().await);
        collection.add_all(vec![json!({"name": "Ann"})]).await.unwrap();

        let reopened = DocumentCollection::open("bookings", &path).await.unwrap();
        let docs = reopened.documents().await;
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].data["name"], "Ann");
        assert_eq!(reopened.name(), "bookings");
    }

    #[tokio::test]
    async fn should_keep_collection_empty_when_write_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("bookings.json");
        let collection = DocumentCollection::open("bookings", &path).await.unwrap();

        let first = collection.add_all_if_empty(vec![json!({"a": 1})]).await;
        let second = collection.add_all_if_empty(vec![json!({"a": 1})]).await;

        assert!(matches!(first, Err(DocumentStoreError::Io { .. })));
        assert!(matches!(second, Err(DocumentStoreError::Io { .. })));
        assert!(!collection.is_populated().await);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn should_keep_previous_documents_when_append_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        let collection = DocumentCollection::open("bookings", &path).await.unwrap();
        collection.add_all(vec![json!({"n": 1})]).await.unwrap();
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let result = collection.add_all(vec![json!({"n": 2})]).await;

        assert!(matches!(result, Err(DocumentStoreError::Io { .. })));
        assert_eq!(collection.documents().await.len(), 1);
    }

    #[tokio::test]
    async fn should_fail_to_open_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        std::fs::write(&path, "not json").unwrap();

        let result = DocumentCollection::open("bookings", &path).await;
        assert!(matches!(result, Err(DocumentStoreError::Json(_))));
    }
}
