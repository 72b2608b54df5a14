use std::{collections::HashMap, io::ErrorKind, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::{Document, Filter};
use tokio::{fs, sync::RwLock};
use tracing::debug;

use super::{document_id, DocumentStore};
use crate::errors::ServiceError;

/// Document store keeping each collection as an ordered JSON array.
///
/// With a root directory every collection is persisted to `<root>/<collection>.json`
/// and loaded on first use; without one ([`FileDocumentStore::in_memory`]) data
/// lives only as long as the process.
#[derive(Clone)]
pub struct FileDocumentStore {
    inner: Arc<RwLock<HashMap<String, Vec<Document>>>>,
    root: Option<PathBuf>,
}

impl FileDocumentStore {
    /// Open a store rooted at `dir`, creating the directory if missing.
    pub async fn open<P: Into<PathBuf>>(dir: P) -> Result<Arc<Self>, ServiceError> {
        let root = dir.into();
        fs::create_dir_all(&root).await.map_err(|e| ServiceError::Db(format!("cannot create {}: {e}", root.display())))?;
        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(HashMap::new())), root: Some(root) }))
    }

    pub fn in_memory() -> Arc<Self> {
        Arc::new(Self { inner: Arc::new(RwLock::new(HashMap::new())), root: None })
    }

    fn collection_path(&self, collection: &str) -> Option<PathBuf> {
        self.root.as_ref().map(|root| root.join(format!("{collection}.json")))
    }

    async fn load(&self, collection: &str) -> Result<Vec<Document>, ServiceError> {
        let Some(path) = self.collection_path(collection) else { return Ok(Vec::new()) };
        match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ServiceError::Db(format!("corrupt collection file {}: {e}", path.display()))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(ServiceError::Db(format!("cannot read {}: {e}", path.display()))),
        }
    }

    /// Write the whole collection through a temp file so readers never see a torn file.
    async fn save(&self, collection: &str, docs: &[Document]) -> Result<(), ServiceError> {
        let Some(path) = self.collection_path(collection) else { return Ok(()) };
        let data = serde_json::to_vec(docs).map_err(ServiceError::db)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, data).await.map_err(|e| ServiceError::Db(format!("cannot write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path).await.map_err(|e| ServiceError::Db(format!("cannot replace {}: {e}", path.display())))?;
        debug!(collection, count = docs.len(), "collection persisted");
        Ok(())
    }

    async fn with_collection<T, F>(&self, collection: &str, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&[Document]) -> T,
    {
        validate_collection(collection)?;
        {
            let map = self.inner.read().await;
            if let Some(docs) = map.get(collection) {
                return Ok(f(docs));
            }
        }
        let mut map = self.inner.write().await;
        if !map.contains_key(collection) {
            let loaded = self.load(collection).await?;
            map.insert(collection.to_string(), loaded);
        }
        Ok(f(map.get(collection).map(Vec::as_slice).unwrap_or_default()))
    }
}

fn validate_collection(collection: &str) -> Result<(), ServiceError> {
    let ok = !collection.is_empty()
        && collection.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
    if !ok {
        return Err(ServiceError::Validation(format!("invalid collection name {collection:?}")));
    }
    Ok(())
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), ServiceError> {
        validate_collection(collection)?;
        document_id(&doc)?;
        let mut map = self.inner.write().await;
        if !map.contains_key(collection) {
            let loaded = self.load(collection).await?;
            map.insert(collection.to_string(), loaded);
        }
        let Some(docs) = map.get_mut(collection) else { return Err(ServiceError::Db("collection vanished".into())) };
        docs.push(doc);
        if let Err(e) = self.save(collection, docs).await {
            docs.pop();
            return Err(e);
        }
        Ok(())
    }

    async fn find(&self, collection: &str, filter: &Filter, limit: u64) -> Result<Vec<Document>, ServiceError> {
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        self.with_collection(collection, |docs| {
            docs.iter().filter(|d| filter.matches(d)).take(limit).cloned().collect()
        })
        .await
    }
}
