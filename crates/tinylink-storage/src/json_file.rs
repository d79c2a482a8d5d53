use async_trait::async_trait;
use jiff::Timestamp;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tinylink_core::error::StorageError;
use tinylink_core::store::{Result, Store};
use tinylink_core::{ShortCode, UrlRecord};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use typed_builder::TypedBuilder;

type Records = BTreeMap<String, UrlRecord>;

/// Settings for [`JsonFileStore`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct JsonFileSettings {
    /// Location of the data file.
    #[builder(setter(into))]
    pub path: PathBuf,
    /// Write indented JSON instead of a single line.
    #[builder(default = false)]
    pub pretty: bool,
}

/// A store backed by a single JSON document on disk.
///
/// The file is read once when the store is opened and is write-only
/// afterwards: lookups are served from memory, and every mutation rewrites
/// the whole file. A single mutex covers the in-memory update and the file
/// write, so concurrent mutations are applied one after another.
///
/// There is no transaction across the two steps: if the write fails, the
/// in-memory change stays and the error is returned to the caller.
#[derive(Debug)]
pub struct JsonFileStore {
    settings: JsonFileSettings,
    records: Mutex<Records>,
}

impl JsonFileStore {
    /// Opens the store, loading whatever the data file holds.
    ///
    /// Never fails: a missing or unreadable file yields an empty store.
    pub async fn open(settings: JsonFileSettings) -> Self {
        let records = load(&settings.path).await;
        Self {
            settings,
            records: Mutex::new(records),
        }
    }

    /// Returns the path of the backing data file.
    pub fn path(&self) -> &Path {
        &self.settings.path
    }

    async fn persist(&self, records: &Records) -> Result<()> {
        let bytes = if self.settings.pretty {
            serde_json::to_vec_pretty(records)
        } else {
            serde_json::to_vec(records)
        }
        .map_err(|e| StorageError::Serialization(e.to_string()))?;

        tokio::fs::write(&self.settings.path, bytes)
            .await
            .inspect_err(|e| {
                error!(path = %self.settings.path.display(), error = %e, "failed to write data file");
            })?;

        debug!(path = %self.settings.path.display(), count = records.len(), "data file written");
        Ok(())
    }
}

async fn load(path: &Path) -> Records {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "data file not found, starting empty");
            return Records::new();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "data file unreadable, starting empty");
            return Records::new();
        }
    };

    match serde_json::from_slice::<Records>(&bytes) {
        Ok(records) => {
            info!(path = %path.display(), count = records.len(), "loaded short codes");
            records
        }
        Err(e) => {
            match first_invalid_entry(&bytes) {
                Some(key) => {
                    error!(path = %path.display(), code = %key, error = %e, "data file holds an invalid record")
                }
                None => error!(path = %path.display(), error = %e, "data file is not a valid record map"),
            }
            set_aside(path).await;
            Records::new()
        }
    }
}

/// Names the first entry that does not decode as a record, when the
/// document is at least a JSON object.
fn first_invalid_entry(bytes: &[u8]) -> Option<String> {
    let entries = serde_json::from_slice::<BTreeMap<String, serde_json::Value>>(bytes).ok()?;
    entries
        .into_iter()
        .find(|(_, value)| serde_json::from_value::<UrlRecord>(value.clone()).is_err())
        .map(|(key, _)| key)
}

/// Moves an unparseable data file out of the way so the first write does
/// not destroy it.
async fn set_aside(path: &Path) {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".invalid-{}", Timestamp::now().as_second()));
    let backup = PathBuf::from(name);

    match tokio::fs::rename(path, &backup).await {
        Ok(()) => warn!(
            path = %path.display(),
            backup = %backup.display(),
            "invalid data file moved aside, starting empty"
        ),
        Err(e) => error!(
            path = %path.display(),
            error = %e,
            "could not move invalid data file aside, starting empty; it will be overwritten"
        ),
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        Ok(self.records.lock().await.get(code.as_str()).cloned())
    }

    async fn put(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        let mut records = self.records.lock().await;
        records.insert(code.as_str().to_owned(), record);
        self.persist(&records).await
    }

    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        let mut records = self.records.lock().await;
        if records.contains_key(code.as_str()) {
            return Err(StorageError::Conflict(code.to_string()));
        }
        records.insert(code.as_str().to_owned(), record);
        self.persist(&records).await
    }

    async fn record_redirect(
        &self,
        code: &ShortCode,
        at: Timestamp,
    ) -> Result<Option<UrlRecord>> {
        let mut records = self.records.lock().await;
        let Some(record) = records.get_mut(code.as_str()) else {
            return Ok(None);
        };
        record.record_redirect(at);
        let updated = record.clone();
        self.persist(&records).await?;
        Ok(Some(updated))
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.records.lock().await.len())
    }
}
