use crate::error::StorageError;
use crate::record::UrlRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::Timestamp;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// The mapping from short code to [`UrlRecord`] and its persistence.
///
/// Every mutating call is applied to the whole mapping and persisted
/// before it returns.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Retrieves the record for an exact, case-sensitive match of `code`.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;

    /// Inserts or overwrites the record for `code`.
    async fn put(&self, code: &ShortCode, record: UrlRecord) -> Result<()>;

    /// Inserts a new record. Returns `Err(Conflict)` if the code already exists,
    /// leaving the existing record untouched.
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()>;

    /// Registers one redirect of `code` at `at` and returns the updated record.
    /// Returns `None` if the code does not exist.
    async fn record_redirect(&self, code: &ShortCode, at: Timestamp)
        -> Result<Option<UrlRecord>>;

    /// Number of short codes currently stored.
    async fn len(&self) -> Result<usize>;

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}
