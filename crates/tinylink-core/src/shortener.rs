use crate::error::ShortenerError;
use crate::record::UrlRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ShortenerError>;

/// Parameters for creating a shortened URL, as received from the caller.
///
/// Both fields are raw; validation belongs to [`Shortener::shorten`].
#[derive(Debug, Clone, Default)]
pub struct ShortenParams {
    /// The URL to be shortened. `None` or empty is rejected.
    pub url: Option<String>,
    /// Optional caller-chosen short code. Empty is treated as absent.
    pub shortcode: Option<String>,
}

impl ShortenParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            shortcode: None,
        }
    }

    pub fn with_shortcode(mut self, shortcode: impl Into<String>) -> Self {
        self.shortcode = Some(shortcode.into());
        self
    }
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Creates a shortened URL and returns its short code.
    async fn shorten(&self, params: ShortenParams) -> Result<ShortCode>;

    /// Follows a short code: counts the redirect and returns the updated record.
    /// Returns `None` if the code does not exist.
    async fn redirect(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;

    /// Returns the record for a short code without touching it.
    /// Returns `None` if the code does not exist.
    async fn stats(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;

    /// Number of short codes currently known.
    async fn count(&self) -> Result<usize>;
}
