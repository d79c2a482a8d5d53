use async_trait::async_trait;
use jiff::Timestamp;
use std::sync::Arc;
use tinylink_core::{ShortCode, ShortenParams, Shortener, ShortenerError, Store, UrlRecord};
use tinylink_generator::Generator;
use tracing::{debug, info, trace, warn};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Store` and a `Generator` to handle:
/// - URL presence checks
/// - Custom short code validation and conflict detection
/// - Redirect accounting
///
/// Note: generated short codes are not checked against the store. If the
/// generator returns a code that is already taken, the existing record is
/// replaced by the new one.
#[derive(Debug)]
pub struct ShortenerService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
}

impl<S, G> Clone for ShortenerService<S, G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<S: Store, G: Generator> ShortenerService<S, G> {
    /// Creates a new `ShortenerService`.
    pub fn new(store: S, generator: G) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
        }
    }

    /// Returns the URL if it is present and non-empty.
    fn require_url(url: Option<String>) -> Result<String, ShortenerError> {
        url.filter(|url| !url.is_empty())
            .ok_or(ShortenerError::MissingUrl)
    }
}

#[async_trait]
impl<S: Store, G: Generator> Shortener for ShortenerService<S, G> {
    async fn shorten(&self, params: ShortenParams) -> Result<ShortCode, ShortenerError> {
        let url = Self::require_url(params.url)?;
        let record = UrlRecord::new(url, Timestamp::now());

        match params.shortcode.filter(|code| !code.is_empty()) {
            Some(raw) => {
                let code = ShortCode::new(raw)?;
                // insert rejects taken codes without touching the existing record
                self.store.insert(&code, record).await?;
                info!(code = %code, "created custom short code");
                Ok(code)
            }
            None => {
                let code = self.generator.generate();
                if let Some(existing) = self.store.get(&code).await? {
                    warn!(
                        code = %code,
                        replaced_url = %existing.url,
                        "generated short code collides with an existing one, overwriting"
                    );
                }
                self.store.put(&code, record).await?;
                info!(code = %code, "created generated short code");
                Ok(code)
            }
        }
    }

    async fn redirect(&self, code: &ShortCode) -> Result<Option<UrlRecord>, ShortenerError> {
        trace!(code = %code, "following short code");

        let record = self.store.record_redirect(code, Timestamp::now()).await?;
        match &record {
            Some(record) => {
                debug!(code = %code, url = %record.url, count = record.redirect_count, "redirecting")
            }
            None => trace!(code = %code, "short code not found"),
        }
        Ok(record)
    }

    async fn stats(&self, code: &ShortCode) -> Result<Option<UrlRecord>, ShortenerError> {
        Ok(self.store.get(code).await?)
    }

    async fn count(&self) -> Result<usize, ShortenerError> {
        Ok(self.store.len().await?)
    }
}
