use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tinylink_core::{ShortenParams, UrlRecord};

/// Body of `POST /shorten`.
///
/// Both fields are optional at the wire level so that a missing URL is
/// reported as such instead of as a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateUrlRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub shortcode: Option<String>,
}

impl From<CreateUrlRequest> for ShortenParams {
    fn from(value: CreateUrlRequest) -> Self {
        ShortenParams {
            url: value.url,
            shortcode: value.shortcode,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateUrlResponse {
    pub shortcode: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub created: Timestamp,
    pub last_redirect: Option<Timestamp>,
    pub redirect_count: u64,
}

impl From<UrlRecord> for StatsResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            created: record.created,
            last_redirect: record.last_redirect,
            redirect_count: record.redirect_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
