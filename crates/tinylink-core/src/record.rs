use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored URL record, one per short code.
///
/// The serialized form is the on-disk format of the data file:
/// `{"url": ..., "created": ..., "lastRedirect": ..., "redirectCount": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    /// The destination URL.
    pub url: String,
    /// When the record was created. Never changes afterwards.
    #[serde(deserialize_with = "iso8601::deserialize")]
    pub created: Timestamp,
    /// When the short code was last followed, if ever.
    #[serde(default, deserialize_with = "iso8601::deserialize_option")]
    pub last_redirect: Option<Timestamp>,
    /// How many times the short code has been followed.
    #[serde(default)]
    pub redirect_count: u64,
}

impl UrlRecord {
    /// Creates a record that has never been redirected.
    pub fn new(url: impl Into<String>, created: Timestamp) -> Self {
        Self {
            url: url.into(),
            created,
            last_redirect: None,
            redirect_count: 0,
        }
    }

    /// Registers one redirect that happened at `at`.
    pub fn record_redirect(&mut self, at: Timestamp) {
        self.last_redirect = Some(at);
        self.redirect_count += 1;
    }
}

/// Timestamp parsing that also accepts offset-less datetimes, read as UTC.
mod iso8601 {
    use jiff::civil::DateTime;
    use jiff::tz::TimeZone;
    use jiff::Timestamp;
    use serde::{Deserialize, Deserializer};

    pub(super) fn parse(raw: &str) -> Result<Timestamp, jiff::Error> {
        match raw.parse::<Timestamp>() {
            Ok(ts) => Ok(ts),
            Err(err) => {
                let civil = raw.parse::<DateTime>().map_err(|_| err)?;
                Ok(civil.to_zoned(TimeZone::UTC)?.timestamp())
            }
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub(super) fn deserialize_option<'de, D>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}
