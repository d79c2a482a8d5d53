use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Number of short codes currently stored.
    pub shortcodes: usize,
}
