mod health;
mod url;

pub use health::health_handler;
pub use url::{create_url_handler, redirect_handler, shorten_lookup_handler, stats_handler};
