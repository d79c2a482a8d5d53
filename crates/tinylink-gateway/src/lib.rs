//! HTTP gateway for the tinylink URL shortener.
//!
//! Exposes `POST /shorten`, `GET /{shortcode}`, `GET /{shortcode}/stats`
//! and `GET /healthz` on top of any [`tinylink_core::Shortener`].

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
