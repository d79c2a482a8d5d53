//! Core types and traits for the tinylink URL shortener.
//!
//! This crate provides the shared vocabulary used by the storage backends,
//! the shortener service and the HTTP gateway.

pub mod error;
pub mod record;
pub mod shortcode;
pub mod shortener;
pub mod store;

pub use error::{CoreError, ShortenerError, StorageError};
pub use record::UrlRecord;
pub use shortcode::ShortCode;
pub use shortener::{ShortenParams, Shortener};
pub use store::Store;
