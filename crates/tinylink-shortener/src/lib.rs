//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], the create / redirect / stats
//! policy on top of any [`tinylink_core::Store`] and
//! [`tinylink_generator::Generator`]. Core types are re-exported from
//! `tinylink_core`.

pub mod service;

pub use service::ShortenerService;
pub use tinylink_core::{ShortenParams, Shortener, ShortenerError};
