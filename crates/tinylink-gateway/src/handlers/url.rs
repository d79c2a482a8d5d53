use crate::error::{AppError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse, StatsResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tinylink_core::ShortCode;

pub async fn create_url_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<Json<CreateUrlResponse>> {
    let Json(request) = payload?;
    let code = state.shortener().shorten(request.into()).await?;
    Ok(Json(CreateUrlResponse {
        shortcode: code.to_string(),
    }))
}

pub async fn redirect_handler(
    Path(shortcode): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    // malformed codes are never stored, so the lookup alone decides the 404
    let code = ShortCode::new_unchecked(shortcode);
    let record = state
        .shortener()
        .redirect(&code)
        .await?
        .ok_or(AppError::ShortCodeNotFound)?;

    let location = HeaderValue::try_from(encode_location(&record.url))
        .map_err(|e| AppError::Internal(format!("invalid redirect target: {e}")))?;
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// `shorten` is never a valid code, so a GET on it is a plain miss.
pub async fn shorten_lookup_handler() -> AppError {
    AppError::ShortCodeNotFound
}

pub async fn stats_handler(
    Path(shortcode): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>> {
    let code = ShortCode::new_unchecked(shortcode);
    let record = state
        .shortener()
        .stats(&code)
        .await?
        .ok_or(AppError::ShortCodeNotFound)?;
    Ok(Json(record.into()))
}

/// Bytes that may not appear verbatim in a `Location` header value.
///
/// Stored URLs are taken as given, so they can hold spaces, control
/// characters or non-ASCII text; non-ASCII is always encoded.
const LOCATION: &AsciiSet = &CONTROLS.add(b' ');

fn encode_location(url: &str) -> String {
    utf8_percent_encode(url, LOCATION).to_string()
}
