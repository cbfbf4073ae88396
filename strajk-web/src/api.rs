//! Client for the remote booking endpoint.

use gloo_net::http::Request;
use strajk_core::{BookingDraft, Confirmation};
use thiserror::Error;

/// Base URL of the venue's booking endpoint.
pub const ENDPOINT: &str = "https://h5jbtjv6if.execute-api.eu-north-1.amazonaws.com";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request could not be sent: {0}")]
    Transport(String),
    #[error("booking endpoint answered with status {0}")]
    Status(u16),
    #[error("response body could not be decoded: {0}")]
    Decode(String),
}

/// Submit a validated draft; the endpoint answers with the priced
/// confirmation.
///
/// # Errors
/// Returns an [`ApiError`] when the request fails, the endpoint answers
/// with a non-success status, or the body is not a confirmation.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn submit_booking(draft: &BookingDraft) -> Result<Confirmation, ApiError> {
    let response = Request::post(ENDPOINT)
        .json(draft)
        .map_err(|err| ApiError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<Confirmation>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Ask the endpoint for the last confirmation it issued this session.
/// Answers `Ok(None)` when nothing has been booked yet (null body).
///
/// # Errors
/// Returns an [`ApiError`] when the request fails, the endpoint answers
/// with a non-success status, or the body cannot be decoded.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_confirmation() -> Result<Option<Confirmation>, ApiError> {
    let url = format!("{ENDPOINT}/confirmation");
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<Option<Confirmation>>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
