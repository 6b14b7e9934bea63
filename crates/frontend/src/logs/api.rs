//! Client for the log endpoints of the REST service.

use contracts::logs::{BodyPart, BodyPayload, LogEntry};
use gloo_net::http::Request;

use crate::logs::filter::FilterCriteria;
use crate::shared::api_utils::{api_base, with_api_headers, ApiError};

/// Fetch one page of log rows. Only constrained criteria become query
/// parameters; `limit` and `offset` are always present.
pub async fn fetch_logs(
    criteria: &FilterCriteria,
    limit: usize,
    offset: usize,
) -> Result<Vec<LogEntry>, ApiError> {
    let mut params = format!("limit={}&offset={}", limit, offset);
    for (key, value) in criteria.query_pairs() {
        params += &format!("&{}={}", key, urlencoding::encode(&value));
    }
    let url = format!("{}/logs?{}", api_base()?, params);

    let response = with_api_headers(Request::get(&url))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    response
        .json::<Vec<LogEntry>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the stored request or response body for one row.
///
/// 404 maps to `ApiError::NotFound`: the backend may have dropped the body
/// even though the row's presence flag said otherwise, and callers render a
/// placeholder for that case.
pub async fn fetch_body(id: i64, part: BodyPart) -> Result<BodyPayload, ApiError> {
    let url = format!("{}/logs/{}/body?part={}", api_base()?, id, part.as_str());

    let response = with_api_headers(Request::get(&url))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if response.status() == 404 {
        return Err(ApiError::NotFound);
    }
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    response
        .json::<BodyPayload>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Persist a row's read flag. Fire-and-forget from the list's perspective:
/// the optimistic client state is not rolled back on failure.
pub async fn mark_read(id: i64, is_read: bool) -> Result<(), ApiError> {
    let url = format!("{}/logs/{}/read", api_base()?, id);

    let response = with_api_headers(Request::patch(&url))?
        .json(&serde_json::json!({ "is_read": is_read }))
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    Ok(())
}
