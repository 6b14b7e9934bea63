//! Client for the import endpoints.

use contracts::import::{ImportOutcome, SeedDemoResponse};
use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::shared::api_utils::{api_base, with_api_headers, ApiError};

/// Upload one file as the multipart `file` field.
///
/// The browser supplies the multipart boundary itself; setting Content-Type
/// here would break the upload. A 2xx body decodes into the tagged outcome,
/// so an unstructured success payload surfaces as `ImportOutcome::Failure`
/// for aggregation instead of an error.
pub async fn upload_file(file: &File) -> Result<ImportOutcome, ApiError> {
    let url = format!("{}/import", api_base()?);

    let form = FormData::new().map_err(|e| ApiError::Transport(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Transport(format!("{:?}", e)))?;

    let response = with_api_headers(Request::post(&url))?
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(ImportOutcome::from_response_text(&text))
}

/// Ask the backend to insert its demo rows. Only reachable when the
/// demo-seed flag is set on the embedding page.
pub async fn seed_demo() -> Result<SeedDemoResponse, ApiError> {
    let url = format!("{}/import/demo", api_base()?);

    let response = with_api_headers(Request::post(&url))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    response
        .json::<SeedDemoResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
