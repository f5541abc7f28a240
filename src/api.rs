//! Backend API Bindings
//!
//! Frontend bindings to the content service REST endpoints.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use crate::error::ApiError;
use crate::models::{ApiResponse, ContentItem};

/// Base URL of the content service. The backend runs on a fixed local
/// port; it is not configurable at runtime.
pub const API_BASE: &str = "http://localhost:5000";

fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Unwrap the `{ success, data, message }` envelope shared by every
/// endpoint, turning HTTP error statuses and `success: false` bodies
/// into [`ApiError::Server`].
async fn read_envelope<T: DeserializeOwned>(resp: Response) -> Result<ApiResponse<T>, ApiError> {
    let status = resp.status();
    if !resp.ok() {
        // Error bodies still use the envelope; fall back to the status line
        let message = match resp.json::<ApiResponse<serde_json::Value>>().await {
            Ok(body) => body
                .message
                .unwrap_or_else(|| format!("request failed with status {status}")),
            Err(_) => format!("request failed with status {status}"),
        };
        return Err(ApiError::Server { status, message });
    }

    let body: ApiResponse<T> = resp
        .json()
        .await
        .map_err(|e| ApiError::Unexpected(e.to_string()))?;
    if !body.success {
        let message = body
            .message
            .unwrap_or_else(|| "server reported failure".to_string());
        return Err(ApiError::Server { status, message });
    }
    Ok(body)
}

/// Probe backend reachability. Classification only; the caller decides
/// what to display.
pub async fn check_health() -> Result<(), ApiError> {
    let resp = Request::get(&endpoint("/health"))
        .send()
        .await
        .map_err(ApiError::from_transport)?;
    read_envelope::<serde_json::Value>(resp).await.map(|_| ())
}

/// Fetch the full content list.
pub async fn fetch_content() -> Result<Vec<ContentItem>, ApiError> {
    let resp = Request::get(&endpoint("/content"))
        .send()
        .await
        .map_err(ApiError::from_transport)?;
    let body = read_envelope::<Vec<ContentItem>>(resp).await?;
    body.data
        .ok_or_else(|| ApiError::Unexpected("response missing content list".to_string()))
}

/// Create a content item from the form fields and the picked image.
/// Returns the server-owned record, including its id and timestamp.
pub async fn create_content(
    title: &str,
    description: &str,
    image: &File,
) -> Result<ContentItem, ApiError> {
    let form = FormData::new().map_err(ApiError::from_js)?;
    form.append_with_str("title", title)
        .map_err(ApiError::from_js)?;
    form.append_with_str("description", description)
        .map_err(ApiError::from_js)?;
    form.append_with_blob_and_filename("image", image, &image.name())
        .map_err(ApiError::from_js)?;

    let resp = Request::post(&endpoint("/content"))
        .body(form)
        .map_err(ApiError::from_transport)?
        .send()
        .await
        .map_err(ApiError::from_transport)?;
    let body = read_envelope::<ContentItem>(resp).await?;
    body.data
        .ok_or_else(|| ApiError::Unexpected("response missing created item".to_string()))
}

/// Delete the content item with the given id.
pub async fn delete_content(id: u32) -> Result<(), ApiError> {
    let resp = Request::delete(&endpoint(&format!("/content/{id}")))
        .send()
        .await
        .map_err(ApiError::from_transport)?;
    read_envelope::<serde_json::Value>(resp).await.map(|_| ())
}
