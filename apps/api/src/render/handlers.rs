//! Axum route handler for the Download API.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use crate::errors::{AppError, JsonBody};
use crate::generation::models::GeneratedContent;
use crate::profile::ApplicationProfile;
use crate::render::{self, DocumentKind, MISSING_NAME_MESSAGE};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadRequest {
    /// Kept as text so an unknown value is a 400 with a specific message rather than
    /// a generic body rejection.
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ApplicationProfile,
    pub ai_content: Option<GeneratedContent>,
}

/// POST /api/download/pdf
///
/// Returns the rendered HTML as an attachment named `<Name>_<Type>.html`, with an
/// ASCII fallback name for clients that ignore `filename*`.
/// Checks `personal.fullName`, then `type`, then (cover letter only) `jobRole.title`.
pub async fn handle_download(
    JsonBody(req): JsonBody<DownloadRequest>,
) -> Result<Response, AppError> {
    if !req.data.has_full_name() {
        return Err(AppError::Validation(MISSING_NAME_MESSAGE.to_string()));
    }
    let kind: DocumentKind = req.kind.parse()?;

    let document = render::render(kind, &req.data, req.ai_content.as_ref())?;
    info!(
        kind = kind.as_str(),
        filename = %document.filename,
        bytes = document.html.len(),
        with_generated = req.ai_content.is_some(),
        "Rendered document"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, document.content_disposition()),
        ],
        document.html,
    )
        .into_response())
}
