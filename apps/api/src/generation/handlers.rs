//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};

use crate::errors::{AppError, JsonBody};
use crate::generation::models::{GeneratedContent, GenerationScope};
use crate::profile::ApplicationProfile;
use crate::state::AppState;

/// POST /api/generate
///
/// Generates both the resume narrative and the cover letter.
/// Requires `personal.fullName` and `jobRole.title`.
pub async fn handle_generate(
    State(state): State<AppState>,
    JsonBody(profile): JsonBody<ApplicationProfile>,
) -> Result<Json<GeneratedContent>, AppError> {
    generate(&state, &profile, GenerationScope::Both).await
}

/// POST /api/generate/resume
///
/// Returns `{resume}` only. Requires `personal.fullName`.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    JsonBody(profile): JsonBody<ApplicationProfile>,
) -> Result<Json<GeneratedContent>, AppError> {
    generate(&state, &profile, GenerationScope::Resume).await
}

/// POST /api/generate/cover-letter
///
/// Returns `{coverLetter}` only. Requires `personal.fullName` and `jobRole.title`.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    JsonBody(profile): JsonBody<ApplicationProfile>,
) -> Result<Json<GeneratedContent>, AppError> {
    generate(&state, &profile, GenerationScope::CoverLetter).await
}

async fn generate(
    state: &AppState,
    profile: &ApplicationProfile,
    scope: GenerationScope,
) -> Result<Json<GeneratedContent>, AppError> {
    let content = state.generation.generate(profile, scope).await?;
    Ok(Json(content))
}
