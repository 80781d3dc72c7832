// Document rendering: profile (+ optional generated content) to a self-contained
// HTML document ready for download or print-to-PDF.

pub mod cover_letter;
pub mod handlers;
pub mod html;
pub mod resume;
pub mod styles;

use std::str::FromStr;

use chrono::{Local, NaiveDate};
use url::form_urlencoded;

use crate::errors::AppError;
use crate::generation::models::GeneratedContent;
use crate::profile::ApplicationProfile;

pub const INVALID_KIND_MESSAGE: &str = "Invalid type. Must be one of: resume, cover-letter, both";
pub const MISSING_NAME_MESSAGE: &str = "Missing required field: personal.fullName is required";
pub const MISSING_TITLE_MESSAGE: &str =
    "Missing required field: jobRole.title is required for cover letter";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    CoverLetter,
    /// Renders the resume only.
    Both,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover-letter",
            DocumentKind::Both => "both",
        }
    }

    fn filename_suffix(&self) -> &'static str {
        match self {
            DocumentKind::CoverLetter => "Cover_Letter",
            DocumentKind::Resume | DocumentKind::Both => "Resume",
        }
    }
}

impl FromStr for DocumentKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resume" => Ok(DocumentKind::Resume),
            "cover-letter" => Ok(DocumentKind::CoverLetter),
            "both" => Ok(DocumentKind::Both),
            _ => Err(AppError::Validation(INVALID_KIND_MESSAGE.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// `<Name>_<Type>.html` with the name as entered, whitespace runs as `_`.
    pub filename: String,
    /// Printable-ASCII form of `filename` for clients that ignore `filename*`.
    pub ascii_filename: String,
    pub html: String,
}

impl RenderedDocument {
    /// `attachment` disposition carrying both the ASCII and the UTF-8 filename
    /// (RFC 6266 / RFC 5987).
    pub fn content_disposition(&self) -> String {
        let encoded: String = form_urlencoded::byte_serialize(self.filename.as_bytes())
            .collect::<String>()
            .replace('*', "%2A");
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{encoded}",
            self.ascii_filename
        )
    }
}

/// Renders with today's local date on the cover letter.
pub fn render(
    kind: DocumentKind,
    profile: &ApplicationProfile,
    content: Option<&GeneratedContent>,
) -> Result<RenderedDocument, AppError> {
    render_on(kind, profile, content, Local::now().date_naive())
}

pub fn render_on(
    kind: DocumentKind,
    profile: &ApplicationProfile,
    content: Option<&GeneratedContent>,
    date: NaiveDate,
) -> Result<RenderedDocument, AppError> {
    validate_render_request(kind, profile)?;

    let html = match kind {
        DocumentKind::CoverLetter => cover_letter::render_cover_letter(
            profile,
            content.and_then(|c| c.cover_letter.as_ref()),
            date,
        ),
        DocumentKind::Resume | DocumentKind::Both => {
            resume::render_resume(profile, content.and_then(|c| c.resume.as_ref()))
        }
    }
    .map_err(|e| AppError::Render(format!("failed to write {} document: {e}", kind.as_str())))?;

    Ok(RenderedDocument {
        filename: download_filename(profile.full_name(), kind),
        ascii_filename: ascii_download_filename(profile.full_name(), kind),
        html,
    })
}

pub fn validate_render_request(
    kind: DocumentKind,
    profile: &ApplicationProfile,
) -> Result<(), AppError> {
    if !profile.has_full_name() {
        return Err(AppError::Validation(MISSING_NAME_MESSAGE.to_string()));
    }
    if kind == DocumentKind::CoverLetter && !profile.has_job_title() {
        return Err(AppError::Validation(MISSING_TITLE_MESSAGE.to_string()));
    }
    Ok(())
}

/// `Jane  Doe` + cover letter → `Jane_Doe_Cover_Letter.html`. Non-ASCII letters are
/// kept as entered.
pub fn download_filename(full_name: &str, kind: DocumentKind) -> String {
    let stem = filename_stem(full_name);
    let stem = if stem.is_empty() { "Document" } else { stem.as_str() };
    format!("{stem}_{}.html", kind.filename_suffix())
}

/// Same as `download_filename`, reduced to characters that are safe inside a quoted
/// `Content-Disposition` filename.
pub fn ascii_download_filename(full_name: &str, kind: DocumentKind) -> String {
    let stem: String = filename_stem(full_name)
        .chars()
        .filter(|c| c.is_ascii_graphic() && *c != '"' && *c != '\\')
        .collect();
    let stem = if stem.is_empty() { "Document" } else { stem.as_str() };
    format!("{stem}_{}.html", kind.filename_suffix())
}

fn filename_stem(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}
