use serde::{Deserialize, Serialize};

/// Narrative text derived from a profile.
///
/// Returned by the generation endpoints and accepted back, possibly partial, by the
/// download endpoint. Each half is present only when it was generated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratedContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumeContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<CoverLetterContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeContent {
    pub summary: String,
    /// One entry per experience item, same order as the profile.
    pub enhanced_experience: Vec<EnhancedExperience>,
    /// One entry per project, same order as the profile.
    pub enhanced_projects: Vec<EnhancedProject>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnhancedExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub enhanced_responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnhancedProject {
    pub title: String,
    pub enhanced_description: String,
    pub technologies: Vec<String>,
    pub impact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverLetterContent {
    /// The full letter, paragraphs separated by blank lines.
    pub content: String,
    pub personalized_opening: String,
    pub body_paragraphs: Vec<String>,
    pub strong_closing: String,
}

/// Which documents a generation request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationScope {
    Both,
    Resume,
    CoverLetter,
}

impl GenerationScope {
    pub fn includes_resume(self) -> bool {
        matches!(self, GenerationScope::Both | GenerationScope::Resume)
    }

    pub fn includes_cover_letter(self) -> bool {
        matches!(self, GenerationScope::Both | GenerationScope::CoverLetter)
    }

    /// Cover letters are addressed to a role, so they need a target title.
    pub fn requires_job_title(self) -> bool {
        self.includes_cover_letter()
    }
}
