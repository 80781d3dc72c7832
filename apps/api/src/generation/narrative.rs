//! Narrative generation: pluggable, trait-based producer of resume and cover-letter
//! text from a profile.
//!
//! Default: `TemplateNarrator` (pure-Rust, deterministic, no external call).
//! A model-backed implementation can be swapped in through `AppState` without
//! changing `ContentGenerationService` or the handlers.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::generation::models::{
    CoverLetterContent, EnhancedExperience, EnhancedProject, ResumeContent,
};
use crate::generation::templates::*;
use crate::profile::models::{ExperienceItem, Project};
use crate::profile::ApplicationProfile;

/// The narrative generation capability.
///
/// Implementations must keep `enhanced_experience` / `enhanced_projects` 1:1 and in
/// order with the profile's lists; the renderer pairs them by index.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn resume(&self, profile: &ApplicationProfile) -> Result<ResumeContent, AppError>;

    async fn cover_letter(
        &self,
        profile: &ApplicationProfile,
    ) -> Result<CoverLetterContent, AppError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

/// Fills fixed sentence templates with profile data. Same input, same bytes out.
pub struct TemplateNarrator;

#[async_trait]
impl NarrativeGenerator for TemplateNarrator {
    async fn resume(&self, profile: &ApplicationProfile) -> Result<ResumeContent, AppError> {
        Ok(compose_resume(profile))
    }

    async fn cover_letter(
        &self,
        profile: &ApplicationProfile,
    ) -> Result<CoverLetterContent, AppError> {
        Ok(compose_cover_letter(profile))
    }

    fn backend(&self) -> &'static str {
        "template"
    }
}

pub fn compose_resume(profile: &ApplicationProfile) -> ResumeContent {
    ResumeContent {
        summary: compose_summary(profile),
        enhanced_experience: profile.experience.iter().map(enhance_experience).collect(),
        enhanced_projects: profile.projects.iter().map(enhance_project).collect(),
    }
}

fn compose_summary(profile: &ApplicationProfile) -> String {
    let field = profile
        .education
        .first()
        .map(|e| e.field.trim())
        .filter(|f| !f.is_empty())
        .unwrap_or(FALLBACK_FIELD);

    SUMMARY_TEMPLATE
        .replace("{job_title}", profile.job_role.title.trim())
        .replace(
            "{top_technical}",
            &join_or(profile.skills.technical.first_n(3), ", ", FALLBACK_SKILLS),
        )
        .replace("{field}", field)
        .replace(
            "{top_soft}",
            &join_or(profile.skills.soft.first_n(2), " and ", FALLBACK_SOFT_SKILLS),
        )
}

fn enhance_experience(item: &ExperienceItem) -> EnhancedExperience {
    EnhancedExperience {
        company: item.company.clone(),
        position: item.position.clone(),
        start_date: item.start_date.clone(),
        end_date: item.end_date.clone(),
        current: item.current,
        enhanced_responsibilities: item
            .responsibilities
            .iter()
            .map(|r| RESPONSIBILITY_TEMPLATE.replace("{responsibility}", r))
            .collect(),
    }
}

fn enhance_project(project: &Project) -> EnhancedProject {
    EnhancedProject {
        title: project.title.clone(),
        enhanced_description: PROJECT_DESCRIPTION_TEMPLATE
            .replace("{description}", project.description.trim())
            .replace(
                "{technologies}",
                &join_or(project.technologies.first_n(2), " and ", FALLBACK_SKILLS),
            ),
        technologies: project.technologies.iter().cloned().collect(),
        impact: PROJECT_IMPACT.to_string(),
    }
}

pub fn compose_cover_letter(profile: &ApplicationProfile) -> CoverLetterContent {
    let technical = &profile.skills.technical;
    let company = profile.job_role.company.trim();

    let at_company = if company.is_empty() {
        String::new()
    } else {
        format!(" at {company}")
    };
    let organization = if company.is_empty() {
        FALLBACK_ORGANIZATION.to_string()
    } else {
        format!("{company}'s")
    };

    let opening = OPENING_TEMPLATE
        .replace("{job_title}", profile.job_role.title.trim())
        .replace("{at_company}", &at_company);

    let body_paragraphs = vec![
        BACKGROUND_TEMPLATE.replace(
            "{top_technical}",
            &join_or(technical.first_n(3), ", ", FALLBACK_SKILLS),
        ),
        EXPERTISE_TEMPLATE.replace(
            "{broad_technical}",
            &join_or(technical.first_n(5), ", ", FALLBACK_SKILLS),
        ),
        MOTIVATION_TEMPLATE.replace(
            "{primary_skill}",
            technical.first().map(String::as_str).unwrap_or(FALLBACK_SKILLS),
        ),
    ];

    let strong_closing = CLOSING_TEMPLATE.replace("{organization}", &organization);

    let mut paragraphs = vec![
        SALUTATION.to_string(),
        format!("{opening} {}", body_paragraphs[0]),
        format!("{} {}", body_paragraphs[1], body_paragraphs[2]),
    ];
    if let Some(first) = profile.experience.first() {
        let responsibility = first
            .responsibilities
            .first()
            .map(|r| r.trim().to_lowercase())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| FALLBACK_RESPONSIBILITY.to_string());
        paragraphs.push(
            EXPERIENCE_TEMPLATE
                .replace("{company}", first.company.trim())
                .replace("{responsibility}", &responsibility),
        );
    }
    paragraphs.push(strong_closing.clone());
    paragraphs.push(format!("{SIGN_OFF}\n{}", profile.full_name()));

    CoverLetterContent {
        content: paragraphs.join("\n\n"),
        personalized_opening: format!("{SALUTATION}\n\n{opening}"),
        body_paragraphs,
        strong_closing,
    }
}

fn join_or(items: &[String], separator: &str, fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(separator)
    }
}
