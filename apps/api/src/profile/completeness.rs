use serde::{Deserialize, Serialize};

use crate::profile::models::ApplicationProfile;
use crate::profile::sections::SectionId;
use crate::profile::validation::is_complete;

/// A single unit of the completion rubric.
type Check = fn(&ApplicationProfile) -> bool;

/// Fixed 14-unit rubric behind the completion indicator.
const COMPLETION_RUBRIC: &[(&str, Check)] = &[
    // Personal info (required)
    ("personal.fullName", |p| filled(&p.personal.full_name)),
    ("personal.email", |p| filled(&p.personal.email)),
    ("personal.phone", |p| filled(&p.personal.phone)),
    ("personal.address", |p| filled(&p.personal.address)),
    // Job role (required)
    ("jobRole.title", |p| filled(&p.job_role.title)),
    ("jobRole.company", |p| filled(&p.job_role.company)),
    ("jobRole.description", |p| filled(&p.job_role.description)),
    // Skills (recommended)
    ("skills.technical", |p| !p.skills.technical.is_empty()),
    ("skills.soft", |p| !p.skills.soft.is_empty()),
    // Links (optional but valuable)
    ("links.profile", |p| {
        filled(&p.links.linkedin) || filled(&p.links.github) || filled(&p.links.portfolio)
    }),
    ("links.other", |p| filled(&p.links.other)),
    // Lists
    ("experience", |p| !p.experience.is_empty()),
    ("education", |p| !p.education.is_empty()),
    ("projects", |p| !p.projects.is_empty()),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionStatus {
    pub section: SectionId,
    pub label: String,
    pub complete: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Rubric-based completion, 0 – 100.
    pub completion_percentage: u8,
    /// Completed sections / all sections, 0 – 100.
    pub section_progress: u8,
    pub sections: Vec<SectionStatus>,
}

/// Rounded percentage of rubric units satisfied by `profile`.
pub fn completion_percentage(profile: &ApplicationProfile) -> u8 {
    let completed = COMPLETION_RUBRIC
        .iter()
        .filter(|(_, check)| check(profile))
        .count();
    percent(completed, COMPLETION_RUBRIC.len())
}

/// Completion badge for every section, in wizard order.
pub fn section_statuses(profile: &ApplicationProfile) -> Vec<SectionStatus> {
    SectionId::ALL
        .iter()
        .map(|&section| SectionStatus {
            section,
            label: section.label().to_string(),
            complete: is_complete(section, profile),
        })
        .collect()
}

pub fn section_progress(profile: &ApplicationProfile) -> u8 {
    let statuses = section_statuses(profile);
    let complete = statuses.iter().filter(|s| s.complete).count();
    percent(complete, statuses.len())
}

pub fn progress_report(profile: &ApplicationProfile) -> ProgressReport {
    let sections = section_statuses(profile);
    let complete = sections.iter().filter(|s| s.complete).count();
    ProgressReport {
        completion_percentage: completion_percentage(profile),
        section_progress: percent(complete, sections.len()),
        sections,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReadiness {
    pub ready: bool,
    /// Missing required fields.
    pub errors: Vec<String>,
    /// Gaps that weaken the generated documents but do not prevent generation.
    pub recommendations: Vec<String>,
}

/// Pre-flight check shown before the user asks for generated documents.
pub fn generation_readiness(profile: &ApplicationProfile) -> GenerationReadiness {
    let mut errors = Vec::new();
    let mut recommendations = Vec::new();

    if !profile.has_full_name() {
        errors.push("Full name is required".to_string());
    }
    if !filled(&profile.personal.email) {
        errors.push("Email is required".to_string());
    }
    if !profile.has_job_title() {
        errors.push("Target job title is required".to_string());
    }

    if profile.skills.technical.is_empty() {
        recommendations.push("At least one technical skill is recommended".to_string());
    }
    if profile.experience.is_empty() {
        recommendations.push("At least one work experience is recommended".to_string());
    }

    GenerationReadiness {
        ready: errors.is_empty(),
        errors,
        recommendations,
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u8
}
