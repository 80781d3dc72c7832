//! Per-section completeness rules.
//!
//! These are advisory: they drive progress badges and the completion indicator and
//! never prevent saving or moving between sections.

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::profile::models::{
    Achievement, ApplicationProfile, Certification, EducationItem, ExperienceItem, JobRole,
    Links, PersonalInfo, Project, Skills,
};
use crate::profile::sections::SectionId;

const MIN_NAME_CHARS: usize = 2;
const MAX_NAME_CHARS: usize = 100;
const MIN_PHONE_CHARS: usize = 10;
const MAX_PHONE_CHARS: usize = 20;
const MAX_ADDRESS_CHARS: usize = 200;
const MIN_JOB_DESCRIPTION_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    /// Makes the section incomplete.
    Required,
    /// Shown inline only; the section can still be complete.
    Advisory,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub severity: IssueSeverity,
}

impl ValidationIssue {
    fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: IssueSeverity::Required,
        }
    }

    fn advisory(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: IssueSeverity::Advisory,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionValidation {
    pub section: SectionId,
    pub complete: bool,
    pub issues: Vec<ValidationIssue>,
}

/// Validates one section of `profile`.
pub fn validate_section(section: SectionId, profile: &ApplicationProfile) -> SectionValidation {
    let issues = match section {
        SectionId::Personal => validate_personal(&profile.personal),
        SectionId::Links => validate_links(&profile.links),
        SectionId::Education => validate_list(
            "education",
            "Please add at least one education entry",
            &profile.education,
            validate_education_item,
        ),
        SectionId::Skills => validate_skills(&profile.skills),
        SectionId::Experience => validate_list(
            "experience",
            "Please add at least one work experience",
            &profile.experience,
            validate_experience_item,
        ),
        SectionId::Projects => validate_list(
            "projects",
            "Add at least one project",
            &profile.projects,
            validate_project,
        ),
        SectionId::Certifications => validate_list(
            "certifications",
            "Add at least one certification",
            &profile.certifications,
            validate_certification,
        ),
        SectionId::Achievements => validate_list(
            "achievements",
            "Add at least one achievement",
            &profile.achievements,
            validate_achievement,
        ),
        SectionId::JobRole => validate_job_role(&profile.job_role),
    };

    let complete = !issues
        .iter()
        .any(|i| i.severity == IssueSeverity::Required);

    SectionValidation {
        section,
        complete,
        issues,
    }
}

pub fn is_complete(section: SectionId, profile: &ApplicationProfile) -> bool {
    validate_section(section, profile).complete
}

pub fn validate_personal(personal: &PersonalInfo) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let name_len = char_len(&personal.full_name);
    if name_len < MIN_NAME_CHARS {
        issues.push(ValidationIssue::required(
            "fullName",
            "Full name must be at least 2 characters",
        ));
    } else if name_len > MAX_NAME_CHARS {
        issues.push(ValidationIssue::required("fullName", "Full name is too long"));
    }

    if !EmailAddress::is_valid(personal.email.trim()) {
        issues.push(ValidationIssue::required(
            "email",
            "Please enter a valid email address",
        ));
    }

    let phone_len = char_len(&personal.phone);
    if phone_len < MIN_PHONE_CHARS {
        issues.push(ValidationIssue::required(
            "phone",
            "Please enter a valid phone number",
        ));
    } else if phone_len > MAX_PHONE_CHARS {
        issues.push(ValidationIssue::required("phone", "Phone number is too long"));
    }

    if char_len(&personal.address) > MAX_ADDRESS_CHARS {
        issues.push(ValidationIssue::required("address", "Address is too long"));
    }

    issues
}

/// Complete when at least one link is a valid URL. Malformed links are reported but
/// only as advisories.
pub fn validate_links(links: &Links) -> Vec<ValidationIssue> {
    let fields = [
        ("linkedin", links.linkedin.as_str()),
        ("github", links.github.as_str()),
        ("portfolio", links.portfolio.as_str()),
        ("other", links.other.as_str()),
    ];

    let mut issues = Vec::new();
    let mut any_valid = false;
    for (field, url) in fields {
        if url.trim().is_empty() {
            continue;
        }
        if is_valid_link(url) {
            any_valid = true;
        } else {
            issues.push(ValidationIssue::advisory(field, "Please enter a valid URL"));
        }
    }

    if !any_valid {
        issues.push(ValidationIssue::required(
            "linkedin",
            "Please provide at least one professional link",
        ));
    }
    issues
}

pub fn validate_skills(skills: &Skills) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if skills.technical.is_empty() {
        issues.push(ValidationIssue::required(
            "technical",
            "Please add at least one technical skill",
        ));
    }
    if skills.soft.is_empty() {
        issues.push(ValidationIssue::required(
            "soft",
            "Please add at least one soft skill",
        ));
    }
    issues
}

pub fn validate_education_item(item: &EducationItem) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    require_min(&mut issues, "school", &item.school, "School name is required");
    require_min(&mut issues, "degree", &item.degree, "Degree is required");
    require_min(&mut issues, "field", &item.field, "Field of study is required");

    let start = parse_year(&item.start_year);
    let end = parse_year(&item.end_year);
    if start.is_none() {
        issues.push(ValidationIssue::required("startYear", "Start year is required"));
    }
    if end.is_none() {
        issues.push(ValidationIssue::required("endYear", "End year is required"));
    }
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            issues.push(ValidationIssue::required(
                "endYear",
                "End year must be after start year",
            ));
        }
    }
    issues
}

pub fn validate_experience_item(item: &ExperienceItem) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    require_min(&mut issues, "company", &item.company, "Company name is required");
    require_min(&mut issues, "position", &item.position, "Position is required");
    if item.start_date.trim().is_empty() {
        issues.push(ValidationIssue::required("startDate", "Start date is required"));
    }

    let has_end = !item.end_date.trim().is_empty();
    if item.current == has_end {
        issues.push(ValidationIssue::required(
            "endDate",
            "Either mark as current position or provide end date",
        ));
    }

    if item.responsibilities.is_empty() {
        issues.push(ValidationIssue::required(
            "responsibilities",
            "Please add at least one responsibility",
        ));
    }
    issues
}

pub fn validate_project(item: &Project) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    require_present(&mut issues, "title", &item.title, "Project title is required");
    require_present(
        &mut issues,
        "description",
        &item.description,
        "Project description is required",
    );
    if item.technologies.is_empty() {
        issues.push(ValidationIssue::required(
            "technologies",
            "Please add at least one technology",
        ));
    }
    issues
}

pub fn validate_certification(item: &Certification) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    require_present(&mut issues, "name", &item.name, "Certification name is required");
    require_present(&mut issues, "issuer", &item.issuer, "Issuer is required");
    require_present(&mut issues, "date", &item.date, "Date is required");
    issues
}

pub fn validate_achievement(item: &Achievement) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    require_present(&mut issues, "title", &item.title, "Achievement title is required");
    require_present(
        &mut issues,
        "description",
        &item.description,
        "Achievement description is required",
    );
    require_present(&mut issues, "date", &item.date, "Date is required");
    issues
}

pub fn validate_job_role(job_role: &JobRole) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    require_min(&mut issues, "title", &job_role.title, "Job title is required");
    if char_len(&job_role.description) < MIN_JOB_DESCRIPTION_CHARS {
        issues.push(ValidationIssue::required(
            "description",
            "Please provide a more detailed job description (at least 50 characters)",
        ));
    }
    issues
}

/// Prefixes `https://` unless the link already starts with `http`.
pub fn normalize_link(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() || url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

pub fn is_valid_link(url: &str) -> bool {
    let normalized = normalize_link(url);
    !normalized.is_empty() && Url::parse(&normalized).is_ok()
}

fn validate_list<T>(
    section: &str,
    empty_message: &str,
    items: &[T],
    validate_item: fn(&T) -> Vec<ValidationIssue>,
) -> Vec<ValidationIssue> {
    if items.is_empty() {
        return vec![ValidationIssue::required(section, empty_message)];
    }

    items
        .iter()
        .enumerate()
        .flat_map(|(index, item)| {
            validate_item(item).into_iter().map(move |issue| ValidationIssue {
                field: format!("{section}[{index}].{}", issue.field),
                ..issue
            })
        })
        .collect()
}

fn require_min(issues: &mut Vec<ValidationIssue>, field: &str, value: &str, message: &str) {
    if char_len(value) < MIN_NAME_CHARS {
        issues.push(ValidationIssue::required(field, message));
    }
}

fn require_present(issues: &mut Vec<ValidationIssue>, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::required(field, message));
    }
}

fn parse_year(value: &str) -> Option<i32> {
    let value = value.trim();
    if value.chars().count() != 4 {
        return None;
    }
    value.parse().ok()
}

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}
