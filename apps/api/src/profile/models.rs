use serde::{Deserialize, Serialize};

use crate::profile::ordered_set::OrderedSet;

/// The full aggregate a user edits: career data plus the target job.
///
/// Every field is defaulted so partial request bodies and older drafts deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationProfile {
    pub personal: PersonalInfo,
    pub links: Links,
    pub education: Vec<EducationItem>,
    pub skills: Skills,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
    pub job_role: JobRole,
}

impl ApplicationProfile {
    pub fn full_name(&self) -> &str {
        self.personal.full_name.trim()
    }

    pub fn has_full_name(&self) -> bool {
        !self.full_name().is_empty()
    }

    pub fn has_job_title(&self) -> bool {
        !self.job_role.title.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Links {
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub other: String,
}

impl Links {
    /// `(label, url)` pairs in display order, including empty ones.
    pub fn labelled(&self) -> [(&'static str, &str); 4] {
        [
            ("LinkedIn", self.linkedin.as_str()),
            ("GitHub", self.github.as_str()),
            ("Portfolio", self.portfolio.as_str()),
            ("Profile", self.other.as_str()),
        ]
    }

    pub fn any(&self) -> bool {
        self.labelled().iter().any(|(_, url)| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationItem {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_year: String,
    pub end_year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skills {
    pub technical: OrderedSet<String>,
    pub soft: OrderedSet<String>,
}

impl Skills {
    pub fn add_technical(&mut self, skill: &str) -> bool {
        insert_trimmed(&mut self.technical, skill)
    }

    pub fn add_soft(&mut self, skill: &str) -> bool {
        insert_trimmed(&mut self.soft, skill)
    }

    pub fn remove_technical(&mut self, skill: &str) -> bool {
        self.technical.remove(&skill.to_string())
    }

    pub fn remove_soft(&mut self, skill: &str) -> bool {
        self.soft.remove(&skill.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty()
    }
}

/// One position held. `current` and a non-empty `end_date` are mutually exclusive;
/// use the setters to keep them that way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceItem {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub responsibilities: Vec<String>,
}

impl ExperienceItem {
    pub fn new(company: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
            ..Default::default()
        }
    }

    pub fn starting(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = start_date.into();
        self
    }

    pub fn with_current(mut self, current: bool) -> Self {
        self.set_current(current);
        self
    }

    pub fn ending(mut self, end_date: impl Into<String>) -> Self {
        self.set_end_date(end_date);
        self
    }

    pub fn with_responsibility(mut self, text: &str) -> Self {
        self.add_responsibility(text);
        self
    }

    /// Marking a position current clears its end date.
    pub fn set_current(&mut self, current: bool) {
        self.current = current;
        if current {
            self.end_date.clear();
        }
    }

    /// A non-empty end date clears the `current` flag.
    pub fn set_end_date(&mut self, end_date: impl Into<String>) {
        self.end_date = end_date.into();
        if !self.end_date.trim().is_empty() {
            self.current = false;
        }
    }

    /// Appends a trimmed responsibility. Blank text and exact duplicates are ignored.
    pub fn add_responsibility(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || self.responsibilities.iter().any(|r| r == text) {
            return false;
        }
        self.responsibilities.push(text.to_string());
        true
    }

    pub fn remove_responsibility(&mut self, index: usize) {
        remove_at(&mut self.responsibilities, index);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: OrderedSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Project {
    pub fn add_technology(&mut self, technology: &str) -> bool {
        insert_trimmed(&mut self.technologies, technology)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobRole {
    pub title: String,
    pub company: String,
    pub description: String,
}

/// Removes the entry at `index`. Out-of-range indexes are a no-op; list position is
/// the only identity entries have.
pub fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

fn insert_trimmed(set: &mut OrderedSet<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    set.insert(value.to_string())
}

/// Treats a blank optional string as absent.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_empty() {
        let p = ApplicationProfile::default();
        assert!(!p.has_full_name());
        assert!(p.experience.is_empty());
        assert!(p.skills.is_empty());
    }

    #[test]
    fn test_partial_json_deserializes_with_defaults() {
        let p: ApplicationProfile =
            serde_json::from_str(r#"{"personal":{"fullName":"Jane Doe"}}"#).unwrap();
        assert_eq!(p.full_name(), "Jane Doe");
        assert!(p.job_role.title.is_empty());
        assert!(p.education.is_empty());
    }

    #[test]
    fn test_camel_case_round_trip_shape() {
        let mut p = ApplicationProfile::default();
        p.job_role.title = "Backend Engineer".into();
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["jobRole"]["title"], "Backend Engineer");
        assert!(v["personal"].get("fullName").is_some());
    }

    #[test]
    fn test_set_current_clears_end_date() {
        let mut exp = ExperienceItem::new("Acme", "Dev").ending("2022-05");
        assert!(!exp.current);
        exp.set_current(true);
        assert!(exp.current);
        assert!(exp.end_date.is_empty());
    }

    #[test]
    fn test_set_end_date_clears_current() {
        let mut exp = ExperienceItem::new("Acme", "Dev").with_current(true);
        exp.set_end_date("2023-01");
        assert!(!exp.current);
        assert_eq!(exp.end_date, "2023-01");
    }

    #[test]
    fn test_blank_end_date_keeps_current() {
        let mut exp = ExperienceItem::new("Acme", "Dev").with_current(true);
        exp.set_end_date("");
        assert!(exp.current);
    }

    #[test]
    fn test_responsibilities_trim_and_remove() {
        let mut exp = ExperienceItem::new("Acme", "Dev");
        assert!(exp.add_responsibility("  Shipped features "));
        assert!(!exp.add_responsibility("   "));
        exp.add_responsibility("Fixed bugs");
        exp.remove_responsibility(0);
        exp.remove_responsibility(5);
        assert_eq!(exp.responsibilities, vec!["Fixed bugs".to_string()]);
    }

    #[test]
    fn test_responsibilities_reject_exact_duplicates() {
        let mut exp = ExperienceItem::new("Acme", "Dev").with_responsibility("Shipped features");
        assert!(!exp.add_responsibility("Shipped features"));
        assert!(!exp.add_responsibility("  Shipped features  "));
        assert!(exp.add_responsibility("shipped features"));
        assert_eq!(exp.responsibilities.len(), 2);
    }

    #[test]
    fn test_skills_trim_and_dedup() {
        let mut skills = Skills::default();
        assert!(skills.add_technical(" Go "));
        assert!(!skills.add_technical("Go"));
        assert!(!skills.add_soft(""));
        assert!(skills.add_soft("Communication"));
        assert!(skills.remove_technical("Go"));
        assert!(skills.technical.is_empty());
    }

    #[test]
    fn test_project_technologies_dedup() {
        let mut project = Project::default();
        project.add_technology("Rust");
        project.add_technology("Rust");
        project.add_technology("Axum");
        assert_eq!(project.technologies.len(), 2);
    }

    #[test]
    fn test_links_any() {
        let mut links = Links::default();
        assert!(!links.any());
        links.other = "example.com".into();
        assert!(links.any());
    }
}
