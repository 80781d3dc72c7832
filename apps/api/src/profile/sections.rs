use serde::{Deserialize, Serialize};

use crate::profile::models::{
    Achievement, ApplicationProfile, Certification, EducationItem, ExperienceItem, JobRole,
    Links, PersonalInfo, Project, Skills,
};

/// The nine independently editable sections, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Personal,
    Links,
    Education,
    Skills,
    Experience,
    Projects,
    Certifications,
    Achievements,
    JobRole,
}

impl SectionId {
    pub const ALL: [SectionId; 9] = [
        SectionId::Personal,
        SectionId::Links,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Certifications,
        SectionId::Achievements,
        SectionId::JobRole,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Personal => "Personal Info",
            SectionId::Links => "Links",
            SectionId::Education => "Education",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Certifications => "Certifications",
            SectionId::Achievements => "Achievements",
            SectionId::JobRole => "Target Job",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SectionId::Personal => "Basic contact information",
            SectionId::Links => "Professional profiles and portfolios",
            SectionId::Education => "Academic qualifications",
            SectionId::Skills => "Technical and soft skills",
            SectionId::Experience => "Work history and roles",
            SectionId::Projects => "Notable projects and contributions",
            SectionId::Certifications => "Professional certifications",
            SectionId::Achievements => "Awards and accomplishments",
            SectionId::JobRole => "Job role you're applying for",
        }
    }

    pub fn index(self) -> usize {
        SectionId::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Option<SectionId> {
        SectionId::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<SectionId> {
        self.index()
            .checked_sub(1)
            .and_then(|i| SectionId::ALL.get(i).copied())
    }
}

/// A complete replacement value for one section. There is no partial merge: callers
/// build the whole section value first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "value", rename_all = "kebab-case")]
pub enum SectionUpdate {
    Personal(PersonalInfo),
    Links(Links),
    Education(Vec<EducationItem>),
    Skills(Skills),
    Experience(Vec<ExperienceItem>),
    Projects(Vec<Project>),
    Certifications(Vec<Certification>),
    Achievements(Vec<Achievement>),
    JobRole(JobRole),
}

impl SectionUpdate {
    pub fn section(&self) -> SectionId {
        match self {
            SectionUpdate::Personal(_) => SectionId::Personal,
            SectionUpdate::Links(_) => SectionId::Links,
            SectionUpdate::Education(_) => SectionId::Education,
            SectionUpdate::Skills(_) => SectionId::Skills,
            SectionUpdate::Experience(_) => SectionId::Experience,
            SectionUpdate::Projects(_) => SectionId::Projects,
            SectionUpdate::Certifications(_) => SectionId::Certifications,
            SectionUpdate::Achievements(_) => SectionId::Achievements,
            SectionUpdate::JobRole(_) => SectionId::JobRole,
        }
    }

    /// Replaces the matching section of `profile` wholesale.
    pub fn apply_to(self, profile: &mut ApplicationProfile) {
        match self {
            SectionUpdate::Personal(v) => profile.personal = v,
            SectionUpdate::Links(v) => profile.links = v,
            SectionUpdate::Education(v) => profile.education = v,
            SectionUpdate::Skills(v) => profile.skills = v,
            SectionUpdate::Experience(v) => profile.experience = v,
            SectionUpdate::Projects(v) => profile.projects = v,
            SectionUpdate::Certifications(v) => profile.certifications = v,
            SectionUpdate::Achievements(v) => profile.achievements = v,
            SectionUpdate::JobRole(v) => profile.job_role = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_order() {
        assert_eq!(SectionId::Personal.previous(), None);
        assert_eq!(SectionId::Personal.next(), Some(SectionId::Links));
        assert_eq!(SectionId::Achievements.next(), Some(SectionId::JobRole));
        assert_eq!(SectionId::JobRole.next(), None);
        assert_eq!(SectionId::JobRole.previous(), Some(SectionId::Achievements));
    }

    #[test]
    fn test_section_id_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&SectionId::JobRole).unwrap(),
            "\"job-role\""
        );
    }

    #[test]
    fn test_apply_replaces_only_target_section() {
        let mut profile = ApplicationProfile::default();
        profile.personal.full_name = "Jane Doe".into();

        let update = SectionUpdate::JobRole(JobRole {
            title: "Backend Engineer".into(),
            ..Default::default()
        });
        assert_eq!(update.section(), SectionId::JobRole);
        update.apply_to(&mut profile);

        assert_eq!(profile.job_role.title, "Backend Engineer");
        assert_eq!(profile.personal.full_name, "Jane Doe");
    }

    #[test]
    fn test_update_deserializes_from_tagged_json() {
        let update: SectionUpdate = serde_json::from_value(serde_json::json!({
            "section": "skills",
            "value": {"technical": ["Go", "Go"], "soft": []}
        }))
        .unwrap();
        match update {
            SectionUpdate::Skills(skills) => assert_eq!(skills.technical.len(), 1),
            other => panic!("unexpected update {other:?}"),
        }
    }
}
