// Fixed narrative templates used by `TemplateNarrator`.
// Placeholders are `{name}` and are filled with `str::replace`.

/// Replace: {job_title}, {top_technical}, {field}, {top_soft}
pub const SUMMARY_TEMPLATE: &str = "Dynamic {job_title} with expertise in {top_technical}. \
    Proven track record of delivering innovative solutions and driving results in fast-paced environments. \
    Strong background in {field} with excellent {top_soft} skills.";

/// Replace: {responsibility}
pub const RESPONSIBILITY_TEMPLATE: &str =
    "• Enhanced: {responsibility} - resulting in improved efficiency and team productivity";

/// Replace: {description}, {technologies}
pub const PROJECT_DESCRIPTION_TEMPLATE: &str =
    "{description} - This project demonstrates advanced proficiency in {technologies}.";

/// Not data-dependent.
pub const PROJECT_IMPACT: &str =
    "Delivered significant value through innovative technical solutions and user-centered design.";

pub const SALUTATION: &str = "Dear Hiring Manager,";

/// Replace: {job_title}, {at_company}
pub const OPENING_TEMPLATE: &str =
    "I am writing to express my strong interest in the {job_title} position{at_company}.";

/// Replace: {top_technical}
pub const BACKGROUND_TEMPLATE: &str = "With my extensive background in {top_technical}, \
    I am excited about the opportunity to contribute to your team's success.";

/// Replace: {broad_technical}
pub const EXPERTISE_TEMPLATE: &str = "In my previous roles, I have developed expertise in {broad_technical}. \
    My experience has enabled me to deliver innovative solutions and drive meaningful results.";

/// Replace: {primary_skill}
pub const MOTIVATION_TEMPLATE: &str = "I am particularly drawn to this role because it aligns \
    perfectly with my passion for {primary_skill} and my commitment to excellence.";

/// Replace: {company}, {responsibility}
pub const EXPERIENCE_TEMPLATE: &str = "At {company}, I {responsibility}. \
    This experience has prepared me to make an immediate impact in your organization.";

/// Replace: {organization}
pub const CLOSING_TEMPLATE: &str = "I would welcome the opportunity to discuss how my skills \
    and enthusiasm can contribute to {organization} continued success. \
    Thank you for considering my application.";

pub const SIGN_OFF: &str = "Sincerely,";

/// Used when the profile has no technical skills to interpolate.
pub const FALLBACK_SKILLS: &str = "technology";
pub const FALLBACK_FIELD: &str = "technology";
pub const FALLBACK_RESPONSIBILITY: &str = "contributed significantly to the team";
pub const FALLBACK_ORGANIZATION: &str = "your organization's";
pub const FALLBACK_SOFT_SKILLS: &str = "communication";
