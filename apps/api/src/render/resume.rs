//! Resume layout.
//!
//! Fixed section order: header → summary → skills → experience → education →
//! projects → certifications → achievements. A section with no backing data is
//! left out entirely, heading included.

use std::fmt::{self, Write};

use crate::generation::models::ResumeContent;
use crate::profile::models::{present, ApplicationProfile};
use crate::profile::validation::normalize_link;
use crate::render::html::{close_document, div, escape, open_document};
use crate::render::styles::RESUME_CSS;

pub fn render_resume(
    profile: &ApplicationProfile,
    generated: Option<&ResumeContent>,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    open_document(
        &mut out,
        &format!("{} - Resume", profile.full_name()),
        RESUME_CSS,
    )?;

    write_header(&mut out, profile)?;
    if let Some(summary) = generated.map(|g| g.summary.trim()).filter(|s| !s.is_empty()) {
        open_section(&mut out, "Professional Summary")?;
        writeln!(out, "<p>{}</p>", escape(summary))?;
        close_section(&mut out)?;
    }
    write_skills(&mut out, profile)?;
    write_experience(&mut out, profile, generated)?;
    write_education(&mut out, profile)?;
    write_projects(&mut out, profile, generated)?;
    write_certifications(&mut out, profile)?;
    write_achievements(&mut out, profile)?;

    close_document(&mut out)?;
    Ok(out)
}

fn write_header(out: &mut String, profile: &ApplicationProfile) -> fmt::Result {
    writeln!(out, "<div class=\"header\">")?;
    div(out, "name", profile.full_name())?;

    let title = profile.job_role.title.trim();
    if !title.is_empty() {
        div(out, "title", title)?;
    }

    let personal = &profile.personal;
    let contact: Vec<&str> = [&personal.email, &personal.phone, &personal.address]
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if !contact.is_empty() {
        div(out, "contact", &contact.join(" • "))?;
    }

    if profile.links.any() {
        writeln!(out, "<div class=\"links\">")?;
        for (label, url) in profile.links.labelled() {
            if url.trim().is_empty() {
                continue;
            }
            writeln!(
                out,
                "<a href=\"{}\">{label}</a>",
                escape(&normalize_link(url))
            )?;
        }
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>")
}

fn write_skills(out: &mut String, profile: &ApplicationProfile) -> fmt::Result {
    let skills = &profile.skills;
    if skills.is_empty() {
        return Ok(());
    }
    open_section(out, "Skills")?;
    for (label, group) in [
        ("Technical Skills", &skills.technical),
        ("Soft Skills", &skills.soft),
    ] {
        if group.is_empty() {
            continue;
        }
        writeln!(out, "<div class=\"skill-group\">")?;
        writeln!(out, "<strong>{label}:</strong><br>")?;
        write!(out, "<div class=\"skills\">")?;
        for skill in group {
            write!(out, "<span class=\"skill\">{}</span>", escape(skill))?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
    }
    close_section(out)
}

fn write_experience(
    out: &mut String,
    profile: &ApplicationProfile,
    generated: Option<&ResumeContent>,
) -> fmt::Result {
    if profile.experience.is_empty() {
        return Ok(());
    }
    open_section(out, "Work Experience")?;
    for (index, exp) in profile.experience.iter().enumerate() {
        let responsibilities = generated
            .and_then(|g| g.enhanced_experience.get(index))
            .map(|e| e.enhanced_responsibilities.as_slice())
            .filter(|r| !r.is_empty())
            .unwrap_or(exp.responsibilities.as_slice());

        let end = if exp.current {
            "Present"
        } else {
            exp.end_date.trim()
        };

        writeln!(out, "<div class=\"item\">")?;
        div(out, "item-title", &exp.position)?;
        div(out, "item-subtitle", &exp.company)?;
        div(out, "item-date", &format!("{} - {end}", exp.start_date.trim()))?;
        if !responsibilities.is_empty() {
            writeln!(out, "<ul>")?;
            for item in responsibilities {
                writeln!(out, "<li>{}</li>", escape(item))?;
            }
            writeln!(out, "</ul>")?;
        }
        writeln!(out, "</div>")?;
    }
    close_section(out)
}

fn write_education(out: &mut String, profile: &ApplicationProfile) -> fmt::Result {
    if profile.education.is_empty() {
        return Ok(());
    }
    open_section(out, "Education")?;
    for edu in &profile.education {
        writeln!(out, "<div class=\"item\">")?;
        div(out, "item-title", &format!("{} in {}", edu.degree, edu.field))?;
        div(out, "item-subtitle", &edu.school)?;
        div(out, "item-date", &format!("{} - {}", edu.start_year, edu.end_year))?;
        if let Some(gpa) = present(&edu.gpa) {
            writeln!(out, "<div>GPA: {}</div>", escape(gpa))?;
        }
        writeln!(out, "</div>")?;
    }
    close_section(out)
}

fn write_projects(
    out: &mut String,
    profile: &ApplicationProfile,
    generated: Option<&ResumeContent>,
) -> fmt::Result {
    if profile.projects.is_empty() {
        return Ok(());
    }
    open_section(out, "Projects")?;
    for (index, project) in profile.projects.iter().enumerate() {
        let enhanced = generated.and_then(|g| g.enhanced_projects.get(index));
        let description = enhanced
            .map(|e| e.enhanced_description.trim())
            .filter(|d| !d.is_empty())
            .unwrap_or(project.description.as_str());

        writeln!(out, "<div class=\"item\">")?;
        div(out, "item-title", &project.title)?;
        writeln!(out, "<p>{}</p>", escape(description))?;
        if !project.technologies.is_empty() {
            writeln!(
                out,
                "<div><strong>Technologies:</strong> {}</div>",
                escape(&project.technologies.as_slice().join(", "))
            )?;
        }
        if let Some(impact) = enhanced.map(|e| e.impact.trim()).filter(|i| !i.is_empty()) {
            writeln!(out, "<div><strong>Impact:</strong> {}</div>", escape(impact))?;
        }
        if let Some(link) = present(&project.link) {
            writeln!(
                out,
                "<div><a href=\"{}\">View Project</a></div>",
                escape(&normalize_link(link))
            )?;
        }
        writeln!(out, "</div>")?;
    }
    close_section(out)
}

fn write_certifications(out: &mut String, profile: &ApplicationProfile) -> fmt::Result {
    if profile.certifications.is_empty() {
        return Ok(());
    }
    open_section(out, "Certifications")?;
    for cert in &profile.certifications {
        let date = match present(&cert.expiry_date) {
            Some(expiry) => format!("{} - Expires: {expiry}", cert.date),
            None => cert.date.clone(),
        };
        writeln!(out, "<div class=\"item\">")?;
        div(out, "item-title", &cert.name)?;
        div(out, "item-subtitle", &cert.issuer)?;
        div(out, "item-date", &date)?;
        writeln!(out, "</div>")?;
    }
    close_section(out)
}

fn write_achievements(out: &mut String, profile: &ApplicationProfile) -> fmt::Result {
    if profile.achievements.is_empty() {
        return Ok(());
    }
    open_section(out, "Achievements")?;
    for achievement in &profile.achievements {
        writeln!(out, "<div class=\"item\">")?;
        div(out, "item-title", &achievement.title)?;
        div(out, "item-date", &achievement.date)?;
        writeln!(out, "<p>{}</p>", escape(&achievement.description))?;
        writeln!(out, "</div>")?;
    }
    close_section(out)
}

fn open_section(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out, "<div class=\"section\">")?;
    div(out, "section-title", title)
}

fn close_section(out: &mut String) -> fmt::Result {
    writeln!(out, "</div>")
}
