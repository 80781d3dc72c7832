//! Cover letter layout: date, sender block, recipient block, subject line, body,
//! signature.

use std::fmt::{self, Write};

use chrono::NaiveDate;

use crate::generation::models::CoverLetterContent;
use crate::profile::ApplicationProfile;
use crate::render::html::{close_document, div, escape, open_document};
use crate::render::styles::COVER_LETTER_CSS;

/// "October 19, 2026"
pub const LETTER_DATE_FORMAT: &str = "%B %-d, %Y";

pub fn render_cover_letter(
    profile: &ApplicationProfile,
    generated: Option<&CoverLetterContent>,
    date: NaiveDate,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    open_document(
        &mut out,
        &format!("{} - Cover Letter", profile.full_name()),
        COVER_LETTER_CSS,
    )?;

    div(&mut out, "date", &date.format(LETTER_DATE_FORMAT).to_string())?;
    write_sender(&mut out, profile)?;
    write_recipient(&mut out, profile)?;

    let role = &profile.job_role;
    let company = role.company.trim();
    let at_company = if company.is_empty() {
        String::new()
    } else {
        format!(" at {company}")
    };
    writeln!(
        out,
        "<p><strong>Re: Application for {} Position{}</strong></p>",
        escape(role.title.trim()),
        escape(&at_company)
    )?;

    writeln!(out, "<div class=\"content\">")?;
    match generated.map(|g| g.content.trim()).filter(|c| !c.is_empty()) {
        Some(content) => div(&mut out, "generated", content)?,
        None => write_fallback_body(&mut out, profile)?,
    }
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"signature\">")?;
    writeln!(out, "<p>Sincerely,</p>")?;
    writeln!(out, "<p>{}</p>", escape(profile.full_name()))?;
    writeln!(out, "</div>")?;

    close_document(&mut out)?;
    Ok(out)
}

fn write_sender(out: &mut String, profile: &ApplicationProfile) -> fmt::Result {
    let personal = &profile.personal;
    writeln!(out, "<div class=\"sender\">")?;
    for line in [
        profile.full_name(),
        personal.email.trim(),
        personal.phone.trim(),
        personal.address.trim(),
    ] {
        if !line.is_empty() {
            writeln!(out, "<div>{}</div>", escape(line))?;
        }
    }
    writeln!(out, "</div>")
}

fn write_recipient(out: &mut String, profile: &ApplicationProfile) -> fmt::Result {
    let company = profile.job_role.company.trim();
    writeln!(out, "<div class=\"recipient\">")?;
    writeln!(out, "<div>Hiring Manager</div>")?;
    if company.is_empty() {
        writeln!(out, "<div>[Company Name]</div>")?;
    } else {
        writeln!(out, "<div>{}</div>", escape(company))?;
    }
    writeln!(out, "<div>[Company Address]</div>")?;
    writeln!(out, "</div>")
}

fn write_fallback_body(out: &mut String, profile: &ApplicationProfile) -> fmt::Result {
    let title = escape(profile.job_role.title.trim());
    let company = profile.job_role.company.trim();
    let (at_company, organization) = if company.is_empty() {
        (String::new(), "your organization".to_string())
    } else {
        (format!(" at {}", escape(company)), escape(company))
    };

    writeln!(out, "<p>Dear Hiring Manager,</p>")?;
    writeln!(
        out,
        "<p>I am writing to express my strong interest in the {title} position{at_company}. \
         With my background and skills, I am excited about the opportunity to contribute \
         to your team.</p>"
    )?;
    writeln!(
        out,
        "<p>In my previous experience, I have developed expertise that aligns well with the \
         requirements of this role. I am particularly drawn to this position because it \
         offers the opportunity to apply my skills in a meaningful way.</p>"
    )?;
    writeln!(
        out,
        "<p>I would welcome the opportunity to discuss how my experience and enthusiasm can \
         contribute to {organization}'s continued success. Thank you for considering my \
         application.</p>"
    )
}
