//! Per-section fragment builders.
//!
//! Each function maps one slice of the profile record to an HTML fragment.
//! Content-driven sections return `None` when their backing list is empty,
//! which omits the section (heading included) from the document. List order
//! from the source record is preserved exactly; nothing is resorted.

use crate::profile::{
    Award, Basics, EducationEntry, Language, Publication, SkillGroup, WorkEntry,
};
use crate::Result;

use super::markup::{date_range, display_url, escape_html, format_year, strip_scheme};

fn section(heading: &str, body: &str) -> String {
    format!("<div class=\"section\">\n<h2>{heading}</h2>\n{body}\n</div>")
}

/// Name, headline label, contact line, and profile links.
pub(super) fn header(basics: &Basics) -> String {
    let mut contact: Vec<String> = Vec::new();
    if let Some(email) = &basics.email {
        contact.push(escape_html(email));
    }
    if let Some(phone) = &basics.phone {
        contact.push(escape_html(phone));
    }
    if let Some(location) = &basics.location {
        contact.push(escape_html(&format!(
            "{}, {}",
            location.city, location.country_code
        )));
    }
    if let Some(url) = &basics.url {
        contact.push(escape_html(strip_scheme(url)));
    }

    let links = basics
        .profiles
        .iter()
        .map(|p| {
            format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&p.url),
                escape_html(display_url(&p.url))
            )
        })
        .collect::<Vec<_>>()
        .join("&nbsp; | &nbsp;");

    format!(
        "<h1>{}</h1>\n<div class=\"label\">{}</div>\n<div class=\"contact\">\n{}\n<br>{}\n</div>",
        escape_html(&basics.name),
        escape_html(&basics.label),
        contact.join(" &middot; "),
        links
    )
}

/// Skill groups as `Name: keyword, keyword` rows. The heading renders even
/// when the list is empty; only publications, awards and languages are
/// content-driven.
pub(super) fn skills(groups: &[SkillGroup]) -> String {
    let rows = groups
        .iter()
        .map(|group| {
            let keywords = group
                .keywords
                .iter()
                .map(|k| escape_html(k))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "<div class=\"skill-row\"><strong>{}:</strong> {}</div>",
                escape_html(&group.name),
                keywords
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    section("Technical Skills", &format!("<div class=\"skills\">\n{rows}\n</div>"))
}

pub(super) fn work(entries: &[WorkEntry]) -> Result<String> {
    let mut rendered = Vec::with_capacity(entries.len());
    for entry in entries {
        let dates = date_range(entry.start_date.as_deref(), entry.end_date.as_deref())?;
        let organization = entry.name.as_deref().unwrap_or("");

        let mut fragment = format!(
            "<div class=\"entry\">\n<div class=\"entry-header\">\n<span class=\"entry-title\"><strong>{}</strong> &middot; {}</span>\n<span class=\"entry-date\">{}</span>\n</div>",
            escape_html(&entry.position),
            escape_html(organization),
            dates
        );

        if let Some(summary) = &entry.summary {
            fragment.push_str(&format!(
                "\n<div class=\"entry-sub\">{}</div>",
                escape_html(summary)
            ));
        }

        if !entry.highlights.is_empty() {
            let items = entry
                .highlights
                .iter()
                .map(|h| format!("<li>{}</li>", escape_html(h)))
                .collect::<String>();
            fragment.push_str(&format!("\n<ul>{items}</ul>"));
        }

        fragment.push_str("\n</div>");
        rendered.push(fragment);
    }

    Ok(section("Professional Experience", &rendered.join("\n")))
}

pub(super) fn education(entries: &[EducationEntry]) -> Result<String> {
    let mut rows = Vec::with_capacity(entries.len());
    for entry in entries {
        let dates = date_range(entry.start_date.as_deref(), entry.end_date.as_deref())?;
        let degree = [entry.study_type.as_deref(), entry.area.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" in ");
        let degree = if degree.is_empty() {
            String::new()
        } else {
            format!(" &middot; {}", escape_html(&degree))
        };

        rows.push(format!(
            "<div class=\"entry-row\">\n<span><strong>{}</strong>{}</span>\n<span class=\"entry-date\">{}</span>\n</div>",
            escape_html(&entry.institution),
            degree,
            dates
        ));
    }

    Ok(section("Education", &rows.join("\n")))
}

/// `name | publisher | year` items; omitted entirely when the list is empty.
pub(super) fn publications(entries: &[Publication]) -> Result<Option<String>> {
    if entries.is_empty() {
        return Ok(None);
    }
    let mut items = Vec::with_capacity(entries.len());
    for publication in entries {
        let mut parts = vec![escape_html(&publication.name)];
        if let Some(publisher) = &publication.publisher {
            parts.push(escape_html(publisher));
        }
        if let Some(date) = &publication.release_date {
            parts.push(format_year(date)?);
        }
        items.push(format!("<li>{}</li>", parts.join(" | ")));
    }
    let body = format!("<ul class=\"extras\">{}</ul>", items.concat());
    Ok(Some(section("Publications", &body)))
}

/// `title | awarder | year` items; omitted entirely when the list is empty.
pub(super) fn awards(entries: &[Award]) -> Result<Option<String>> {
    if entries.is_empty() {
        return Ok(None);
    }
    let mut items = Vec::with_capacity(entries.len());
    for award in entries {
        let mut parts = vec![escape_html(&award.title)];
        if let Some(awarder) = &award.awarder {
            parts.push(escape_html(awarder));
        }
        if let Some(date) = &award.date {
            parts.push(format_year(date)?);
        }
        items.push(format!("<li>{}</li>", parts.join(" | ")));
    }
    let body = format!("<ul class=\"extras\">{}</ul>", items.concat());
    Ok(Some(section("Awards", &body)))
}

/// One line of `Language (Fluency)` pairs; omitted when the list is empty.
pub(super) fn languages(entries: &[Language]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let line = entries
        .iter()
        .map(|l| format!("{} ({})", l.language, l.fluency))
        .collect::<Vec<_>>()
        .join(", ");
    let body = format!("<div class=\"extras\">{}</div>", escape_html(&line));
    Some(section("Languages", &body))
}
