//! Markup renderer: maps the profile record to a complete styled document.
//!
//! `render` is a pure function: the same record always produces
//! byte-identical markup, so a rebuild on unchanged input is a no-op apart
//! from the export. Escaping and conditional-section logic live in the
//! builders under this module rather than being repeated per field.

pub mod markup;
mod sections;

use crate::profile::Profile;
use crate::Result;

/// The fixed print stylesheet embedded in every rendered document.
///
/// Carries the pagination hints the exporter relies on: work entries avoid
/// page breaks inside themselves, and section headings avoid a break
/// immediately after them.
const STYLESHEET: &str = include_str!("resume.css");

/// Render the profile record as a complete HTML document.
///
/// Optional sections (publications, awards, languages) are omitted when
/// their backing lists are empty; this is content-driven, not a toggle.
pub fn render(profile: &Profile) -> Result<String> {
    let mut body = Vec::new();

    body.push(sections::header(&profile.basics));
    body.push("<hr class=\"divider\">".to_string());
    body.push(format!(
        "<div class=\"summary\">{}</div>",
        markup::escape_html(&profile.basics.summary)
    ));

    body.push(sections::skills(&profile.skills));
    body.push(sections::work(&profile.work)?);
    body.push(sections::education(&profile.education)?);

    if let Some(fragment) = sections::publications(&profile.publications)? {
        body.push(fragment);
    }
    if let Some(fragment) = sections::awards(&profile.awards)? {
        body.push(fragment);
    }
    if let Some(fragment) = sections::languages(&profile.languages) {
        body.push(fragment);
    }

    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<style>\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        STYLESHEET,
        body.join("\n")
    ))
}
