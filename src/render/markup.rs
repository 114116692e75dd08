//! Escaping and formatting helpers shared by the section builders.

use chrono::NaiveDate;

use crate::{Error, Result};

/// Rewrite `&`, `<` and `>` to their entity forms.
///
/// Every user-supplied text field passes through here before it is
/// interpolated into markup. This is the sole injection-safety guarantee of
/// the renderer, so section builders must never interpolate a raw field.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render an ISO date as `{abbreviated month} {4-digit year}`, e.g. `Mar 2020`.
///
/// Accepts `YYYY-MM-DD` and `YYYY-MM`; anything else is a render failure.
pub fn format_date(date: &str) -> Result<String> {
    Ok(parse_iso(date)?.format("%b %Y").to_string())
}

/// The 4-digit year of an ISO date, used by publication and award lines.
pub fn format_year(date: &str) -> Result<String> {
    Ok(parse_iso(date)?.format("%Y").to_string())
}

fn parse_iso(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d"))
        .map_err(|_| Error::Render(format!("invalid date: {date:?}")))
}

/// Date range for a work or education entry.
///
/// An absent end date renders the literal `Present`; an absent start date
/// renders nothing, leaving only the end component.
pub fn date_range(start: Option<&str>, end: Option<&str>) -> Result<String> {
    let end = match end {
        Some(d) => format_date(d)?,
        None => "Present".to_string(),
    };
    match start {
        Some(d) => Ok(format!("{} – {}", format_date(d)?, end)),
        None => Ok(end),
    }
}

/// A URL with its scheme stripped, for the contact line.
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Display form of a profile link: scheme and a leading `www.` stripped.
pub fn display_url(url: &str) -> &str {
    let rest = strip_scheme(url);
    if rest.len() < url.len() {
        // Only strip "www." when it followed a scheme
        rest.strip_prefix("www.").unwrap_or(rest)
    } else {
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_rewrites_structural_characters() {
        assert_eq!(
            escape_html("<Fast & Loose>"),
            "&lt;Fast &amp; Loose&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_escape_ampersand_first() {
        // The entity introducer itself must not be double-escaped
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_format_date_abbreviated_month() {
        assert_eq!(format_date("2020-03-01").unwrap(), "Mar 2020");
        assert_eq!(format_date("2017-11-15").unwrap(), "Nov 2017");
    }

    #[test]
    fn test_format_date_accepts_year_month() {
        assert_eq!(format_date("2020-03").unwrap(), "Mar 2020");
    }

    #[test]
    fn test_malformed_date_is_a_render_error() {
        assert!(matches!(format_date("soon"), Err(Error::Render(_))));
        assert!(matches!(format_date("2020-13-01"), Err(Error::Render(_))));
    }

    #[test]
    fn test_format_year() {
        assert_eq!(format_year("2019-06-01").unwrap(), "2019");
    }

    #[test]
    fn test_date_range_open_ended() {
        let range = date_range(Some("2020-03-01"), None).unwrap();
        assert_eq!(range, "Mar 2020 – Present");
    }

    #[test]
    fn test_date_range_closed() {
        let range = date_range(Some("2018-01-01"), Some("2019-12-01")).unwrap();
        assert_eq!(range, "Jan 2018 – Dec 2019");
    }

    #[test]
    fn test_date_range_absent_start_renders_only_end() {
        assert_eq!(date_range(None, None).unwrap(), "Present");
        assert_eq!(date_range(None, Some("2021-05-01")).unwrap(), "May 2021");
    }

    #[test]
    fn test_display_url_strips_scheme_and_www() {
        assert_eq!(display_url("https://www.example.com/ada"), "example.com/ada");
        assert_eq!(display_url("http://example.com"), "example.com");
        // A bare host keeps its "www." since no scheme preceded it
        assert_eq!(display_url("www.example.com"), "www.example.com");
    }

    #[test]
    fn test_strip_scheme_only() {
        assert_eq!(strip_scheme("https://www.example.com"), "www.example.com");
        assert_eq!(strip_scheme("example.com"), "example.com");
    }
}
