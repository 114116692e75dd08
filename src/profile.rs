//! The profile record: structured resume data loaded from the input file.
//!
//! The record is parsed once at the start of a build, is immutable for the
//! rest of the run, and is never written back; it is authored externally in
//! the JSON Resume shape (camelCase keys).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

/// The full profile record
///
/// Every list field defaults to empty when absent from the source file, so
/// downstream code never sees a null where a list is expected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub basics: Basics,
    #[serde(default)]
    pub work: Vec<WorkEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub awards: Vec<Award>,
}

/// Identity and contact information
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basics {
    pub name: String,
    pub label: String,
    pub summary: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
    pub location: Option<Location>,
    #[serde(default)]
    pub profiles: Vec<ProfileLink>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub country_code: String,
}

/// A named external profile link (GitHub, LinkedIn, ...)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLink {
    pub network: String,
    pub url: String,
}

/// One position held; dates are ISO strings or absent (absent end = ongoing)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub position: String,
    /// Organization name
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub area: Option<String>,
    pub study_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// A named group of skill keywords; group and keyword order is preserved
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub language: String,
    pub fluency: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub name: String,
    pub publisher: Option<String>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub title: String,
    pub awarder: Option<String>,
    pub date: Option<String>,
}

impl Profile {
    /// Parse a profile record from a JSON file.
    ///
    /// The whole record either parses or the load fails with
    /// [`Error::Parse`]; no partial records are produced.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .map_err(|e| Error::Parse(format!("{}: {}", path.display(), e)))?;

        let profile: Profile = serde_json::from_str(&data)
            .map_err(|e| Error::Parse(format!("{}: {}", path.display(), e)))?;

        Ok(profile)
    }
}
