use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{validate_not_blank, validate_url};

/// A candidate's skill record as stored by the profile service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub work: Vec<WorkEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Project {
    #[validate(custom(function = "validate_not_blank", message = "Project title is required"))]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A single URL, despite the plural name used on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_url", message = "Project link must be an http(s) URL"))]
    pub links: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct WorkEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub links: Option<SocialLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_url", message = "GitHub link must be an http(s) URL"))]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_url", message = "LinkedIn link must be an http(s) URL"))]
    pub linkedin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_url", message = "Portfolio link must be an http(s) URL"))]
    pub portfolio: Option<String>,
}

/// Body sent to create or update a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewProfile {
    #[validate(custom(function = "validate_not_blank", message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    #[validate(nested)]
    pub projects: Vec<Project>,

    #[serde(default)]
    #[validate(nested)]
    pub work: Vec<WorkEntry>,
}

impl Profile {
    /// Links of the first work entry. Later entries are never surfaced.
    pub fn primary_links(&self) -> Option<&SocialLinks> {
        self.work.first().and_then(|entry| entry.links.as_ref())
    }

    pub fn education(&self) -> Option<&str> {
        present(&self.education)
    }
}

impl Project {
    pub fn description(&self) -> Option<&str> {
        present(&self.description)
    }

    pub fn link(&self) -> Option<&str> {
        present(&self.links)
    }
}

impl SocialLinks {
    /// Present links in display order, labelled.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", &self.github),
            ("LinkedIn", &self.linkedin),
            ("Portfolio", &self.portfolio),
        ]
        .into_iter()
        .filter_map(|(label, url)| present(url).map(|url| (label, url)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl From<&Profile> for NewProfile {
    fn from(profile: &Profile) -> Self {
        NewProfile {
            name: profile.name.clone(),
            email: profile.email.clone(),
            education: profile.education.clone(),
            skills: profile.skills.clone(),
            projects: profile.projects.clone(),
            work: profile.work.clone(),
        }
    }
}

/// The service stores empty strings for fields left blank in the form.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
