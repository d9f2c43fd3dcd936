use serde::{Deserialize, Serialize};

use crate::catalog::ProjectCategory;
use crate::ids::ProjectId;

/// URL-safe unique key of a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase ASCII letters, digits and single hyphens only.
    pub fn is_url_safe(&self) -> bool {
        !self.0.is_empty()
            && !self.0.starts_with('-')
            && !self.0.ends_with('-')
            && !self.0.contains("--")
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Slug {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Pre-formatted headline figure ("Downloads", "1M+").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetric {
    pub label: String,
    pub value: String,
}

/// One portfolio entry.
///
/// Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub name: String,
    pub slug: Slug,
    pub category: ProjectCategory,
    pub short_description: String,
    pub full_description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<ProjectMetric>,
    pub thumbnail_url: String,
    #[serde(default)]
    pub gallery_urls: Vec<String>,
}

/// Member shown on the about page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_url_safety() {
        assert!(Slug::new("ride-pulse").is_url_safe());
        assert!(Slug::new("web3").is_url_safe());
        assert!(!Slug::new("Stay Healthy").is_url_safe());
        assert!(!Slug::new("-lead").is_url_safe());
        assert!(!Slug::new("double--dash").is_url_safe());
        assert!(!Slug::new("").is_url_safe());
    }

    #[test]
    fn project_record_uses_camel_case_keys() {
        let json = r#"{
            "id": "1",
            "name": "RidePulse",
            "slug": "ride-pulse",
            "category": "Ride Sharing",
            "shortDescription": "short",
            "fullDescription": "full",
            "thumbnailUrl": "thumb.jpg"
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.slug.as_str(), "ride-pulse");
        assert_eq!(record.category, ProjectCategory::RideSharing);
        assert!(record.tags.is_empty());
        assert!(record.gallery_urls.is_empty());
    }
}
