//! Category and text filtering over the project list.
//!
//! Everything here is a pure function of its inputs: records are only
//! borrowed and the result keeps the input order.

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryFilter, ProjectRecord};

/// Which record fields a search query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Name and tags (landing page gallery).
    #[default]
    NameAndTags,
    /// Name, tags and short description (portfolio page).
    NameTagsAndDescription,
}

impl SearchScope {
    pub fn from_config_value(value: &str) -> Option<Self> {
        match value {
            "name_and_tags" => Some(SearchScope::NameAndTags),
            "name_tags_and_description" => Some(SearchScope::NameTagsAndDescription),
            _ => None,
        }
    }
}

/// Filter selection held by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub active_category: CategoryFilter,
    #[serde(default)]
    pub search_query: String,
}

impl FilterState {
    pub fn new(active_category: CategoryFilter, search_query: impl Into<String>) -> Self {
        Self {
            active_category,
            search_query: search_query.into(),
        }
    }

    /// "Clear filters": back to every category and no query.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Returns the records matching both the category and the text predicate,
/// in their original order.
pub fn filter_projects<'a>(
    records: &'a [ProjectRecord],
    active_category: CategoryFilter,
    search_query: &str,
    scope: SearchScope,
) -> Vec<&'a ProjectRecord> {
    let needle = search_query.to_lowercase();
    records
        .iter()
        .filter(|record| active_category.matches(record.category))
        .filter(|record| matches_query(record, &needle, scope))
        .collect()
}

/// `needle` must already be lowercase.
fn matches_query(record: &ProjectRecord, needle: &str, scope: SearchScope) -> bool {
    if needle.is_empty() {
        return true;
    }
    if record.name.to_lowercase().contains(needle) {
        return true;
    }
    if record
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(needle))
    {
        return true;
    }
    match scope {
        SearchScope::NameAndTags => false,
        SearchScope::NameTagsAndDescription => {
            record.short_description.to_lowercase().contains(needle)
        }
    }
}
