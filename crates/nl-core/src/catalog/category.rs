use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed set of project categories.
///
/// Serialized with the display label shown on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[serde(rename = "Ride Sharing")]
    RideSharing,
    #[serde(rename = "Chatting")]
    Chatting,
    #[serde(rename = "Food Delivery")]
    FoodDelivery,
    #[serde(rename = "Healthcare & Medical Systems")]
    HealthCare,
    #[serde(rename = "Fintech")]
    Fintech,
}

impl ProjectCategory {
    /// All categories in display order.
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::RideSharing,
        ProjectCategory::Chatting,
        ProjectCategory::FoodDelivery,
        ProjectCategory::HealthCare,
        ProjectCategory::Fintech,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::RideSharing => "Ride Sharing",
            ProjectCategory::Chatting => "Chatting",
            ProjectCategory::FoodDelivery => "Food Delivery",
            ProjectCategory::HealthCare => "Healthcare & Medical Systems",
            ProjectCategory::Fintech => "Fintech",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Category selection made in the UI.
///
/// `All` is a wildcard and never a record's own category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Filter options in the order the site renders them: `All` first.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ProjectCategory::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn matches(&self, category: ProjectCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label == Self::ALL_LABEL {
            return Some(CategoryFilter::All);
        }
        ProjectCategory::from_label(label).map(CategoryFilter::Only)
    }
}

impl From<ProjectCategory> for CategoryFilter {
    fn from(category: ProjectCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        CategoryFilter::from_label(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown category: {label}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_with_display_label() {
        let json = serde_json::to_string(&ProjectCategory::HealthCare).unwrap();
        assert_eq!(json, "\"Healthcare & Medical Systems\"");
    }

    #[test]
    fn category_filter_round_trips_wildcard_label() {
        let parsed: CategoryFilter = serde_json::from_str("\"All\"").unwrap();
        assert_eq!(parsed, CategoryFilter::All);
        let parsed: CategoryFilter = serde_json::from_str("\"Food Delivery\"").unwrap();
        assert_eq!(parsed, CategoryFilter::Only(ProjectCategory::FoodDelivery));
    }

    #[test]
    fn category_filter_rejects_unknown_label() {
        let parsed: Result<CategoryFilter, _> = serde_json::from_str("\"Gaming\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn options_start_with_all_then_declaration_order() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options[1], CategoryFilter::Only(ProjectCategory::RideSharing));
        assert_eq!(options[5], CategoryFilter::Only(ProjectCategory::Fintech));
    }

    #[test]
    fn wildcard_matches_every_category() {
        for category in ProjectCategory::ALL {
            assert!(CategoryFilter::All.matches(category));
        }
        assert!(!CategoryFilter::Only(ProjectCategory::Fintech).matches(ProjectCategory::Chatting));
    }
}
