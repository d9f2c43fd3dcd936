use nl_core::CategoryFilter;

/// Filter buttons: the wildcard first, then every category.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListCategories;

impl ListCategories {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) -> Vec<CategoryFilter> {
        CategoryFilter::options()
    }
}
