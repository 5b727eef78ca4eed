use common::{Category, Country};
use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct CategoryResponse {
    pub value: Category,
    #[schema(example = "Food")]
    pub label: &'static str,
    #[schema(example = "🍳")]
    pub icon: &'static str,
    #[schema(example = "Home kitchens and street food classics, unfiltered.")]
    pub tagline: &'static str,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            value: category,
            label: category.label(),
            icon: category.icon(),
            tagline: category.tagline(),
        }
    }
}

/// Approved video count for one category.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CategoryCount {
    pub category: Category,
    #[schema(example = "Music")]
    pub label: &'static str,
    #[schema(example = 4)]
    pub count: u64,
}

impl From<(Category, u64)> for CategoryCount {
    fn from((category, count): (Category, u64)) -> Self {
        Self {
            category,
            label: category.label(),
            count,
        }
    }
}

/// Per-category approved counts for one country. Every category is present.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CountryCountsResponse {
    #[schema(example = "USA")]
    pub country_code: String,
    pub counts: Vec<CategoryCount>,
    #[schema(example = 9)]
    pub total: u64,
}

impl CountryCountsResponse {
    pub fn new(country_code: &str, counts: Vec<(Category, u64)>) -> Self {
        let total = counts.iter().map(|&(_, n)| n).sum();
        Self {
            country_code: country_code.to_string(),
            counts: counts.into_iter().map(CategoryCount::from).collect(),
            total,
        }
    }
}

/// A country with its approved counts, as shown when it is selected on the map.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CountryDetailResponse {
    pub country: Country,
    pub counts: Vec<CategoryCount>,
    #[schema(example = 9)]
    pub total: u64,
}
