// Category-specific extraction from a loaded dataset
use crate::model::{Category, Country, Dataset, DisplayItem};

/// Returns every item for `category` in source order. Never truncates.
pub fn select(category: Category, dataset: &Dataset) -> Vec<DisplayItem> {
    match category {
        Category::Beach => dataset.beaches.clone().unwrap_or_default(),
        Category::Temple => dataset.temples.clone().unwrap_or_default(),
        Category::Country => dataset
            .countries
            .as_deref()
            .map(flatten_cities)
            .unwrap_or_default(),
    }
}

/// Countries are never shown themselves, only their cities.
pub fn flatten_cities(countries: &[Country]) -> Vec<DisplayItem> {
    countries
        .iter()
        .flat_map(|country| country.cities.as_deref().unwrap_or_default())
        .map(DisplayItem::from)
        .collect()
}
