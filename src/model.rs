// Core structs: Category, DisplayItem, Dataset
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Beach,
    Temple,
    Country,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Beach, Category::Temple, Category::Country];

    /// Lowercase label, also used as the suffix-fallback root.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Beach => "beach",
            Category::Temple => "temple",
            Category::Country => "country",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The minimal shape handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

// A null field reads like a missing one.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

impl From<&City> for DisplayItem {
    fn from(city: &City) -> Self {
        DisplayItem {
            name: city.name.clone(),
            image_url: city.image_url.clone(),
            description: city.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cities: Option<Vec<City>>,
}

/// Every collection is optional; absence reads as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub beaches: Option<Vec<DisplayItem>>,
    #[serde(default)]
    pub temples: Option<Vec<DisplayItem>>,
    #[serde(default)]
    pub countries: Option<Vec<Country>>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("unrecognized keyword")]
    UnrecognizedKeyword,
    #[error("dataset fetch failed: {0}")]
    DatasetFetchFailure(#[from] FetchError),
    #[error("no results for {0}")]
    EmptyResult(Category),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_tolerates_missing_collections() {
        let data: Dataset = serde_json::from_str("{}").unwrap();
        assert_eq!(data, Dataset::default());

        let data: Dataset = serde_json::from_str(r#"{"countries":[{}, {"cities":[]}]}"#).unwrap();
        let countries = data.countries.unwrap();
        assert_eq!(countries.len(), 2);
        assert!(countries[0].cities.is_none());
    }

    #[test]
    fn display_item_uses_camel_case_and_ignores_extras() {
        let item: DisplayItem = serde_json::from_str(
            r#"{"name":"Bora Bora","imageUrl":"bora.jpg","description":"Lagoon","rating":5}"#,
        )
        .unwrap();
        assert_eq!(item.image_url, "bora.jpg");

        let partial: DisplayItem = serde_json::from_str(r#"{"name":"Copacabana"}"#).unwrap();
        assert_eq!(partial.description, "");
    }

    #[test]
    fn null_fields_read_as_empty() {
        let data: Dataset = serde_json::from_str(
            r#"{"beaches":[{"name":null,"imageUrl":"a.jpg","description":null}],
                "countries":[{"name":null,"cities":[{"name":"Kyoto","imageUrl":null}]}]}"#,
        )
        .unwrap();

        let beaches = data.beaches.unwrap();
        assert_eq!(beaches[0].name, "");
        assert_eq!(beaches[0].image_url, "a.jpg");

        let countries = data.countries.unwrap();
        let cities = countries[0].cities.as_ref().unwrap();
        assert_eq!(cities[0].name, "Kyoto");
        assert_eq!(cities[0].image_url, "");
    }

    #[test]
    fn category_labels() {
        let labels: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, ["beach", "temple", "country"]);
    }
}
