mod fetch;
mod source;

pub use fetch::{fetch_catalog, CatalogPoll, CatalogStatus, PendingCatalog};
pub use source::{load_catalog, parse_catalog_csv, parse_catalog_json, CatalogSource};

use std::collections::HashSet;

use tracing::warn;

use crate::error::{Result, TrackerError};
use crate::models::{FoodRecord, RawFoodRecord};

/// Read-only, ordered list of foods.
///
/// Names are matched exactly. When several records share a name the first
/// one wins; later duplicates stay in the list for display but are never
/// selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<FoodRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<FoodRecord>) -> Self {
        let catalog = Self { records };
        let duplicates = catalog.duplicate_names();
        if !duplicates.is_empty() {
            warn!(
                "Catalog has duplicate names, first match wins: {}",
                duplicates.join(", ")
            );
        }
        catalog
    }

    /// Build from wire records, skipping rows whose calories cannot be parsed.
    pub fn from_raw(raw: Vec<RawFoodRecord>) -> Self {
        let mut records = Vec::with_capacity(raw.len());
        for row in raw {
            let name = row.name.clone();
            match row.into_record() {
                Some(record) => records.push(record),
                None => warn!("Skipping '{}': calorie value is not an integer", name),
            }
        }
        Self::from_records(records)
    }

    /// First record with exactly this name.
    pub fn find(&self, name: &str) -> Option<&FoodRecord> {
        self.records.iter().find(|f| f.name == name)
    }

    /// Like `find`, but a miss is a `FoodNotFound` error.
    pub fn require(&self, name: &str) -> Result<&FoodRecord> {
        self.find(name)
            .ok_or_else(|| TrackerError::FoodNotFound(name.to_string()))
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    /// All names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|f| f.name.as_str()).collect()
    }

    /// Names that appear more than once, in order of first repeat.
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for food in &self.records {
            if !seen.insert(food.name.as_str()) && reported.insert(food.name.as_str()) {
                duplicates.push(food.name.clone());
            }
        }
        duplicates
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawCalories;

    fn sample_catalog() -> Catalog {
        Catalog::from_records(vec![
            FoodRecord::new("Banana", "unidade", "100g", 89),
            FoodRecord::new("Rice", "g", "100g", 130),
            FoodRecord::new("Banana", "unidade", "120g", 107),
        ])
    }

    #[test]
    fn test_find_exact_name() {
        let catalog = sample_catalog();
        assert!(catalog.find("Rice").is_some());
        assert!(catalog.find("rice").is_none());
        assert!(catalog.find("Bread").is_none());
    }

    #[test]
    fn test_duplicate_first_match_wins() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find("Banana").unwrap().calories_per_reference_unit, 89);
        assert_eq!(catalog.duplicate_names(), vec!["Banana".to_string()]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_require_missing_is_not_found() {
        let catalog = Catalog::new();
        assert!(matches!(
            catalog.require("Banana"),
            Err(TrackerError::FoodNotFound(name)) if name == "Banana"
        ));
    }

    #[test]
    fn test_from_raw_skips_bad_rows() {
        let raw = vec![
            RawFoodRecord {
                name: "Banana".to_string(),
                unit: "unidade".to_string(),
                reference_weight: "100g".to_string(),
                calories: RawCalories::Text("89".to_string()),
            },
            RawFoodRecord {
                name: "Mystery".to_string(),
                unit: String::new(),
                reference_weight: String::new(),
                calories: RawCalories::Text("?".to_string()),
            },
        ];
        let catalog = Catalog::from_raw(raw);
        assert_eq!(catalog.names(), vec!["Banana"]);
    }
}
