use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::RawFoodRecord;

/// Where the food catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Remote(String),
}

impl CatalogSource {
    /// `http://` and `https://` locations are remote, anything else is a path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            CatalogSource::Remote(trimmed.to_string())
        } else {
            CatalogSource::File(PathBuf::from(trimmed))
        }
    }
}

/// Parse a JSON array of catalog records.
pub fn parse_catalog_json(content: &str) -> Result<Catalog> {
    let raw: Vec<RawFoodRecord> = serde_json::from_str(content)?;
    Ok(Catalog::from_raw(raw))
}

/// Parse CSV with `Alimento,Unidade,Peso,Calorias` headers.
pub fn parse_catalog_csv<R: std::io::Read>(reader: R) -> Result<Catalog> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut raw = Vec::new();
    for row in rdr.deserialize() {
        let record: RawFoodRecord = row?;
        raw.push(record);
    }
    Ok(Catalog::from_raw(raw))
}

/// Load a catalog from disk. Files ending in `.csv` are read as CSV,
/// everything else as JSON.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let catalog = if is_csv {
        parse_catalog_csv(fs::File::open(path)?)?
    } else {
        parse_catalog_json(&fs::read_to_string(path)?)?
    };

    info!("Loaded {} foods from {}", catalog.len(), path.display());
    Ok(catalog)
}
