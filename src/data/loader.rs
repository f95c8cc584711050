use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::config::ViewConfig;

use super::model::{
    Catalog, Category, CrossReferenceMap, Dataset, DatasetKind, ExposureRecord, Taxonomy,
};

/// The catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Highest valid exposure score.
pub const MAX_SCORE: u8 = 100;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("reading catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing catalog JSON")]
    Json(#[from] serde_json::Error),

    #[error("{dataset}: duplicate record name {name:?}")]
    DuplicateName { dataset: DatasetKind, name: String },

    #[error("{dataset}: {name:?} has {field} = {value}, expected 0..=100")]
    ScoreOutOfRange {
        dataset: DatasetKind,
        name: String,
        field: &'static str,
        value: u8,
    },
}

// ---------------------------------------------------------------------------
// On-disk schema
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// {
///   "occupations": {
///     "records":    [{ "name": "Chef", "negativeExposure": 10, "positiveExposure": 50 }],
///     "categories": [{ "label": "Hospitality", "members": ["Chef"] }]
///   },
///   "majors": { "records": [...], "categories": [...] },
///   "relatedOccupations": { "Culinary Arts": ["Chef"] },
///   "view": { "compareCapacity": 3 }
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    occupations: DatasetFile,
    majors: DatasetFile,
    #[serde(default)]
    related_occupations: CrossReferenceMap,
    #[serde(default)]
    view: ViewConfig,
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
    records: Vec<ExposureRecord>,
    #[serde(default)]
    categories: Vec<Category>,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

impl Catalog {
    /// Parse the embedded default catalog.
    pub fn builtin() -> Result<Catalog, CatalogError> {
        parse_catalog(BUILTIN_CATALOG)
    }
}

/// Read and validate a catalog JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&text)
}

/// Parse and validate a catalog JSON document.
///
/// Record-level problems are rejected here so that nothing downstream has to
/// handle them. Category members and cross-references that name unknown
/// records are accepted and only logged.
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = serde_json::from_str(text)?;

    let (occupations, occupation_taxonomy) =
        build_dataset(DatasetKind::Occupations, file.occupations)?;
    let (majors, major_taxonomy) = build_dataset(DatasetKind::Majors, file.majors)?;

    for (major, occupations_for_major) in &file.related_occupations {
        if !majors.contains(major) {
            log::warn!("relatedOccupations: unknown major {major:?}");
        }
        for name in occupations_for_major {
            if !occupations.contains(name) {
                log::warn!("relatedOccupations[{major:?}]: unknown occupation {name:?}");
            }
        }
    }

    log::debug!(
        "Parsed catalog: {} occupations, {} majors",
        occupations.len(),
        majors.len()
    );

    Ok(Catalog {
        occupations,
        occupation_taxonomy,
        majors,
        major_taxonomy,
        related_occupations: file.related_occupations,
        view: file.view,
    })
}

fn build_dataset(
    kind: DatasetKind,
    file: DatasetFile,
) -> Result<(Dataset, Taxonomy), CatalogError> {
    let mut seen = BTreeSet::new();
    for rec in &file.records {
        if !seen.insert(rec.name.as_str()) {
            return Err(CatalogError::DuplicateName {
                dataset: kind,
                name: rec.name.clone(),
            });
        }
        check_score(kind, rec, "negativeExposure", rec.negative_exposure)?;
        check_score(kind, rec, "positiveExposure", rec.positive_exposure)?;
    }

    for cat in &file.categories {
        for member in cat.members.iter().filter(|m| !seen.contains(m.as_str())) {
            log::warn!("{kind}: category {:?} lists unknown {member:?}", cat.label);
        }
    }

    Ok((
        Dataset::from_records(file.records),
        Taxonomy::from_categories(file.categories),
    ))
}

fn check_score(
    kind: DatasetKind,
    rec: &ExposureRecord,
    field: &'static str,
    value: u8,
) -> Result<(), CatalogError> {
    if value > MAX_SCORE {
        return Err(CatalogError::ScoreOutOfRange {
            dataset: kind,
            name: rec.name.clone(),
            field,
            value,
        });
    }
    Ok(())
}
