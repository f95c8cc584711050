use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Deserialize;

use crate::config::ViewConfig;

// ---------------------------------------------------------------------------
// DatasetKind / MetricKind – the two global switches
// ---------------------------------------------------------------------------

/// Which of the two record tables is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DatasetKind {
    #[default]
    Occupations,
    Majors,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 2] = [DatasetKind::Occupations, DatasetKind::Majors];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            DatasetKind::Occupations => "Occupations",
            DatasetKind::Majors => "College Majors",
        }
    }

    /// Lower-case plural noun used in prose ("Search occupations…").
    pub fn noun(self) -> &'static str {
        match self {
            DatasetKind::Occupations => "occupations",
            DatasetKind::Majors => "majors",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which exposure score drives colouring and metric sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetricKind {
    /// Replacement risk.
    #[default]
    Negative,
    /// Enhancement potential.
    Positive,
}

impl MetricKind {
    pub const ALL: [MetricKind; 2] = [MetricKind::Negative, MetricKind::Positive];

    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Negative => "Replacement Risk",
            MetricKind::Positive => "Enhancement",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// ExposureRecord – one row of a dataset
// ---------------------------------------------------------------------------

/// A single occupation or major with its two exposure scores (0–100).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureRecord {
    pub name: String,
    pub negative_exposure: u8,
    pub positive_exposure: u8,
}

impl ExposureRecord {
    pub fn new(name: impl Into<String>, negative_exposure: u8, positive_exposure: u8) -> Self {
        Self {
            name: name.into(),
            negative_exposure,
            positive_exposure,
        }
    }

    /// Score for the given metric.
    pub fn metric(&self, kind: MetricKind) -> u8 {
        match kind {
            MetricKind::Negative => self.negative_exposure,
            MetricKind::Positive => self.positive_exposure,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – records in canonical order
// ---------------------------------------------------------------------------

/// An ordered record table. The stored order is the "default" sort order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<ExposureRecord>,
}

impl Dataset {
    /// Wrap already-validated records. Use the loader for untrusted input.
    pub(crate) fn from_records(records: Vec<ExposureRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ExposureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ExposureRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

// ---------------------------------------------------------------------------
// Taxonomy – named categories over record names
// ---------------------------------------------------------------------------

/// One filter bucket. Members may name zero records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub label: String,
    pub members: BTreeSet<String>,
}

/// Categories in declaration order. A record may belong to any number of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    pub(crate) fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.label.as_str())
    }

    pub fn members(&self, label: &str) -> Option<&BTreeSet<String>> {
        self.categories
            .iter()
            .find(|c| c.label == label)
            .map(|c| &c.members)
    }

    /// `false` for unknown labels.
    pub fn contains(&self, label: &str, name: &str) -> bool {
        self.members(label).is_some_and(|m| m.contains(name))
    }
}

// ---------------------------------------------------------------------------
// Catalog – everything the view model reads
// ---------------------------------------------------------------------------

/// Major name → names of related occupations.
pub type CrossReferenceMap = BTreeMap<String, BTreeSet<String>>;

/// Both datasets, their taxonomies and the majors → occupations map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub(crate) occupations: Dataset,
    pub(crate) occupation_taxonomy: Taxonomy,
    pub(crate) majors: Dataset,
    pub(crate) major_taxonomy: Taxonomy,
    pub(crate) related_occupations: CrossReferenceMap,
    pub(crate) view: ViewConfig,
}

impl Catalog {
    pub fn dataset(&self, kind: DatasetKind) -> &Dataset {
        match kind {
            DatasetKind::Occupations => &self.occupations,
            DatasetKind::Majors => &self.majors,
        }
    }

    pub fn taxonomy(&self, kind: DatasetKind) -> &Taxonomy {
        match kind {
            DatasetKind::Occupations => &self.occupation_taxonomy,
            DatasetKind::Majors => &self.major_taxonomy,
        }
    }

    /// View settings shipped with the catalog.
    pub fn view_config(&self) -> ViewConfig {
        self.view
    }

    /// Occupations linked to `major`, in the occupations' canonical order.
    /// Unknown majors and dangling occupation names yield nothing.
    pub fn related_occupations(&self, major: &str) -> Vec<&ExposureRecord> {
        let Some(names) = self.related_occupations.get(major) else {
            return Vec::new();
        };
        self.occupations
            .records()
            .iter()
            .filter(|r| names.contains(&r.name))
            .collect()
    }
}
