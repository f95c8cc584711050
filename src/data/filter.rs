use std::cmp::{Ordering, Reverse};

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::model::{Dataset, DatasetKind, ExposureRecord, MetricKind, Taxonomy};

// ---------------------------------------------------------------------------
// View options: everything the user picks that shapes the visible list
// ---------------------------------------------------------------------------

/// Row ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Canonical dataset order.
    #[default]
    Default,
    Alphabetical,
    /// Ascending by the selected metric.
    Lowest,
    /// Descending by the selected metric.
    Highest,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Default,
        SortMode::Alphabetical,
        SortMode::Lowest,
        SortMode::Highest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Default => "Default Order",
            SortMode::Alphabetical => "Alphabetical",
            SortMode::Lowest => "Lowest Exposure First",
            SortMode::Highest => "Highest Exposure First",
        }
    }
}

/// Restrict rows to one taxonomy bucket, or show everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Category(label) => label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewOptions {
    pub dataset: DatasetKind,
    pub metric: MetricKind,
    pub search: String,
    pub sort: SortMode,
    pub category: CategoryFilter,
}

// ---------------------------------------------------------------------------
// Visible rows
// ---------------------------------------------------------------------------

/// Canonical indices of the records that pass `options`, in display order.
///
/// Pipeline: category bucket → case-insensitive name search → stable sort.
/// An unknown category label matches nothing.
pub fn visible_indices(
    dataset: &Dataset,
    taxonomy: &Taxonomy,
    options: &ViewOptions,
) -> Vec<usize> {
    let records = dataset.records();
    let needle = options.search.to_lowercase();

    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, rec)| match &options.category {
            CategoryFilter::All => true,
            CategoryFilter::Category(label) => taxonomy.contains(label, &rec.name),
        })
        .filter(|(_, rec)| needle.is_empty() || rec.name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect();

    let metric = options.metric;
    match options.sort {
        SortMode::Default => {}
        SortMode::Alphabetical => {
            indices.sort_by(|&a, &b| collate_names(&records[a].name, &records[b].name));
        }
        SortMode::Lowest => {
            indices.sort_by_key(|&i| records[i].metric(metric));
        }
        SortMode::Highest => {
            indices.sort_by_key(|&i| Reverse(records[i].metric(metric)));
        }
    }
    indices
}

/// Same as [`visible_indices`] but resolved to records.
pub fn visible_rows<'a>(
    dataset: &'a Dataset,
    taxonomy: &Taxonomy,
    options: &ViewOptions,
) -> Vec<&'a ExposureRecord> {
    resolve_rows(dataset, &visible_indices(dataset, taxonomy, options))
}

/// Map canonical indices back to records. Out-of-range indices are skipped.
pub fn resolve_rows<'a>(dataset: &'a Dataset, indices: &[usize]) -> Vec<&'a ExposureRecord> {
    indices
        .iter()
        .filter_map(|&i| dataset.records().get(i))
        .collect()
}

/// Name ordering for the alphabetical sort.
///
/// Compares base letters first (accents and case folded away, so "Économie"
/// sits between "Art" and "Zoology"), then the lower-cased form with accents,
/// then raw code points so the result is total.
pub fn collate_names(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
