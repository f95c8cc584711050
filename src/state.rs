use crate::color::{self, ColorBucket};
use crate::config::ViewConfig;
use crate::data::filter::{resolve_rows, visible_indices, CategoryFilter, SortMode, ViewOptions};
use crate::data::model::{Catalog, Dataset, DatasetKind, ExposureRecord, MetricKind, Taxonomy};

// ---------------------------------------------------------------------------
// Display mode – what the detail area shows
// ---------------------------------------------------------------------------

/// Selection state. A single selection and a compare set never coexist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Nothing selected, detail mode.
    #[default]
    List,
    /// One record shown in detail.
    Detail(String),
    /// Compare mode; names in selection order, at most `compare_capacity`.
    Compare(Vec<String>),
}

impl DisplayMode {
    pub fn is_compare(&self) -> bool {
        matches!(self, DisplayMode::Compare(_))
    }

    /// Whether `name` is the detail selection or part of the compare set.
    pub fn is_selected(&self, name: &str) -> bool {
        match self {
            DisplayMode::List => false,
            DisplayMode::Detail(selected) => selected == name,
            DisplayMode::Compare(names) => names.iter().any(|n| n == name),
        }
    }

    /// Nothing selected, whichever mode is active.
    pub fn is_empty(&self) -> bool {
        match self {
            DisplayMode::List => true,
            DisplayMode::Detail(_) => false,
            DisplayMode::Compare(names) => names.is_empty(),
        }
    }

    /// Drop all selected names but stay in the current mode.
    fn cleared(&self) -> DisplayMode {
        if self.is_compare() {
            DisplayMode::Compare(Vec::new())
        } else {
            DisplayMode::List
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full view model, independent of rendering.
pub struct AppState {
    /// Read-only record tables.
    catalog: Catalog,

    config: ViewConfig,

    /// Set when the config came from the caller rather than the catalog; it
    /// then survives catalog replacement.
    pinned_config: bool,

    /// User-picked dataset, metric, search, sort and category.
    options: ViewOptions,

    display: DisplayMode,

    /// Canonical indices of rows passing the current options (cached).
    visible_indices: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// View model over `catalog`, using the catalog's own view settings.
    pub fn new(catalog: Catalog) -> Self {
        let config = catalog.view_config();
        let mut state = Self::with_config(catalog, config);
        state.pinned_config = false;
        state
    }

    pub fn with_config(catalog: Catalog, config: ViewConfig) -> Self {
        let mut state = Self {
            catalog,
            config,
            pinned_config: true,
            options: ViewOptions::default(),
            display: DisplayMode::default(),
            visible_indices: Vec::new(),
            status_message: None,
        };
        state.refilter();
        state
    }

    /// Swap in a newly loaded catalog. Metric and sort survive; everything
    /// that names records is reset. The catalog's `view` section applies
    /// unless the config was passed to [`AppState::with_config`].
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        log::info!(
            "Catalog replaced: {} occupations, {} majors",
            catalog.dataset(DatasetKind::Occupations).len(),
            catalog.dataset(DatasetKind::Majors).len()
        );
        if !self.pinned_config {
            self.config = catalog.view_config();
        }
        self.catalog = catalog;
        self.options.category = CategoryFilter::All;
        self.options.search.clear();
        self.display = self.display.cleared();
        self.status_message = None;
        self.refilter();
    }

    // -- read access --

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> ViewConfig {
        self.config
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn display(&self) -> &DisplayMode {
        &self.display
    }

    pub fn dataset(&self) -> &Dataset {
        self.catalog.dataset(self.options.dataset)
    }

    /// Categories of the active dataset.
    pub fn categories(&self) -> &Taxonomy {
        self.catalog.taxonomy(self.options.dataset)
    }

    pub fn visible_indices(&self) -> &[usize] {
        &self.visible_indices
    }

    /// Rows to render, in display order.
    pub fn visible_rows(&self) -> Vec<&ExposureRecord> {
        resolve_rows(self.dataset(), &self.visible_indices)
    }

    /// The record shown in detail, if any.
    pub fn selected_record(&self) -> Option<&ExposureRecord> {
        match &self.display {
            DisplayMode::Detail(name) => self.dataset().get(name),
            _ => None,
        }
    }

    /// Compared records in selection order.
    pub fn compared_records(&self) -> Vec<&ExposureRecord> {
        match &self.display {
            DisplayMode::Compare(names) => {
                names.iter().filter_map(|n| self.dataset().get(n)).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn related_occupations(&self, major: &str) -> Vec<&ExposureRecord> {
        self.catalog.related_occupations(major)
    }

    /// Colour bucket for `value`. `metric_override` wins over the global metric;
    /// detail and compare views use it to show both metrics at once.
    pub fn color_for(&self, value: u8, metric_override: Option<MetricKind>) -> ColorBucket {
        color::color_for(value, metric_override.unwrap_or(self.options.metric))
    }

    // -- option changes --

    /// Switch datasets. Resets the category and all selections even when
    /// `kind` is already active; the search text is kept.
    pub fn set_dataset_kind(&mut self, kind: DatasetKind) {
        log::info!("Dataset set to {kind}");
        self.options.dataset = kind;
        self.options.category = CategoryFilter::All;
        self.display = self.display.cleared();
        self.refilter();
    }

    pub fn set_metric_kind(&mut self, metric: MetricKind) {
        self.options.metric = metric;
        self.refilter();
    }

    pub fn set_search_text(&mut self, search: impl Into<String>) {
        self.options.search = search.into();
        self.refilter();
    }

    pub fn set_sort_mode(&mut self, sort: SortMode) {
        self.options.sort = sort;
        self.refilter();
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.options.category = category;
        self.refilter();
    }

    /// Recompute `visible_indices` after an option change.
    fn refilter(&mut self) {
        self.visible_indices = visible_indices(
            self.catalog.dataset(self.options.dataset),
            self.catalog.taxonomy(self.options.dataset),
            &self.options,
        );
        log::debug!(
            "{} of {} {} visible",
            self.visible_indices.len(),
            self.dataset().len(),
            self.options.dataset.noun()
        );
    }

    // -- selection --

    /// Enter or leave compare mode. Every transition clears the selection;
    /// asking for the current mode changes nothing.
    pub fn set_compare_mode(&mut self, enabled: bool) {
        if self.display.is_compare() == enabled {
            return;
        }
        self.display = if enabled {
            DisplayMode::Compare(Vec::new())
        } else {
            DisplayMode::List
        };
        log::debug!("Compare mode {}", if enabled { "on" } else { "off" });
    }

    /// Row click. In compare mode toggles membership of the compare set (adds
    /// past capacity are dropped); otherwise toggles the detail selection.
    /// Names outside the active dataset are ignored.
    pub fn select_or_toggle(&mut self, name: &str) {
        if !self.dataset().contains(name) {
            log::debug!("Ignoring selection of unknown record {name:?}");
            return;
        }
        let capacity = self.config.compare_capacity;
        if let DisplayMode::Compare(names) = &mut self.display {
            if let Some(pos) = names.iter().position(|n| n == name) {
                names.remove(pos);
            } else if names.len() < capacity {
                names.push(name.to_string());
            } else {
                log::debug!("Compare set full ({capacity}); {name:?} not added");
            }
            return;
        }
        self.display = match &self.display {
            DisplayMode::Detail(selected) if selected == name => DisplayMode::List,
            _ => DisplayMode::Detail(name.to_string()),
        };
    }

    /// Drop every selection without changing mode.
    pub fn clear_selection(&mut self) {
        self.display = self.display.cleared();
    }
}
