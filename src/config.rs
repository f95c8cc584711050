use serde::Deserialize;

/// Default number of records that can be compared side by side.
pub const DEFAULT_COMPARE_CAPACITY: usize = 3;

/// Tunables for the view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewConfig {
    /// Maximum size of the compare set. Adds beyond it are ignored.
    pub compare_capacity: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            compare_capacity: DEFAULT_COMPARE_CAPACITY,
        }
    }
}
