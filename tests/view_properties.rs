use std::collections::BTreeSet;

use proptest::prelude::*;

use exposure_viewer::color::severity_level;
use exposure_viewer::config::ViewConfig;
use exposure_viewer::data::filter::{
    collate_names, visible_indices, CategoryFilter, SortMode, ViewOptions,
};
use exposure_viewer::data::model::{Catalog, DatasetKind, MetricKind};
use exposure_viewer::state::{AppState, DisplayMode};

fn catalog() -> Catalog {
    Catalog::builtin().expect("built-in catalog parses")
}

// -- Strategy helpers --

fn arb_dataset() -> impl Strategy<Value = DatasetKind> {
    prop_oneof![Just(DatasetKind::Occupations), Just(DatasetKind::Majors)]
}

fn arb_metric() -> impl Strategy<Value = MetricKind> {
    prop_oneof![Just(MetricKind::Negative), Just(MetricKind::Positive)]
}

fn arb_sort() -> impl Strategy<Value = SortMode> {
    prop_oneof![
        Just(SortMode::Default),
        Just(SortMode::Alphabetical),
        Just(SortMode::Lowest),
        Just(SortMode::Highest),
    ]
}

/// Mostly real labels, sometimes an unknown one.
fn arb_category() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        prop::sample::select(vec![
            "Engineering",
            "Business",
            "Education",
            "Technology",
            "Business & Finance",
            "Natural Sciences",
            "Legal Services",
            "Nope",
        ])
        .prop_map(|label| CategoryFilter::Category(label.to_string())),
    ]
}

/// Short fragments so that some searches actually match.
fn arb_search() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-zA-Z ]{1,3}"]
}

fn arb_options() -> impl Strategy<Value = ViewOptions> {
    (arb_dataset(), arb_metric(), arb_search(), arb_sort(), arb_category()).prop_map(
        |(dataset, metric, search, sort, category)| ViewOptions {
            dataset,
            metric,
            search,
            sort,
            category,
        },
    )
}

fn record_names(catalog: &Catalog, kind: DatasetKind) -> Vec<String> {
    catalog
        .dataset(kind)
        .records()
        .iter()
        .map(|r| r.name.clone())
        .collect()
}

fn compare_set(state: &AppState) -> BTreeSet<String> {
    state
        .compared_records()
        .into_iter()
        .map(|r| r.name.clone())
        .collect()
}

#[derive(Debug, Clone)]
enum Op {
    Dataset(DatasetKind),
    Metric(MetricKind),
    Sort(SortMode),
    Category(CategoryFilter),
    Search(String),
    Compare(bool),
    Click(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_dataset().prop_map(Op::Dataset),
        arb_metric().prop_map(Op::Metric),
        arb_sort().prop_map(Op::Sort),
        arb_category().prop_map(Op::Category),
        arb_search().prop_map(Op::Search),
        any::<bool>().prop_map(Op::Compare),
        (0usize..12).prop_map(Op::Click),
    ]
}

fn apply(state: &mut AppState, op: &Op) {
    match op {
        Op::Dataset(kind) => state.set_dataset_kind(*kind),
        Op::Metric(metric) => state.set_metric_kind(*metric),
        Op::Sort(sort) => state.set_sort_mode(*sort),
        Op::Category(category) => state.set_category_filter(category.clone()),
        Op::Search(search) => state.set_search_text(search.clone()),
        Op::Compare(enabled) => state.set_compare_mode(*enabled),
        Op::Click(i) => {
            // Indices past the end click a name that does not exist.
            let name = state
                .dataset()
                .records()
                .get(*i)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| "Nobody".to_string());
            state.select_or_toggle(&name);
        }
    }
}

proptest! {
    #[test]
    fn visible_rows_are_a_subset_without_duplicates(opts in arb_options()) {
        let cat = catalog();
        let ds = cat.dataset(opts.dataset);
        let idx = visible_indices(ds, cat.taxonomy(opts.dataset), &opts);
        let unique: BTreeSet<usize> = idx.iter().copied().collect();
        prop_assert_eq!(unique.len(), idx.len());
        prop_assert!(idx.iter().all(|&i| i < ds.len()));
    }

    #[test]
    fn default_sort_keeps_canonical_order(opts in arb_options()) {
        let cat = catalog();
        let opts = ViewOptions { sort: SortMode::Default, ..opts };
        let idx = visible_indices(cat.dataset(opts.dataset), cat.taxonomy(opts.dataset), &opts);
        prop_assert!(idx.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn metric_sorts_are_monotonic(opts in arb_options()) {
        let cat = catalog();
        let ds = cat.dataset(opts.dataset);
        let idx = visible_indices(ds, cat.taxonomy(opts.dataset), &opts);
        let values: Vec<u8> = idx.iter().map(|&i| ds.records()[i].metric(opts.metric)).collect();
        match opts.sort {
            SortMode::Lowest => {
                prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
            }
            SortMode::Highest => {
                prop_assert!(values.windows(2).all(|w| w[0] >= w[1]));
            }
            _ => {}
        }
    }

    #[test]
    fn alphabetical_sort_is_idempotent(opts in arb_options()) {
        let cat = catalog();
        let ds = cat.dataset(opts.dataset);
        let opts = ViewOptions { sort: SortMode::Alphabetical, ..opts };
        let first: Vec<String> = visible_indices(ds, cat.taxonomy(opts.dataset), &opts)
            .into_iter()
            .map(|i| ds.records()[i].name.clone())
            .collect();
        let mut resorted = first.clone();
        resorted.sort_by(|a, b| collate_names(a, b));
        prop_assert_eq!(first, resorted);
    }

    #[test]
    fn dataset_switch_always_resets(ops in prop::collection::vec(arb_op(), 0..25)) {
        let mut state = AppState::new(catalog());
        for op in &ops {
            apply(&mut state, op);
        }
        let target = match state.options().dataset {
            DatasetKind::Occupations => DatasetKind::Majors,
            DatasetKind::Majors => DatasetKind::Occupations,
        };
        state.set_dataset_kind(target);
        prop_assert!(state.display().is_empty());
        prop_assert_eq!(&state.options().category, &CategoryFilter::All);
    }

    #[test]
    fn selection_stays_within_active_dataset_and_capacity(
        ops in prop::collection::vec(arb_op(), 0..40),
        capacity in 0usize..5,
    ) {
        let cat = catalog();
        let mut state = AppState::with_config(cat, ViewConfig { compare_capacity: capacity });
        for op in &ops {
            apply(&mut state, op);
            let names = record_names(state.catalog(), state.options().dataset);
            match state.display() {
                DisplayMode::List => {}
                DisplayMode::Detail(name) => {
                    prop_assert!(names.contains(name));
                }
                DisplayMode::Compare(set) => {
                    prop_assert!(set.len() <= capacity);
                    prop_assert!(set.iter().all(|n| names.contains(n)));
                    let unique: BTreeSet<&String> = set.iter().collect();
                    prop_assert_eq!(unique.len(), set.len());
                }
            }
        }
    }

    #[test]
    fn compare_toggle_twice_is_identity(
        preselect in prop::collection::vec(0usize..10, 0..5),
        target in 0usize..10,
    ) {
        let mut state = AppState::new(catalog());
        state.set_compare_mode(true);
        let names = record_names(state.catalog(), DatasetKind::Occupations);
        for i in preselect {
            state.select_or_toggle(&names[i]);
        }
        let before = compare_set(&state);
        state.select_or_toggle(&names[target]);
        state.select_or_toggle(&names[target]);
        // membership is restored; a re-added record moves to the end
        prop_assert_eq!(compare_set(&state), before);
    }

    #[test]
    fn severity_level_is_monotonic(a in 0u8..=100, b in 0u8..=100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(severity_level(lo) <= severity_level(hi));
    }
}

#[test]
fn occupations_engineer_search_has_single_match() {
    let mut state = AppState::new(catalog());
    state.set_search_text("engineer");
    state.set_sort_mode(SortMode::Highest);
    let rows = state.visible_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Civil Engineer");
    assert_eq!(rows[0].negative_exposure, 30);
    assert_eq!(rows[0].positive_exposure, 75);
}

#[test]
fn full_compare_set_ignores_fourth_pick() {
    let mut state = AppState::new(catalog());
    state.set_compare_mode(true);
    for name in ["Chef", "Software Developer", "Accountant", "Registered Nurse"] {
        state.select_or_toggle(name);
    }
    let before = state.display().clone();
    // toggling the rejected record again is still a no-op
    state.select_or_toggle("Registered Nurse");
    assert_eq!(state.display(), &before);
    assert_eq!(
        before,
        DisplayMode::Compare(vec![
            "Chef".to_string(),
            "Software Developer".to_string(),
            "Accountant".to_string(),
        ])
    );
}
