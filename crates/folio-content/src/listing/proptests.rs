//! Property-based tests for the derived view.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::listing::{CategoryFilter, ListState, SortKey};
    use folio_core::Project;
    use proptest::prelude::*;

    const CATEGORIES: [&str; 3] = ["Web", "Data", "Embedded"];

    /// Datasets with unique ids, titles, and dates so every ordering is
    /// strict and reversal comparisons are exact.
    fn dataset() -> impl Strategy<Value = Vec<Project>> {
        prop::collection::btree_set(0u32..5000, 0..20).prop_flat_map(|days| {
            let days: Vec<u32> = days.into_iter().collect();
            let n = days.len();
            (Just(days), prop::collection::vec(0usize..CATEGORIES.len(), n)).prop_map(
                |(days, cats)| {
                    days.iter()
                        .zip(cats)
                        .enumerate()
                        .map(|(i, (day, cat))| {
                            let date = chrono::NaiveDate::from_ymd_opt(2010, 1, 1).unwrap()
                                + chrono::Duration::days(i64::from(*day));
                            Project::new(
                                i.to_string(),
                                format!("Project {day:05}"),
                                CATEGORIES[cat],
                                date.format("%Y-%-m-%-d").to_string(),
                                format!("Description {i}"),
                            )
                        })
                        .collect()
                },
            )
        })
    }

    fn ids(view: &[&Project]) -> Vec<String> {
        view.iter().map(|p| p.id.to_string()).collect()
    }

    proptest! {
        #[test]
        fn test_exact_title_query_finds_record(records in dataset()) {
            let state = ListState::new(records.clone());
            for record in &records {
                let found = state.clone().with_query(record.title.clone());
                prop_assert!(found.view().iter().any(|p| p.id == record.id));
            }
        }

        #[test]
        fn test_all_category_is_full_set(records in dataset()) {
            let state = ListState::new(records.clone()).with_category(CategoryFilter::All);
            let mut got = ids(&state.view());
            let mut want: Vec<String> = records.iter().map(|p| p.id.to_string()).collect();
            got.sort();
            want.sort();
            prop_assert_eq!(got, want);
        }

        #[test]
        fn test_category_filter_only_yields_that_category(
            records in dataset(),
            cat in 0usize..CATEGORIES.len(),
        ) {
            let state = ListState::new(records)
                .with_category(CategoryFilter::Only(CATEGORIES[cat].to_string()));
            prop_assert!(state.view().iter().all(|p| p.category == CATEGORIES[cat]));
        }

        #[test]
        fn test_date_desc_reversed_is_date_asc(records in dataset()) {
            let state = ListState::new(records);
            let mut desc = ids(&state.clone().with_sort(SortKey::DateDesc).view());
            desc.reverse();
            let asc = ids(&state.with_sort(SortKey::DateAsc).view());
            prop_assert_eq!(desc, asc);
        }

        #[test]
        fn test_name_asc_reversed_is_name_desc(records in dataset()) {
            let state = ListState::new(records);
            let mut asc = ids(&state.clone().with_sort(SortKey::NameAsc).view());
            asc.reverse();
            let desc = ids(&state.with_sort(SortKey::NameDesc).view());
            prop_assert_eq!(asc, desc);
        }

        #[test]
        fn test_view_never_grows(records in dataset(), query in "[a-z ]{0,4}") {
            let state = ListState::new(records.clone()).with_query(query);
            prop_assert!(state.view().len() <= records.len());
        }
    }
}
