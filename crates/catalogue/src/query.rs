//! Read-only queries over the catalogue.

use rand::Rng;

use crate::error::{CatalogueError, CatalogueResult};
use crate::item::{Item, RentalStatus, StatusFilter};
use crate::store::CatalogueStore;

/// Keyword search.
///
/// The keyword is split on whitespace and an item matches when its name
/// contains any token, ignoring case. Results are grouped by token in input
/// order, so an item matching several tokens is listed once per token.
pub fn search(store: &CatalogueStore, keyword: &str) -> CatalogueResult<Vec<Item>> {
    let tokens: Vec<String> = keyword.split_whitespace().map(str::to_lowercase).collect();

    let matches = store.read(|items| {
        tokens
            .iter()
            .flat_map(|token| items.iter().filter(move |item| item.name_contains(token)))
            .cloned()
            .collect::<Vec<_>>()
    });

    if matches.is_empty() {
        return Err(CatalogueError::NoResults {
            keyword: keyword.to_string(),
        });
    }
    Ok(matches)
}

/// Items whose rental status passes `filter`.
///
/// `All` returns the whole catalogue and never fails; the other filters fail
/// with `EmptyResult` when nothing qualifies.
pub fn filter_by_status(store: &CatalogueStore, filter: StatusFilter) -> CatalogueResult<Vec<Item>> {
    let selected = store.read(|items| {
        items
            .iter()
            .filter(|item| filter.admits(item.status()))
            .cloned()
            .collect::<Vec<_>>()
    });

    match filter {
        StatusFilter::All => Ok(selected),
        StatusFilter::Rented if selected.is_empty() => {
            Err(CatalogueError::EmptyResult(RentalStatus::Rented))
        }
        StatusFilter::Available if selected.is_empty() => {
            Err(CatalogueError::EmptyResult(RentalStatus::Available))
        }
        StatusFilter::Rented | StatusFilter::Available => Ok(selected),
    }
}

/// `n` featured items drawn uniformly **with replacement**.
pub fn sample_random(store: &CatalogueStore, n: usize) -> Vec<Item> {
    sample_random_with(store, n, &mut rand::rng())
}

/// Like [`sample_random`], with a caller-supplied RNG.
///
/// An empty catalogue yields an empty sample regardless of `n`.
pub fn sample_random_with<R: Rng>(store: &CatalogueStore, n: usize, rng: &mut R) -> Vec<Item> {
    store.read(|items| {
        if items.is_empty() {
            return Vec::new();
        }
        (0..n)
            .map(|_| items[rng.random_range(0..items.len())].clone())
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use rental_core::ItemId;

    fn seeded() -> CatalogueStore {
        CatalogueStore::seeded().unwrap()
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name()).collect()
    }

    fn id_of(store: &CatalogueStore, name: &str) -> ItemId {
        store
            .all()
            .into_iter()
            .find(|i| i.name() == name)
            .map(|i| i.id_typed())
            .unwrap()
    }

    #[test]
    fn search_single_token_finds_iphone_only() {
        let found = search(&seeded(), "iphone").unwrap();
        assert_eq!(names(&found), vec!["Apple iPhone 14 Plus"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let found = search(&seeded(), "IPHONE").unwrap();
        assert_eq!(names(&found), vec!["Apple iPhone 14 Plus"]);
    }

    #[test]
    fn search_unknown_word_reports_no_results() {
        let err = search(&seeded(), "nonexistentword").unwrap_err();
        assert_eq!(
            err,
            CatalogueError::NoResults {
                keyword: "nonexistentword".to_string()
            }
        );
    }

    #[test]
    fn search_multi_token_is_or_and_keeps_duplicates() {
        let found = search(&seeded(), "apple pro").unwrap();
        // "apple" hits both Apple items, "pro" hits the MacBook again.
        assert_eq!(
            names(&found),
            vec![
                "Apple iPhone 14 Plus",
                "Apple MacBook Pro 13\"",
                "Apple MacBook Pro 13\"",
            ]
        );
    }

    #[test]
    fn search_blank_keyword_reports_no_results() {
        assert!(matches!(
            search(&seeded(), "   ").unwrap_err(),
            CatalogueError::NoResults { .. }
        ));
        assert!(matches!(
            search(&seeded(), "").unwrap_err(),
            CatalogueError::NoResults { .. }
        ));
    }

    #[test]
    fn search_ignores_repeated_spaces() {
        let found = search(&seeded(), "jbl   flip").unwrap();
        assert_eq!(names(&found), vec!["JBL Headphone", "Samsung Flip Phone"]);
    }

    #[test]
    fn filter_all_returns_full_catalogue() {
        let store = seeded();
        assert_eq!(filter_by_status(&store, StatusFilter::All).unwrap(), store.all());
    }

    #[test]
    fn filter_rented_on_fresh_catalogue_is_empty_result() {
        let err = filter_by_status(&seeded(), StatusFilter::Rented).unwrap_err();
        assert_eq!(err, CatalogueError::EmptyResult(RentalStatus::Rented));
    }

    #[test]
    fn filter_splits_rented_and_available() {
        let store = seeded();
        let jbl = id_of(&store, "JBL Headphone");
        store.set_rented(&jbl, true).unwrap();

        let rented = filter_by_status(&store, StatusFilter::Rented).unwrap();
        assert_eq!(names(&rented), vec!["JBL Headphone"]);

        let available = filter_by_status(&store, StatusFilter::Available).unwrap();
        assert_eq!(available.len(), 5);
        assert!(available.iter().all(|i| i.id_typed() != jbl));
    }

    #[test]
    fn filter_available_when_everything_rented_is_empty_result() {
        let store = seeded();
        for item in store.all() {
            store.set_rented(&item.id_typed(), true).unwrap();
        }
        let err = filter_by_status(&store, StatusFilter::Available).unwrap_err();
        assert_eq!(err, CatalogueError::EmptyResult(RentalStatus::Available));
    }

    #[test]
    fn sample_returns_requested_count_from_catalogue() {
        let store = seeded();
        let all = store.all();
        let sample = sample_random(&store, 3);
        assert_eq!(sample.len(), 3);
        assert!(sample.iter().all(|s| all.contains(s)));
    }

    #[test]
    fn sample_draws_with_replacement() {
        let store = seeded();
        let mut rng = StdRng::seed_from_u64(42);
        // More draws than items forces repeats.
        let sample = sample_random_with(&store, 20, &mut rng);
        assert_eq!(sample.len(), 20);
        let mut ids: Vec<ItemId> = sample.iter().map(|i| i.id_typed()).collect();
        ids.sort_by_key(|id| *id.as_uuid());
        ids.dedup();
        assert!(ids.len() < 20);
    }

    #[test]
    fn sample_is_reproducible_with_same_seed() {
        let store = seeded();
        let a = sample_random_with(&store, 5, &mut StdRng::seed_from_u64(7));
        let b = sample_random_with(&store, 5, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn sample_of_empty_catalogue_is_empty() {
        let store = CatalogueStore::new(Vec::new()).unwrap();
        assert!(sample_random(&store, 3).is_empty());
    }

    #[test]
    fn sample_of_zero_is_empty() {
        assert!(sample_random(&seeded(), 0).is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: every hit contains at least one token, and the hit
            /// count is the sum of per-token matches.
            #[test]
            fn search_hits_are_token_matches(keyword in "[A-Za-z0-9 ]{0,24}") {
                let store = seeded();
                let tokens: Vec<String> =
                    keyword.split_whitespace().map(str::to_lowercase).collect();
                let expected: usize = tokens
                    .iter()
                    .map(|t| store.all().iter().filter(|i| i.name().to_lowercase().contains(t.as_str())).count())
                    .sum();

                match search(&store, &keyword) {
                    Ok(found) => {
                        prop_assert_eq!(found.len(), expected);
                        for item in &found {
                            let name = item.name().to_lowercase();
                            prop_assert!(tokens.iter().any(|t| name.contains(t.as_str())));
                        }
                    }
                    Err(CatalogueError::NoResults { .. }) => prop_assert_eq!(expected, 0),
                    Err(other) => prop_assert!(false, "unexpected error {:?}", other),
                }
            }

            /// Property: sampling always yields exactly `n` catalogue members.
            #[test]
            fn sample_length_matches_request(n in 0usize..64, seed in any::<u64>()) {
                let store = seeded();
                let all = store.all();
                let sample = sample_random_with(&store, n, &mut StdRng::seed_from_u64(seed));
                prop_assert_eq!(sample.len(), n);
                prop_assert!(sample.iter().all(|s| all.contains(s)));
            }
        }
    }
}
