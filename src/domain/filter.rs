use super::models::Item;
use super::selection::Selection;

/// Computes the candidate list for a query.
///
/// A catalog item is a candidate when its name contains `query`
/// (case-insensitively) and it is not already selected. Exclusion is by id.
/// An empty query lists every unselected item. Catalog order is preserved.
#[must_use]
pub fn filter_candidates(query: &str, selection: &Selection, catalog: &[Item]) -> Vec<Item> {
    let query_lower = query.to_lowercase();

    catalog
        .iter()
        .filter(|item| !selection.contains(item.id))
        .filter(|item| matches_query(item, &query_lower))
        .cloned()
        .collect()
}

fn matches_query(item: &Item, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    item.name
        .as_ref()
        .is_some_and(|name| name.to_lowercase().contains(query_lower))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ItemId;

    fn catalog() -> Vec<Item> {
        vec![
            Item::new(1, "Alice", "a@x"),
            Item::new(2, "Bob", "b@x"),
            Item::new(3, "Alicia Keys", "ak@x"),
            Item {
                id: ItemId(4),
                name: None,
                email: "ghost@x".to_string(),
            },
        ]
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(Item::label).collect()
    }

    #[test]
    fn test_case_insensitive_substring() {
        let result = filter_candidates("ALI", &Selection::default(), &catalog());
        assert_eq!(names(&result), vec!["Alice", "Alicia Keys"]);

        let result = filter_candidates("o", &Selection::default(), &catalog());
        assert_eq!(names(&result), vec!["Bob"]);
    }

    #[test]
    fn test_excludes_selected_by_id() {
        let mut selection = Selection::default();
        selection.add(Item::new(1, "Alice", "a@x"));

        let result = filter_candidates("ali", &selection, &catalog());
        assert_eq!(names(&result), vec!["Alicia Keys"]);
    }

    #[test]
    fn test_same_name_different_id_is_not_excluded() {
        let catalog = vec![Item::new(1, "Sam", "sam1@x"), Item::new(2, "Sam", "sam2@x")];
        let mut selection = Selection::default();
        selection.add(catalog[0].clone());

        let result = filter_candidates("sam", &selection, &catalog);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ItemId(2));
    }

    #[test]
    fn test_empty_query_shows_all_unselected() {
        let mut selection = Selection::default();
        selection.add(Item::new(2, "Bob", "b@x"));

        let result = filter_candidates("", &selection, &catalog());
        let ids: Vec<u64> = result.iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_missing_name_never_matches_typed_query() {
        let result = filter_candidates("ghost", &Selection::default(), &catalog());
        assert!(result.is_empty());
    }

    #[test]
    fn test_results_satisfy_filter_properties() {
        use rand::{Rng, SeedableRng};

        let catalog = catalog();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let alphabet: Vec<char> = "aAbBcEiIlLoOsy ".chars().collect();

        for _ in 0..500 {
            let len = rng.gen_range(0..4);
            let query: String = (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();

            let mut selection = Selection::default();
            for item in &catalog {
                if rng.gen_bool(0.3) {
                    selection.add(item.clone());
                }
            }

            let result = filter_candidates(&query, &selection, &catalog);
            for item in &result {
                assert!(!selection.contains(item.id));
                if !query.is_empty() {
                    let name = item.name.as_deref().unwrap_or_default().to_lowercase();
                    assert!(name.contains(&query.to_lowercase()));
                }
            }
        }
    }
}
