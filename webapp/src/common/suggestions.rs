use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::common::storage::{SearchStorage, get_local_storage, set_local_storage};

// submitted queries in submission order, duplicates included
//
// the transparent repr keeps the persisted value a plain json array so the
// history survives schema-free across sessions
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionList {
    queries: Vec<String>,
}

impl SuggestionList {
    pub fn push(&mut self, query: &str) {
        self.queries.push(String::from(query));
    }

    pub fn clear(&mut self) {
        self.queries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    // duplicates collapse onto their first occurrence before matching, and
    // an empty needle matches everything
    pub fn filtered(&self, needle: &str) -> Vec<String> {
        let needle = needle.to_lowercase();

        let mut seen = HashSet::new();

        self.queries
            .iter()
            .filter(|query| seen.insert(query.as_str()))
            .filter(|query| query.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

impl SearchStorage for SuggestionList {
    fn store(&self) -> () {
        set_local_storage("search_history", &self)
    }

    fn fetch() -> Self {
        match get_local_storage("search_history") {
            Ok(val) => val,
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(queries: &[&str]) -> SuggestionList {
        let mut list = SuggestionList::default();

        for query in queries {
            list.push(query);
        }

        list
    }

    #[test]
    fn filter_matches_needle_anywhere_in_query() {
        let list = history(&["Cats", "dog", "Catalog"]);

        assert_eq!(list.filtered("cat"), vec!["Cats", "Catalog"]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let list = history(&["Cats", "dog", "Catalog"]);

        assert_eq!(list.filtered("CAT"), vec!["Cats", "Catalog"]);
    }

    #[test]
    fn empty_needle_lists_every_distinct_query() {
        let list = history(&["Cats", "dog", "Catalog"]);

        assert_eq!(list.filtered(""), vec!["Cats", "dog", "Catalog"]);
    }

    #[test]
    fn duplicates_collapse_onto_first_occurrence() {
        let list = history(&["Cats", "dog", "Cats", "Catalog", "dog"]);

        assert_eq!(list.filtered(""), vec!["Cats", "dog", "Catalog"]);
    }

    #[test]
    fn storage_keeps_duplicates_in_submission_order() {
        let list = history(&["a", "b", "a"]);

        assert_eq!(
            serde_json::to_string(&list).unwrap(),
            r#"["a","b","a"]"#
        );
    }

    #[test]
    fn persisted_form_is_a_plain_array() {
        let list: SuggestionList = serde_json::from_str(r#"["sunset","bridge"]"#).unwrap();

        assert_eq!(list.filtered(""), vec!["sunset", "bridge"]);
    }

    #[test]
    fn clear_empties_the_history() {
        let mut list = history(&["Cats", "dog"]);

        list.clear();

        assert!(list.is_empty());
        assert!(list.filtered("").is_empty());
    }

    #[test]
    fn unmatched_needle_yields_nothing() {
        let list = history(&["Cats", "dog"]);

        assert!(list.filtered("zebra").is_empty());
    }
}
