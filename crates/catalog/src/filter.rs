//! Filter state and the query builder.
//!
//! `FilterState` is the current search/filter/page selection driving the
//! next fetch. `query_pairs` maps it deterministically onto the query
//! parameters of `GET /character`.

use crate::types::{Gender, Status};

/// Current search text, filters and page.
///
/// `None` for `status`/`gender` means "no filter" and the parameter is
/// omitted from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub name: String,
    pub status: Option<Status>,
    pub gender: Option<Gender>,
    /// 1-based page index
    pub page: u32,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            status: None,
            gender: None,
            page: 1,
        }
    }

    /// Builder-style helper for the name filter
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_status(mut self, status: Option<Status>) -> Self {
        self.status = status;
        self
    }

    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Build the query parameters for this state.
    ///
    /// ## Algorithm
    /// 1. `page` is always present
    /// 2. `name` only when non-empty
    /// 3. `status` and `gender` only when set, in lowercase wire form
    ///
    /// Pure: the same state always yields the same pairs in the same order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string())];

        if !self.name.is_empty() {
            pairs.push(("name", self.name.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.query_value().to_string()));
        }
        if let Some(gender) = self.gender {
            pairs.push(("gender", gender.query_value().to_string()));
        }

        pairs
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn keys(state: &FilterState) -> Vec<&'static str> {
        state.query_pairs().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_default_state_only_sends_page() {
        let state = FilterState::new();
        assert_eq!(state.query_pairs(), vec![("page", "1".to_string())]);
    }

    #[test]
    fn test_all_filters_in_order() {
        let state = FilterState::new()
            .with_name("rick")
            .with_status(Some(Status::Alive))
            .with_gender(Some(Gender::Male))
            .with_page(3);

        assert_eq!(
            state.query_pairs(),
            vec![
                ("page", "3".to_string()),
                ("name", "rick".to_string()),
                ("status", "alive".to_string()),
                ("gender", "male".to_string()),
            ]
        );
    }

    #[test]
    fn test_with_page_never_goes_below_one() {
        assert_eq!(FilterState::new().with_page(0).page, 1);
    }

    fn status_strategy() -> impl Strategy<Value = Option<Status>> {
        prop_oneof![
            Just(None),
            Just(Some(Status::Alive)),
            Just(Some(Status::Dead)),
            Just(Some(Status::Unknown)),
        ]
    }

    fn gender_strategy() -> impl Strategy<Value = Option<Gender>> {
        prop_oneof![
            Just(None),
            Just(Some(Gender::Female)),
            Just(Some(Gender::Male)),
            Just(Some(Gender::Genderless)),
            Just(Some(Gender::Unknown)),
        ]
    }

    prop_compose! {
        fn filter_state()(
            name in "[a-zA-Z ]{0,12}",
            status in status_strategy(),
            gender in gender_strategy(),
            page in 1u32..100,
        ) -> FilterState {
            FilterState { name, status, gender, page }
        }
    }

    proptest! {
        #[test]
        fn prop_page_always_present(state in filter_state()) {
            prop_assert_eq!(keys(&state)[0], "page");
        }

        #[test]
        fn prop_optional_keys_iff_non_empty(state in filter_state()) {
            let keys = keys(&state);
            prop_assert_eq!(keys.contains(&"name"), !state.name.is_empty());
            prop_assert_eq!(keys.contains(&"status"), state.status.is_some());
            prop_assert_eq!(keys.contains(&"gender"), state.gender.is_some());
        }

        #[test]
        fn prop_query_is_idempotent(state in filter_state()) {
            prop_assert_eq!(state.query_pairs(), state.query_pairs());
        }
    }
}
