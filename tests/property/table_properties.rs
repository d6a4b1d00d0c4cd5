// Property-based tests for table filtering and sorting

use admin_dashboard::models::user::User;
use admin_dashboard::services::seed;
use admin_dashboard::services::table::{RoleFilter, SortKey, TableAction, TableState};
use proptest::prelude::*;

fn role_filter() -> impl Strategy<Value = RoleFilter> {
    prop::sample::select(RoleFilter::ALL.to_vec())
}

fn sort_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(vec![SortKey::Name, SortKey::Role, SortKey::JoinDate])
}

fn ids(rows: &[&User]) -> Vec<u32> {
    rows.iter().map(|user| user.id).collect()
}

proptest! {
    /// Rows are always a subset of the input, with no duplicates
    #[test]
    fn prop_rows_are_subset(search in "[a-zA-Z@. ]{0,6}", filter in role_filter(), key in sort_key()) {
        let users = seed::users();
        let state = TableState::default()
            .with(TableAction::SetSearch(search))
            .with(TableAction::SetRoleFilter(filter))
            .with(TableAction::SortBy(key));

        let view = state.view(&users);
        let mut seen = ids(&view.rows);
        prop_assert!(seen.len() <= users.len());
        prop_assert_eq!(view.total, users.len());
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), view.rows.len());
    }

    /// Deriving the view twice from the same state gives the same rows
    #[test]
    fn prop_view_is_idempotent(search in "[a-z]{0,4}", filter in role_filter(), key in sort_key(), flip in any::<bool>()) {
        let users = seed::users();
        let mut state = TableState::default()
            .with(TableAction::SetSearch(search))
            .with(TableAction::SetRoleFilter(filter))
            .with(TableAction::SortBy(key));
        if flip {
            state.apply(TableAction::SortBy(key));
        }

        prop_assert_eq!(ids(&state.view(&users).rows), ids(&state.view(&users).rows));
    }

    /// Every visible row satisfies the role filter
    #[test]
    fn prop_role_filter_holds(filter in role_filter()) {
        let users = seed::users();
        let state = TableState::default().with(TableAction::SetRoleFilter(filter));
        for user in state.view(&users).rows {
            prop_assert!(filter.matches(user.role));
        }
    }

    /// Clicking the same header twice flips direction back
    #[test]
    fn prop_double_click_restores_direction(key in sort_key()) {
        let state = TableState::default().with(TableAction::SortBy(key));
        let twice = state.clone()
            .with(TableAction::SortBy(key))
            .with(TableAction::SortBy(key));
        prop_assert_eq!(state.sort_direction(), twice.sort_direction());
        prop_assert_eq!(state.sort_key(), twice.sort_key());
    }
}
