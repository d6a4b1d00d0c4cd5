// Integration tests for the shell, theme propagation and panel state
mod fixtures;

use admin_dashboard::models::theme::Theme;
use admin_dashboard::models::view::ViewId;
use admin_dashboard::services::calendar::{CalendarAction, CalendarState, Direction, MonthCursor};
use admin_dashboard::services::config::AppConfig;
use admin_dashboard::services::kanban::Board;
use admin_dashboard::services::seed;
use admin_dashboard::services::shell::{AppShell, ShellAction, SIDEBAR_COLLAPSED_WIDTH};
use admin_dashboard::services::table::{RoleFilter, SortKey, TableAction, TableState};
use pretty_assertions::assert_eq;

#[test]
fn test_theme_change_reaches_every_consumer() {
    let mut shell = AppShell::default();
    assert_eq!(shell.layout().classes.gradient_from, Theme::Blue.classes().gradient_from);

    shell.apply(ShellAction::SelectTheme(Theme::Green));

    let layout = shell.layout();
    assert_eq!(layout.theme, Theme::Green);
    assert_eq!(layout.classes, Theme::Green.classes());
    assert_eq!(shell.theme_store().classes(), Theme::Green.classes());
}

#[test]
fn test_theme_survives_view_switching() {
    let mut shell = AppShell::default();
    shell.apply(ShellAction::SelectTheme(Theme::Purple));

    for view in ViewId::ALL {
        shell.apply(ShellAction::SelectView(view));
        let layout = shell.layout();
        assert_eq!(layout.active.id, view);
        assert_eq!(layout.theme, Theme::Purple);
        assert_eq!(layout.nav.iter().filter(|item| item.active).count(), 1);
    }
}

#[test]
fn test_unknown_ids_leave_shell_untouched() {
    let mut shell = AppShell::new(Theme::Orange, ViewId::Kanban, false);
    let before = shell.clone();

    assert!(shell.set_theme_by_id("teal").is_err());
    assert!(shell.set_active_view_by_id("reports").is_err());

    assert_eq!(shell, before);
}

#[test]
fn test_config_drives_initial_shell() {
    let config = AppConfig::from_toml_str(
        r#"
        theme = "orange"
        start_view = "calendar"
        sidebar_collapsed = true
        calendar_month = "2024-06"
        "#,
    )
    .expect("config parses");

    let options = config.resolve();
    let shell = AppShell::from_options(&options);

    assert_eq!(shell.theme(), Theme::Orange);
    assert_eq!(shell.active_view(), ViewId::Calendar);
    assert_eq!(shell.layout().sidebar_width, SIDEBAR_COLLAPSED_WIDTH);
    assert_eq!(options.calendar_month, Some(MonthCursor::new(2024, 6).unwrap()));
}

#[test]
fn test_table_search_and_role_compose() {
    let users = fixtures::overlapping_users();

    let state = TableState::default().with(TableAction::SetSearch("ann".into()));
    assert_eq!(state.view(&users).names(), vec!["Ann Lee", "Bob Annis", "Cara Diaz"]);

    let state = state.with(TableAction::SetRoleFilter(RoleFilter::User));
    let view = state.view(&users);
    assert_eq!(view.names(), vec!["Bob Annis"]);
    assert_eq!(view.summary(), "Showing 1 of 4 users");
}

#[test]
fn test_table_join_date_descending() {
    let users = seed::users();
    let state = TableState::default()
        .with(TableAction::SortBy(SortKey::JoinDate))
        .with(TableAction::SortBy(SortKey::JoinDate));

    assert_eq!(
        state.view(&users).names(),
        vec!["Alex Chen", "Emma Davis", "Mike Johnson", "Sarah Wilson", "John Doe"]
    );
}

#[test]
fn test_calendar_walks_across_year_boundary() {
    let december = MonthCursor::new(2024, 12).unwrap();
    let mut state = CalendarState::new(december);

    state.apply(CalendarAction::Navigate(Direction::Next));
    assert_eq!(state.current_month(), MonthCursor::new(2025, 1).unwrap());

    state.apply(CalendarAction::Navigate(Direction::Prev));
    state.apply(CalendarAction::Navigate(Direction::Prev));
    assert_eq!(state.current_month(), MonthCursor::new(2024, 11).unwrap());
}

#[test]
fn test_busy_day_collapses_overflow() {
    let day = fixtures::date(2024, 6, 3);
    let events = fixtures::busy_day(day);
    let state = CalendarState::new(MonthCursor::containing(day));

    let grid = state.grid(&events, fixtures::date(2024, 6, 1));
    let cell = grid.day(3).expect("June 3 present");

    assert_eq!(cell.visible_events().len(), 2);
    assert_eq!(cell.overflow_label().as_deref(), Some("+3 more"));
    assert!(!cell.is_today);
    assert!(grid.day(1).expect("June 1 present").is_today);
}

#[test]
fn test_seed_board_stats() {
    let board = Board::new(seed::kanban_columns());
    let stats = board.stats();

    assert_eq!(stats.total, 7);
    assert_eq!(stats.in_progress, 2);
    assert_eq!(stats.in_review, 1);
    assert_eq!(stats.completed, 2);
}
