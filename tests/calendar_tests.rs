//! Pure projection / lock-policy properties, exercised through the library API.

use chrono::NaiveDate;
use leavelogger::core::calendar::{CalendarProjector, ViewContext};
use leavelogger::models::record::AttendanceRecord;
use leavelogger::models::role::Role;
use leavelogger::models::status::LeaveStatus;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn leave(emp: &str, date: NaiveDate) -> AttendanceRecord {
    AttendanceRecord::new(0, emp, date, LeaveStatus::Leave, "test")
}

#[test]
fn test_grid_has_one_cell_per_day_ascending() {
    let cases: [(i32, u32, usize, usize); 4] = [
        (2024, 2, 29, 4), // leap February, 1st falls on Thursday
        (2023, 2, 28, 3),
        (2024, 3, 31, 5), // 1st falls on Friday
        (2024, 9, 30, 0), // 1st falls on Sunday: no leading slots
    ];

    for (year, month, n_days, offset) in cases {
        let ctx = ViewContext::new(Role::Employee, false, year, month);
        let grid = CalendarProjector::project(&ctx, d(2024, 5, 1), &[]);

        let leading = grid.iter().take_while(|c| c.day.is_none()).count();
        assert_eq!(leading, offset, "leading slots for {}-{}", year, month);

        let days: Vec<u32> = grid.iter().filter_map(|c| c.day).collect();
        assert_eq!(days.len(), n_days, "day count for {}-{}", year, month);
        assert_eq!(days, (1..=n_days as u32).collect::<Vec<_>>());
        assert_eq!(grid.len(), offset + n_days);
    }
}

#[test]
fn test_withdrawn_records_never_surface() {
    let mut withdrawn = leave("E0002", d(2024, 3, 5));
    withdrawn.withdrawn = true;
    let active = leave("E0002", d(2024, 3, 7));

    let ctx = ViewContext::new(Role::Admin, false, 2024, 3);
    let grid = CalendarProjector::project(&ctx, d(2024, 5, 1), &[withdrawn, active]);

    for cell in &grid {
        assert!(cell.records.iter().all(|r| !r.withdrawn));
    }

    let day5 = grid.iter().find(|c| c.day == Some(5)).unwrap();
    assert!(day5.records.is_empty());
    let day7 = grid.iter().find(|c| c.day == Some(7)).unwrap();
    assert_eq!(day7.records.len(), 1);
}

#[test]
fn test_lock_flag_is_month_granular() {
    let ctx = ViewContext::new(Role::Employee, false, 2024, 3);
    let grid = CalendarProjector::project(&ctx, d(2024, 5, 1), &[]);

    let flags: Vec<bool> = grid
        .iter()
        .filter(|c| c.day.is_some())
        .map(|c| c.is_locked)
        .collect();

    assert!(flags.iter().all(|&f| f));
    assert_eq!(flags.len(), 31);
}

#[test]
fn test_role_table_for_past_months() {
    let today = d(2024, 5, 1);
    let cases = [
        (Role::Admin, false, false),
        (Role::Admin, true, false),
        (Role::Manager, true, false),
        (Role::Manager, false, true),
        (Role::Employee, false, true),
        (Role::Employee, true, true),
    ];

    for (role, viewing_subordinate, expect_locked) in cases {
        let ctx = ViewContext::new(role, viewing_subordinate, 2024, 3);
        let grid = CalendarProjector::project(&ctx, today, &[]);
        let day1 = grid.iter().find(|c| c.day == Some(1)).unwrap();
        assert_eq!(
            day1.is_locked, expect_locked,
            "role {:?}, subordinate {}",
            role, viewing_subordinate
        );
    }
}

#[test]
fn test_current_and_future_months_never_lock() {
    let today = d(2024, 5, 15);

    for (year, month) in [(2024, 5), (2024, 6), (2025, 1)] {
        let ctx = ViewContext::new(Role::Employee, false, year, month);
        let grid = CalendarProjector::project(&ctx, today, &[]);
        assert!(grid.iter().all(|c| !c.is_locked), "{}-{}", year, month);
    }
}

#[test]
fn test_past_day_of_current_month_stays_editable() {
    // month granularity: the 1st of the current month is editable even
    // when today is the 20th
    let today = d(2024, 5, 20);
    let ctx = ViewContext::new(Role::Employee, false, 2024, 5);
    let grid = CalendarProjector::project(&ctx, today, &[]);

    let day1 = grid.iter().find(|c| c.day == Some(1)).unwrap();
    assert!(CalendarProjector::authorize_edit(day1));
}

#[test]
fn test_march_2024_employee_scenario() {
    let records = vec![leave("E0002", d(2024, 3, 5))];
    let ctx = ViewContext::new(Role::Employee, false, 2024, 3);
    let grid = CalendarProjector::project(&ctx, d(2024, 5, 1), &records);

    let day5 = grid.iter().find(|c| c.day == Some(5)).unwrap();
    assert_eq!(day5.records.len(), 1);
    assert_eq!(day5.records[0].status, LeaveStatus::Leave);
    assert_eq!(day5.date_key, "2024-03-05");

    assert!(grid.iter().filter(|c| c.day.is_some()).all(|c| c.is_locked));

    // same month through a manager viewing the subordinate: unlocked
    let mgr_ctx = ViewContext::new(Role::Manager, true, 2024, 3);
    let mgr_grid = CalendarProjector::project(&mgr_ctx, d(2024, 5, 1), &records);
    assert!(mgr_grid.iter().all(|c| !c.is_locked));
}

#[test]
fn test_authorize_edit_gate() {
    let ctx = ViewContext::new(Role::Employee, false, 2024, 3);
    let grid = CalendarProjector::project(&ctx, d(2024, 5, 1), &[]);

    // leading empty slot: never editable (March 2024 starts on Friday)
    assert!(grid[0].day.is_none());
    assert!(!CalendarProjector::authorize_edit(&grid[0]));

    // locked day: not editable
    let day5 = grid.iter().find(|c| c.day == Some(5)).unwrap();
    assert!(!CalendarProjector::authorize_edit(day5));

    // unlocked day: editable
    let open_ctx = ViewContext::new(Role::Manager, true, 2024, 3);
    let open_grid = CalendarProjector::project(&open_ctx, d(2024, 5, 1), &[]);
    let open_day = open_grid.iter().find(|c| c.day == Some(5)).unwrap();
    assert!(CalendarProjector::authorize_edit(open_day));
}

#[test]
fn test_weekend_flags_follow_sunday_first_convention() {
    let ctx = ViewContext::new(Role::Admin, false, 2024, 3);
    let grid = CalendarProjector::project(&ctx, d(2024, 5, 1), &[]);

    // 2024-03-02 Saturday, 2024-03-03 Sunday, 2024-03-04 Monday
    let by_day = |n: u32| grid.iter().find(|c| c.day == Some(n)).unwrap();
    assert!(by_day(2).is_weekend);
    assert!(by_day(3).is_weekend);
    assert!(!by_day(4).is_weekend);
}
