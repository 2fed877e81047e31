//! Class counts over many draws.

use habits::selection::ClassCounts;

use crate::fixtures::{date, sized_pool, TestData};

/// For pools with at least 5 daily, 2 weekly and 1 monthly templates every
/// draw has 3-5 daily, 1-2 weekly and 0-1 monthly tasks.
#[test]
fn test_refresh_draws_stay_in_bounds() {
    let data = TestData::new();
    data.write_pool(&sized_pool(7, 5, 4));
    let mut tracker = data.open(2026, date(2026, 10, 18));
    tracker.load_today().unwrap();

    let mut seen_monthly = [false; 2];
    let mut seen_weekly = [false; 2];
    for _ in 0..200 {
        let selection = tracker.refresh().unwrap().cloned().unwrap();
        let counts = ClassCounts::of(selection.tasks());

        assert!((3..=5).contains(&counts.daily), "daily={}", counts.daily);
        assert!((1..=2).contains(&counts.weekly), "weekly={}", counts.weekly);
        assert!(counts.monthly <= 1, "monthly={}", counts.monthly);
        assert!((4..=8).contains(&selection.len()));

        seen_weekly[counts.weekly - 1] = true;
        seen_monthly[counts.monthly] = true;
    }

    assert_eq!(seen_weekly, [true, true]);
    assert_eq!(seen_monthly, [true, true]);
}

/// Pools smaller than the draw sizes are taken whole.
#[test]
fn test_small_classes_are_capped() {
    let data = TestData::new();
    data.write_pool(&sized_pool(1, 1, 0));
    let mut tracker = data.open(5, date(2026, 10, 18));

    for _ in 0..20 {
        let selection = tracker.refresh().unwrap().cloned().unwrap();
        assert_eq!(
            ClassCounts::of(selection.tasks()),
            ClassCounts {
                daily: 1,
                weekly: 1,
                monthly: 0
            }
        );
    }
}

/// A monthly-only pool can legitimately produce an empty day.
#[test]
fn test_monthly_only_pool_may_be_empty() {
    let data = TestData::new();
    data.write_pool(&sized_pool(0, 0, 3));
    let mut tracker = data.open(13, date(2026, 10, 18));

    let mut saw_empty = false;
    for _ in 0..100 {
        let selection = tracker.refresh().unwrap().cloned().unwrap();
        assert!(selection.len() <= 1);
        if selection.is_empty() {
            saw_empty = true;
            assert!(!selection.all_completed());
            assert_eq!(tracker.progress(), 0.0);
        }
    }
    assert!(saw_empty);
}
