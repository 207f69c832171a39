use chrono::Utc;
use footprint_core::goals::{validate_reduction_percent, GoalOverview, GoalProgress, ReductionGoal};
use footprint_core::history::FootprintRecord;
use footprint_core::{compute, FootprintError, RawInput};

#[test]
fn reduction_percent_must_be_between_one_and_one_hundred() {
    for valid in [1.0, 15.0, 99.5, 100.0] {
        assert_eq!(validate_reduction_percent(valid).unwrap(), valid);
    }
    for invalid in [0.0, 0.99, 100.01, -5.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            validate_reduction_percent(invalid),
            Err(FootprintError::Validation(_))
        ));
    }
}

#[test]
fn goal_construction_validates() {
    let goal = ReductionGoal::new("user_1", 15.0).unwrap();
    assert_eq!(goal.owner_id, "user_1");
    assert_eq!(goal.reduction_percent, 15.0);
    assert!(goal.created_at <= Utc::now());

    assert!(ReductionGoal::new("user_1", 150.0).is_err());
}

#[test]
fn progress_splits_current_total() {
    let progress = GoalProgress::new(950.0, 15.0);
    assert_eq!(progress.current, 950.0);
    assert_eq!(progress.target, 807.5);
    assert_eq!(progress.target_reduction, 142.5);
}

#[test]
fn overview_only_reports_progress_with_goal_and_history() {
    let record = FootprintRecord::new("user_1", compute(RawInput::default()));
    let goal = ReductionGoal::new("user_1", 10.0).unwrap();

    let full = GoalOverview::new(Some(goal.clone()), Some(record.clone()));
    let progress = full.progress.expect("progress");
    assert_eq!(progress.current, 66.88);
    assert_eq!(progress.target, 60.19);
    assert_eq!(progress.target_reduction, 6.69);

    assert!(GoalOverview::new(Some(goal), None).progress.is_none());
    assert!(GoalOverview::new(None, Some(record)).progress.is_none());
}
