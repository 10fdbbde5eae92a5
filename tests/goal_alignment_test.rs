// ABOUTME: Tests for goal alignment of recent rep ranges and session volume
// ABOUTME: Covers every goal, the recent session window, volume bands, and empty history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{bench_press, days_ago, single_exercise_session};
use gymbo::models::{CompletedSession, FitnessGoal, UserProfile};
use gymbo_intelligence::{GoalAlignment, GoalAlignmentAnalyzer, RepRangeAlignment, VolumeAlignment};

fn profile(goal: FitnessGoal) -> UserProfile {
    UserProfile {
        goal,
        ..UserProfile::default()
    }
}

/// Sessions on consecutive days carrying `sets` sets of `weight × reps`
fn sessions(count: i64, weight: f64, reps: u32, sets: usize) -> Vec<CompletedSession> {
    let bench = bench_press();
    (1..=count)
        .map(|day| single_exercise_session(days_ago(day), &bench, &vec![(weight, reps); sets]))
        .collect()
}

#[test]
fn test_muscle_building_with_low_reps() {
    common::init_test_logging();
    // 6 reps × 100 kg × 10 sets keeps volume in the normal band
    let history = sessions(5, 100.0, 6, 10);

    let alignment =
        GoalAlignmentAnalyzer::default().analyze(&history, &profile(FitnessGoal::MuscleBuilding));
    assert_eq!(alignment.rep_range, RepRangeAlignment::TooLow);
    assert_eq!(alignment.volume, VolumeAlignment::Good);
    assert_eq!(alignment.average_reps, Some(6.0));
    assert_eq!(alignment.suggestions.len(), 1);
    assert!(alignment.suggestions[0].contains("8-12"));
}

#[test]
fn test_muscle_building_with_high_reps() {
    let history = sessions(3, 40.0, 15, 10);

    let alignment =
        GoalAlignmentAnalyzer::default().analyze(&history, &profile(FitnessGoal::MuscleBuilding));
    assert_eq!(alignment.rep_range, RepRangeAlignment::TooHigh);
    assert!(alignment.suggestions[0].contains("8-12"));
}

#[test]
fn test_strength_with_high_reps() {
    let history = sessions(4, 60.0, 10, 10);

    let alignment =
        GoalAlignmentAnalyzer::default().analyze(&history, &profile(FitnessGoal::Strength));
    assert_eq!(alignment.rep_range, RepRangeAlignment::TooHigh);
    assert!(alignment.suggestions[0].contains("3-6"));
}

#[test]
fn test_strength_in_band() {
    let history = sessions(4, 150.0, 5, 10);

    let alignment =
        GoalAlignmentAnalyzer::default().analyze(&history, &profile(FitnessGoal::Strength));
    assert_eq!(alignment.rep_range, RepRangeAlignment::Good);
    assert!(alignment.suggestions.is_empty());
}

#[test]
fn test_endurance_with_low_reps() {
    let history = sessions(4, 60.0, 10, 10);

    let alignment =
        GoalAlignmentAnalyzer::default().analyze(&history, &profile(FitnessGoal::Endurance));
    assert_eq!(alignment.rep_range, RepRangeAlignment::TooLow);
    assert!(alignment.suggestions[0].contains("15+"));
}

#[test]
fn test_weight_loss_and_general_accept_any_reps() {
    let history = sessions(4, 100.0, 2, 30);

    for goal in [FitnessGoal::WeightLoss, FitnessGoal::General] {
        let alignment = GoalAlignmentAnalyzer::default().analyze(&history, &profile(goal));
        assert_eq!(alignment.rep_range, RepRangeAlignment::Good);
    }
}

#[test]
fn test_only_recent_sessions_are_considered() {
    let bench = bench_press();
    let mut history = sessions(5, 80.0, 10, 10);
    history.extend(
        (10..13).map(|day| single_exercise_session(days_ago(day), &bench, &[(120.0, 3); 10])),
    );

    let alignment =
        GoalAlignmentAnalyzer::default().analyze(&history, &profile(FitnessGoal::MuscleBuilding));
    assert_eq!(alignment.rep_range, RepRangeAlignment::Good);
    assert_eq!(alignment.average_reps, Some(10.0));
}

#[test]
fn test_volume_bands() {
    let light = sessions(3, 20.0, 10, 3);
    let alignment =
        GoalAlignmentAnalyzer::default().analyze(&light, &profile(FitnessGoal::General));
    assert_eq!(alignment.volume, VolumeAlignment::TooLow);
    assert!((alignment.average_session_volume - 600.0).abs() < 1e-9);
    assert_eq!(
        alignment.suggestions,
        vec!["Increase your training volume for better results".to_owned()]
    );

    let heavy = sessions(3, 200.0, 10, 20);
    let alignment =
        GoalAlignmentAnalyzer::default().analyze(&heavy, &profile(FitnessGoal::General));
    assert_eq!(alignment.volume, VolumeAlignment::TooHigh);
    assert_eq!(
        alignment.suggestions,
        vec!["Reduce your volume to avoid overtraining".to_owned()]
    );
}

#[test]
fn test_empty_history_is_aligned() {
    let alignment =
        GoalAlignmentAnalyzer::default().analyze(&[], &profile(FitnessGoal::Strength));
    assert_eq!(alignment, GoalAlignment::aligned(FitnessGoal::Strength));
    assert_eq!(alignment.rep_range, RepRangeAlignment::Good);
    assert_eq!(alignment.volume, VolumeAlignment::Good);
    assert!(alignment.suggestions.is_empty());
}
