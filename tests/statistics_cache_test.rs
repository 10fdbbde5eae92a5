// ABOUTME: Tests for the memoized exercise statistics and week streak cache
// ABOUTME: Validates computed values, memoization, and explicit invalidation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{bench_press, days_ago, fixed_now, performed, session, single_exercise_session, squat};
use gymbo::models::{estimate_one_rep_max, OneRepMaxFormula};
use gymbo_intelligence::StatisticsCache;

#[test]
fn test_exercise_statistics() {
    common::init_test_logging();
    let bench = bench_press();
    let squat = squat();
    let sessions = vec![
        single_exercise_session(days_ago(2), &bench, &[(90.0, 5), (80.0, 8)]),
        session(
            days_ago(9),
            vec![
                performed(&bench, &[(85.0, 6)]),
                performed(&squat, &[(140.0, 5)]),
            ],
        ),
    ];

    let mut cache = StatisticsCache::default();
    let stats = cache.exercise_stats(bench.id, &sessions).clone();

    assert_eq!(stats.exercise_id, bench.id);
    assert!((stats.total_volume - (450.0 + 640.0 + 510.0)).abs() < 1e-9);
    assert_eq!(stats.total_reps, 19);
    assert!((stats.max_weight - 90.0).abs() < 1e-9);
    assert!((stats.best_estimated_one_rep_max - estimate_one_rep_max(90.0, 5)).abs() < 1e-9);

    // History runs oldest first
    assert_eq!(stats.history.len(), 2);
    assert_eq!(stats.history[0].date, days_ago(9));
    assert!((stats.history[0].volume - 510.0).abs() < 1e-9);
    assert_eq!(stats.history[1].date, days_ago(2));
}

#[test]
fn test_unknown_exercise_has_empty_statistics() {
    let bench = bench_press();
    let squat = squat();
    let sessions = vec![single_exercise_session(days_ago(1), &bench, &[(90.0, 5)])];

    let mut cache = StatisticsCache::new(OneRepMaxFormula::Brzycki);
    let stats = cache.exercise_stats(squat.id, &sessions);
    assert!(stats.history.is_empty());
    assert_eq!(stats.total_reps, 0);
}

#[test]
fn test_statistics_are_memoized_until_invalidated() {
    let bench = bench_press();
    let mut sessions = vec![single_exercise_session(days_ago(3), &bench, &[(80.0, 5)])];

    let mut cache = StatisticsCache::default();
    assert!(!cache.is_cached(bench.id));
    assert!((cache.exercise_stats(bench.id, &sessions).max_weight - 80.0).abs() < 1e-9);
    assert!(cache.is_cached(bench.id));

    sessions.push(single_exercise_session(days_ago(1), &bench, &[(100.0, 3)]));
    assert!((cache.exercise_stats(bench.id, &sessions).max_weight - 80.0).abs() < 1e-9);

    cache.invalidate_exercise(bench.id);
    assert!(!cache.is_cached(bench.id));
    assert!((cache.exercise_stats(bench.id, &sessions).max_weight - 100.0).abs() < 1e-9);

    cache.invalidate();
    assert!(!cache.is_cached(bench.id));
}

#[test]
fn test_week_streak_counts_consecutive_iso_weeks() {
    let bench = bench_press();
    // Sunday of the current week, then the two Sundays before, then a gap week
    let sessions: Vec<_> = [0, 7, 14, 28]
        .into_iter()
        .map(|day| single_exercise_session(days_ago(day), &bench, &[(60.0, 10)]))
        .collect();

    let mut cache = StatisticsCache::default();
    assert_eq!(cache.week_streak(&sessions, fixed_now()), 3);
}

#[test]
fn test_week_streak_is_zero_without_session_this_week() {
    let bench = bench_press();
    let sessions = vec![single_exercise_session(days_ago(7), &bench, &[(60.0, 10)])];

    let mut cache = StatisticsCache::default();
    assert_eq!(cache.week_streak(&sessions, fixed_now()), 0);
    assert_eq!(cache.week_streak(&[], fixed_now()), 0);
}

#[test]
fn test_week_streak_memoized_per_day() {
    let bench = bench_press();
    let mut sessions = vec![single_exercise_session(days_ago(7), &bench, &[(60.0, 10)])];

    let mut cache = StatisticsCache::default();
    assert_eq!(cache.week_streak(&sessions, fixed_now()), 0);

    sessions.push(single_exercise_session(days_ago(1), &bench, &[(60.0, 10)]));
    assert_eq!(cache.week_streak(&sessions, fixed_now()), 0);

    // A later check on the same day still hits the memo
    assert_eq!(
        cache.week_streak(&sessions, fixed_now() + Duration::hours(2)),
        0
    );

    // Next day (Monday) starts a new ISO week
    assert_eq!(
        cache.week_streak(&sessions, fixed_now() + Duration::days(1)),
        0
    );

    cache.invalidate();
    assert_eq!(cache.week_streak(&sessions, fixed_now()), 2);
}
