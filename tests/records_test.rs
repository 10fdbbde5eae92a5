// ABOUTME: Tests for personal record bookkeeping and one-rep-max estimation
// ABOUTME: Covers record updates, priority chain, reconciliation, statistics, and training weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{bench_press, days_ago, fixed_now, performed, session, single_exercise_session, squat};
use gymbo::models::{estimate_one_rep_max, ExerciseRecord, OneRepMaxFormula, RecordKind};
use gymbo_intelligence::{RecordSortCriteria, RecordStore};
use uuid::Uuid;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn record(weight: f64, reps: u32) -> ExerciseRecord {
    ExerciseRecord::from_first_set(
        Uuid::new_v4(),
        "Bench Press",
        weight,
        reps,
        days_ago(10),
        OneRepMaxFormula::Linear,
    )
}

#[test]
fn test_one_rep_max_single_and_zero_reps_equal_weight() {
    assert!(approx(estimate_one_rep_max(100.0, 1), 100.0));
    assert!(approx(estimate_one_rep_max(100.0, 0), 100.0));
    assert!(approx(OneRepMaxFormula::Brzycki.estimate(100.0, 1), 100.0));
    assert!(approx(OneRepMaxFormula::Brzycki.estimate(100.0, 0), 100.0));
}

#[test]
fn test_linear_one_rep_max() {
    assert!(approx(estimate_one_rep_max(100.0, 10), 100.0 * (1.0 + 10.0 / 30.0)));
    assert!(approx(estimate_one_rep_max(60.0, 30), 120.0));
}

#[test]
fn test_brzycki_falls_back_to_linear_when_singular() {
    let brzycki = OneRepMaxFormula::Brzycki.estimate(100.0, 10);
    assert!(approx(brzycki, 100.0 / (1.0278 - 0.278)));

    // 37 reps drive the denominator below zero
    assert!(approx(
        OneRepMaxFormula::Brzycki.estimate(50.0, 37),
        OneRepMaxFormula::Linear.estimate(50.0, 37)
    ));
}

#[test]
fn test_formula_parsing() {
    assert_eq!("linear".parse::<OneRepMaxFormula>().unwrap(), OneRepMaxFormula::Linear);
    assert_eq!(" Brzycki ".parse::<OneRepMaxFormula>().unwrap(), OneRepMaxFormula::Brzycki);
    assert!("lombardi".parse::<OneRepMaxFormula>().is_err());
}

#[test]
fn test_has_new_record_priority_chain() {
    let record = record(100.0, 5);

    // Heavier and more reps: only the weight record is reported
    assert_eq!(record.has_new_record(105.0, 8), Some(RecordKind::MaxWeight));
    assert_eq!(record.has_new_record(80.0, 12), Some(RecordKind::MaxReps));
    assert_eq!(record.has_new_record(100.0, 5), None);
    assert_eq!(record.has_new_record(90.0, 3), None);
}

#[test]
fn test_has_new_record_estimated_one_rep_max() {
    let mut record = record(100.0, 10);
    record.max_reps = 10;
    record.best_estimated_one_rep_max = estimate_one_rep_max(80.0, 8);

    // Neither heavier nor more reps, but a better estimate
    assert_eq!(
        record.has_new_record(95.0, 8),
        Some(RecordKind::EstimatedOneRepMax)
    );
}

#[test]
fn test_updated_with_moves_bests_independently() {
    let original = record(100.0, 5);
    let date = days_ago(2);

    let updated = original.updated_with(80.0, 15, date);
    assert!(approx(updated.max_weight, 100.0));
    assert_eq!(updated.max_weight_date, original.max_weight_date);
    assert_eq!(updated.max_reps, 15);
    assert!(approx(updated.max_reps_weight, 80.0));
    assert_eq!(updated.max_reps_date, date);
    assert!(approx(updated.best_estimated_one_rep_max, 120.0));
    assert_eq!(updated.best_one_rep_max_date, date);
    assert_eq!(updated.updated_at, date);
    assert_eq!(updated.created_at, original.created_at);
}

#[test]
fn test_updated_with_is_monotonic() {
    let mut current = record(60.0, 8);
    let sets = [(70.0, 5), (50.0, 15), (65.0, 6), (80.0, 1), (40.0, 20), (75.0, 3)];

    for (offset, (weight, reps)) in sets.iter().enumerate() {
        let next = current.updated_with(*weight, *reps, days_ago(9 - offset as i64));
        assert!(next.max_weight >= current.max_weight);
        assert!(next.max_reps >= current.max_reps);
        assert!(next.best_estimated_one_rep_max >= current.best_estimated_one_rep_max);
        assert!(next.updated_at >= current.updated_at);
        current = next;
    }

    assert!(approx(current.max_weight, 80.0));
    assert_eq!(current.max_reps, 20);
}

#[test]
fn test_updated_at_never_moves_backwards() {
    let original = record(100.0, 5);
    let backdated = original.updated_with(110.0, 3, original.updated_at - Duration::days(30));
    assert_eq!(backdated.updated_at, original.updated_at);
    assert!(approx(backdated.max_weight, 110.0));
}

#[test]
fn test_apply_skips_invalid_weights() {
    let store = RecordStore::default();
    let id = Uuid::new_v4();

    assert!(store
        .apply(None, id, "Bench Press", f64::NAN, 5, days_ago(1))
        .is_none());
    assert!(store
        .apply(None, id, "Bench Press", -10.0, 5, days_ago(1))
        .is_none());

    let existing = record(100.0, 5);
    let unchanged = store
        .apply(Some(&existing), id, "Bench Press", f64::INFINITY, 5, days_ago(1))
        .unwrap();
    assert_eq!(unchanged, existing);
}

#[test]
fn test_apply_creates_record_from_first_set() {
    let store = RecordStore::new(OneRepMaxFormula::Brzycki);
    let id = Uuid::new_v4();
    let created = store
        .apply(None, id, "Deadlift", 140.0, 5, days_ago(3))
        .unwrap();

    assert_eq!(created.exercise_id, id);
    assert_eq!(created.formula, OneRepMaxFormula::Brzycki);
    assert!(approx(created.max_weight, 140.0));
    assert_eq!(created.max_reps, 5);
    assert_eq!(created.created_at, days_ago(3));
}

#[test]
fn test_reconcile_builds_one_record_per_exercise() {
    common::init_test_logging();
    let bench = bench_press();
    let squat = squat();

    let sessions = vec![
        session(
            days_ago(14),
            vec![
                performed(&bench, &[(80.0, 8), (85.0, 5)]),
                performed(&squat, &[(100.0, 5)]),
            ],
        ),
        single_exercise_session(days_ago(7), &bench, &[(90.0, 3), (70.0, 12)]),
        single_exercise_session(days_ago(1), &squat, &[(110.0, 3)]),
    ];

    let records = RecordStore::default().reconcile(&sessions);
    assert_eq!(records.len(), 2);

    let bench_record = &records[&bench.id];
    assert!(approx(bench_record.max_weight, 90.0));
    assert_eq!(bench_record.max_weight_date, days_ago(7));
    assert_eq!(bench_record.max_reps, 12);
    assert_eq!(bench_record.created_at, days_ago(14));
    assert_eq!(bench_record.updated_at, days_ago(7));

    let squat_record = &records[&squat.id];
    assert!(approx(squat_record.max_weight, 110.0));
    assert_eq!(squat_record.max_reps, 5);
}

#[test]
fn test_reconcile_ignores_incomplete_sets() {
    let bench = bench_press();
    let mut exercise = performed(&bench, &[(80.0, 8), (200.0, 1)]);
    exercise.sets[1].completed = false;

    let records = RecordStore::default().reconcile(&[session(days_ago(2), vec![exercise])]);
    assert!(approx(records[&bench.id].max_weight, 80.0));
}

#[test]
fn test_reconcile_is_idempotent_and_order_independent() {
    let bench = bench_press();
    let mut sessions = vec![
        single_exercise_session(days_ago(21), &bench, &[(70.0, 10)]),
        single_exercise_session(days_ago(14), &bench, &[(75.0, 8)]),
        single_exercise_session(days_ago(7), &bench, &[(72.5, 12)]),
    ];

    let store = RecordStore::default();
    let first = store.reconcile(&sessions);
    let second = store.reconcile(&sessions);
    assert_eq!(first, second);

    sessions.reverse();
    assert_eq!(store.reconcile(&sessions), first);
}

#[test]
fn test_reconcile_empty_history() {
    assert!(RecordStore::default().reconcile(&[]).is_empty());
}

#[test]
fn test_record_statistics() {
    let mut heavy = record(100.0, 5);
    heavy.updated_at = days_ago(3);
    let mut light = record(50.0, 15);
    light.updated_at = days_ago(60);

    let stats = RecordStore::statistics([&heavy, &light], fixed_now());
    assert_eq!(stats.total_records, 2);
    assert!(approx(stats.average_max_weight, 75.0));
    assert!(approx(stats.average_max_reps, 10.0));
    assert_eq!(stats.recently_updated, 1);

    let empty = RecordStore::statistics(Vec::<&ExerciseRecord>::new(), fixed_now());
    assert_eq!(empty.total_records, 0);
    assert!(approx(empty.average_max_weight, 0.0));
}

#[test]
fn test_top_records_sorting() {
    let mut bench = record(100.0, 5);
    bench.exercise_name = "Bench Press".into();
    let mut squat = record(140.0, 3);
    squat.exercise_name = "Squat".into();
    let mut curl = record(20.0, 15);
    curl.exercise_name = "Curl".into();
    let records = vec![bench, squat, curl];

    let by_weight = RecordStore::top_records(&records, RecordSortCriteria::MaxWeight, 2);
    let names: Vec<&str> = by_weight.iter().map(|r| r.exercise_name.as_str()).collect();
    assert_eq!(names, vec!["Squat", "Bench Press"]);

    let by_reps = RecordStore::top_records(&records, RecordSortCriteria::MaxReps, 1);
    assert_eq!(by_reps[0].exercise_name, "Curl");
}

#[test]
fn test_training_weights_scale_best_estimate() {
    let record = record(100.0, 1);
    let weights = RecordStore::training_weights(&record);

    assert_eq!(weights.len(), 6);
    assert_eq!(weights[0].rep_range, "1-3 reps (strength)");
    assert!(approx(weights[0].weight_kg, 90.0));
    assert!(approx(weights[5].weight_kg, 50.0));
}
