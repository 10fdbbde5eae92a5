// ABOUTME: Tests for the rule-based coaching tip engine
// ABOUTME: Validates rule triggers, priority ordering, truncation, and health-driven tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::days_ago;
use gymbo::models::{
    FitnessGoal, HealthSnapshot, MuscleGroup, RecordKind, TipCategory, TipPriority, TrainingTip,
    UserProfile, WeightTrend,
};
use gymbo_intelligence::{
    Achievement, AchievementKind, AnalysisResult, ConsistencyMetrics, GoalAlignment, ImbalanceKind,
    MuscleGroupBalance, MuscleGroupImbalance, ProgressionOpportunity, RecoveryStatus,
    RepRangeAlignment, TipEngine,
};
use uuid::Uuid;

fn quiet_analysis(goal: FitnessGoal) -> AnalysisResult {
    AnalysisResult {
        progression_opportunities: Vec::new(),
        muscle_balance: MuscleGroupBalance::default(),
        recovery: RecoveryStatus::no_history(),
        consistency: ConsistencyMetrics::default(),
        goal_alignment: GoalAlignment::aligned(goal),
        achievements: Vec::new(),
        health: None,
    }
}

fn recovery(days_since_last_workout: i64, workouts_in_last_week: usize) -> RecoveryStatus {
    RecoveryStatus {
        days_since_last_workout,
        needs_rest: false,
        overtraining_risk: false,
        workouts_in_last_week,
    }
}

fn plateau(name: &str, weeks: i64, reps: u32) -> ProgressionOpportunity {
    ProgressionOpportunity {
        exercise_id: Uuid::new_v4(),
        exercise_name: name.to_owned(),
        current_weight: 80.0,
        current_reps: reps,
        weeks_at_same_level: weeks,
        suggested_weight: 82.0,
        suggested_reps: reps + 1,
        confidence: 0.8,
    }
}

fn titles(tips: &[TrainingTip]) -> Vec<&str> {
    tips.iter().map(|tip| tip.title.as_str()).collect()
}

#[test]
fn test_quiet_analysis_produces_no_tips() {
    common::init_test_logging();
    let profile = UserProfile::default();
    let tips = TipEngine::default().generate_default(&quiet_analysis(profile.goal), &profile, None);
    assert!(tips.is_empty());
}

#[test]
fn test_high_priority_before_low_priority() {
    let profile = UserProfile::default();
    let mut analysis = quiet_analysis(profile.goal);
    // Perfect frequency is a low priority tip emitted before goal tips
    analysis.consistency = ConsistencyMetrics {
        current_streak: 0,
        average_workouts_per_week: 4.0,
        total_workouts: 32,
        last_workout_date: Some(days_ago(2)),
    };
    analysis.recovery = RecoveryStatus {
        overtraining_risk: true,
        ..recovery(0, 7)
    };

    let tips = TipEngine::default().generate(&analysis, &profile, None, 10);
    assert_eq!(tips.first().unwrap().priority, TipPriority::High);
    assert_eq!(tips.last().unwrap().priority, TipPriority::Low);
    assert!(tips
        .windows(2)
        .all(|pair| pair[0].priority >= pair[1].priority));
}

#[test]
fn test_equal_priorities_keep_rule_order() {
    let profile = UserProfile::default();
    let mut analysis = quiet_analysis(profile.goal);
    analysis.progression_opportunities = vec![plateau("Bench Press", 4, 10)];
    analysis.muscle_balance.imbalances = vec![MuscleGroupImbalance {
        kind: ImbalanceKind::PushOverPull,
        overtrained: MuscleGroup::Chest,
        undertrained: MuscleGroup::Back,
        ratio: 2.4,
    }];
    analysis.recovery = RecoveryStatus {
        overtraining_risk: true,
        ..recovery(1, 6)
    };

    let tips = TipEngine::default().generate(&analysis, &profile, None, 10);
    assert_eq!(
        titles(&tips),
        vec![
            "Time for more weight!",
            "Muscle imbalance detected",
            "Watch out: overtraining!"
        ]
    );
}

#[test]
fn test_tips_truncated_to_max() {
    let profile = UserProfile::default();
    let mut analysis = quiet_analysis(profile.goal);
    analysis.progression_opportunities = vec![
        plateau("Bench Press", 5, 6),
        plateau("Squat", 4, 5),
        plateau("Row", 3, 8),
    ];
    analysis.recovery = RecoveryStatus {
        overtraining_risk: true,
        ..recovery(0, 7)
    };

    let engine = TipEngine::default();
    assert_eq!(engine.default_max_tips(), 3);
    assert_eq!(engine.generate_default(&analysis, &profile, None).len(), 3);
    assert_eq!(engine.generate(&analysis, &profile, None, 1).len(), 1);
    assert!(engine.generate(&analysis, &profile, None, 0).is_empty());
    assert!(engine.candidates(&analysis, &profile, None).len() > 3);
}

#[test]
fn test_progression_tips() {
    let profile = UserProfile::default();
    let mut analysis = quiet_analysis(profile.goal);
    analysis.progression_opportunities = vec![
        plateau("Bench Press", 5, 6),
        plateau("Squat", 4, 5),
        plateau("Row", 3, 8),
    ];

    let tips = TipEngine::default().candidates(&analysis, &profile, None);
    assert_eq!(
        titles(&tips),
        vec!["Time for more weight!", "Add a rep", "Progressive overload"]
    );

    let weight_tip = &tips[0];
    assert_eq!(weight_tip.category, TipCategory::Progression);
    let metadata = weight_tip.metadata.as_ref().unwrap();
    assert_eq!(metadata.exercise_name.as_deref(), Some("Bench Press"));
    assert_eq!(metadata.suggested_value, Some(82.0));
    assert!(tips[1].message.contains("Bench Press"));
}

#[test]
fn test_short_plateau_gets_no_weight_tip() {
    let profile = UserProfile::default();
    let mut analysis = quiet_analysis(profile.goal);
    analysis.progression_opportunities = vec![plateau("Curl", 2, 12)];

    let tips = TipEngine::default().candidates(&analysis, &profile, None);
    assert!(tips.is_empty());
}

#[test]
fn test_leg_day_tip() {
    let profile = UserProfile::default();
    let mut analysis = quiet_analysis(profile.goal);
    analysis.muscle_balance.imbalances = vec![MuscleGroupImbalance {
        kind: ImbalanceKind::UpperOverLower,
        overtrained: MuscleGroup::Chest,
        undertrained: MuscleGroup::Legs,
        ratio: 3.0,
    }];

    let tips = TipEngine::default().candidates(&analysis, &profile, None);
    assert_eq!(titles(&tips), vec!["Never skip leg day!"]);
    assert_eq!(
        tips[0].metadata.as_ref().unwrap().muscle_group.as_deref(),
        Some("Legs")
    );
}

#[test]
fn test_comeback_and_long_break_tips() {
    let profile = UserProfile::default();
    let engine = TipEngine::default();

    let mut analysis = quiet_analysis(profile.goal);
    analysis.recovery = recovery(7, 0);
    assert_eq!(
        titles(&engine.candidates(&analysis, &profile, None)),
        vec!["Welcome back!"]
    );

    analysis.recovery = recovery(20, 0);
    let tips = engine.candidates(&analysis, &profile, None);
    assert_eq!(titles(&tips), vec!["Long time no see!"]);
    assert_eq!(tips[0].category, TipCategory::Consistency);

    analysis.recovery = recovery(12, 0);
    assert!(engine.candidates(&analysis, &profile, None).is_empty());
}

#[test]
fn test_no_history_skips_break_tips() {
    let profile = UserProfile::default();
    let analysis = quiet_analysis(profile.goal);
    assert!(!analysis.recovery.has_history());
    assert!(TipEngine::default()
        .candidates(&analysis, &profile, None)
        .is_empty());
}

#[test]
fn test_consistency_tips() {
    let profile = UserProfile::default();
    let mut analysis = quiet_analysis(profile.goal);
    analysis.consistency = ConsistencyMetrics {
        current_streak: 4,
        average_workouts_per_week: 1.5,
        total_workouts: 12,
        last_workout_date: Some(days_ago(1)),
    };

    let tips = TipEngine::default().candidates(&analysis, &profile, None);
    assert_eq!(
        titles(&tips),
        vec!["Streak is on! 🔥", "More consistency = more progress"]
    );
}

#[test]
fn test_goal_tip_for_muscle_building() {
    let profile = UserProfile {
        goal: FitnessGoal::MuscleBuilding,
        ..UserProfile::default()
    };
    let mut analysis = quiet_analysis(profile.goal);
    analysis.goal_alignment.rep_range = RepRangeAlignment::TooLow;

    let tips = TipEngine::default().candidates(&analysis, &profile, None);
    assert_eq!(titles(&tips), vec!["Optimize for muscle growth"]);
    assert_eq!(tips[0].priority, TipPriority::High);
    assert!(tips[0].message.contains("8-12"));
}

#[test]
fn test_achievement_tips() {
    let profile = UserProfile::default();
    let mut analysis = quiet_analysis(profile.goal);
    analysis.achievements = vec![
        Achievement {
            exercise_name: Some("Deadlift".into()),
            kind: AchievementKind::NewPersonalRecord {
                weight: 180.0,
                reps: 3,
                record_kind: RecordKind::MaxWeight,
            },
            date: days_ago(1),
        },
        Achievement {
            exercise_name: None,
            kind: AchievementKind::ConsistencyMilestone { days: 10 },
            date: days_ago(1),
        },
    ];

    let tips = TipEngine::default().candidates(&analysis, &profile, None);
    assert_eq!(
        titles(&tips),
        vec!["New personal record! 🏆", "Consistency milestone!"]
    );
    assert!(tips[0].message.contains("Deadlift"));
    assert!(tips[1].message.starts_with("10 days"));
}

#[test]
fn test_health_tips_follow_goal() {
    let increasing = HealthSnapshot {
        body_weight_kg: Some(82.0),
        body_fat_percent: None,
        weight_trend: Some(WeightTrend::Increasing {
            amount_kg: 1.5,
            weeks: 4,
        }),
    };
    let decreasing = HealthSnapshot {
        weight_trend: Some(WeightTrend::Decreasing {
            amount_kg: 2.0,
            weeks: 4,
        }),
        ..increasing
    };
    let engine = TipEngine::default();

    let bulking = UserProfile {
        goal: FitnessGoal::MuscleBuilding,
        ..UserProfile::default()
    };
    let analysis = quiet_analysis(bulking.goal);
    assert_eq!(
        titles(&engine.candidates(&analysis, &bulking, Some(&increasing))),
        vec!["Weight gain, perfect!"]
    );
    assert_eq!(
        titles(&engine.candidates(&analysis, &bulking, Some(&decreasing))),
        vec!["Weight is dropping"]
    );

    let cutting = UserProfile {
        goal: FitnessGoal::WeightLoss,
        ..UserProfile::default()
    };
    let analysis = quiet_analysis(cutting.goal);
    assert_eq!(
        titles(&engine.candidates(&analysis, &cutting, Some(&decreasing))),
        vec!["Great progress!"]
    );
    assert_eq!(
        titles(&engine.candidates(&analysis, &cutting, Some(&increasing))),
        vec!["Calorie check"]
    );

    let general = UserProfile::default();
    assert!(engine
        .candidates(&quiet_analysis(general.goal), &general, Some(&increasing))
        .is_empty());
}

#[test]
fn test_generation_is_deterministic() {
    let profile = UserProfile::default();
    let mut analysis = quiet_analysis(profile.goal);
    analysis.progression_opportunities = vec![plateau("Bench Press", 5, 6)];
    analysis.recovery = recovery(6, 2);

    let engine = TipEngine::default();
    assert_eq!(
        engine.generate(&analysis, &profile, None, 5),
        engine.generate(&analysis, &profile, None, 5)
    );
}
