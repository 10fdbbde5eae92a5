// ABOUTME: Rule-based coaching tip engine over the combined analysis result
// ABOUTME: Generates candidate tips per rule, then keeps the top tips by priority
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tip engine
//!
//! Every rule inspects one part of the [`AnalysisResult`] and may emit a tip.
//! Candidates are collected in rule order, sorted by priority with a stable
//! sort and truncated, so identical inputs always produce identical tips.

use gymbo_core::constants::tips::{
    COMEBACK_MAX_DAYS, COMEBACK_MIN_DAYS, DELOAD_PLATEAU_COUNT, IDEAL_FREQUENCY_PER_WEEK,
    LONG_BREAK_DAYS, LOW_FREQUENCY_MIN_SESSIONS, LOW_FREQUENCY_PER_WEEK, REP_TIP_MAX_REPS,
    REP_TIP_MIN_WEEKS, STREAK_TIP_MIN,
};
use gymbo_core::models::{
    FitnessGoal, HealthSnapshot, MuscleGroup, TipCategory, TipMetadata, TipPriority, TrainingTip,
    UserProfile, WeightTrend,
};
use tracing::debug;

use crate::achievements::{Achievement, AchievementKind};
use crate::analysis_config::AnalysisConfig;
use crate::analyzer::AnalysisResult;
use crate::balance_analyzer::{ImbalanceKind, MuscleGroupBalance};
use crate::consistency_analyzer::ConsistencyMetrics;
use crate::goal_alignment::{GoalAlignment, RepRangeAlignment, VolumeAlignment};
use crate::progression_analyzer::ProgressionOpportunity;
use crate::recovery_analyzer::RecoveryStatus;

/// Generates prioritized coaching tips
#[derive(Debug, Clone)]
pub struct TipEngine {
    default_max_tips: usize,
    min_plateau_weeks: i64,
}

impl Default for TipEngine {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl TipEngine {
    /// Create an engine from configuration
    #[must_use]
    pub const fn new(config: &AnalysisConfig) -> Self {
        Self {
            default_max_tips: config.tips.default_max_tips,
            min_plateau_weeks: config.progression.min_plateau_weeks,
        }
    }

    /// Number of tips returned by [`Self::generate_default`]
    #[must_use]
    pub const fn default_max_tips(&self) -> usize {
        self.default_max_tips
    }

    /// Top tips using the configured tip count
    #[must_use]
    pub fn generate_default(
        &self,
        analysis: &AnalysisResult,
        profile: &UserProfile,
        health: Option<&HealthSnapshot>,
    ) -> Vec<TrainingTip> {
        self.generate(analysis, profile, health, self.default_max_tips)
    }

    /// Top `max_tips` tips, highest priority first
    ///
    /// Tips of equal priority keep rule order.
    #[must_use]
    pub fn generate(
        &self,
        analysis: &AnalysisResult,
        profile: &UserProfile,
        health: Option<&HealthSnapshot>,
        max_tips: usize,
    ) -> Vec<TrainingTip> {
        let mut tips = self.candidates(analysis, profile, health);
        let candidates = tips.len();
        tips.sort_by(|a, b| b.priority.cmp(&a.priority));
        tips.truncate(max_tips);

        debug!(candidates, returned = tips.len(), "Generated training tips");
        tips
    }

    /// Every tip any rule produces, in rule order
    #[must_use]
    pub fn candidates(
        &self,
        analysis: &AnalysisResult,
        profile: &UserProfile,
        health: Option<&HealthSnapshot>,
    ) -> Vec<TrainingTip> {
        let mut tips = self.progression_tips(&analysis.progression_opportunities);
        tips.extend(balance_tips(&analysis.muscle_balance));
        tips.extend(recovery_tips(&analysis.recovery));
        tips.extend(consistency_tips(&analysis.consistency));
        tips.extend(goal_tips(&analysis.goal_alignment));
        tips.extend(analysis.achievements.iter().map(achievement_tip));
        if let Some(health) = health {
            tips.extend(health_tips(health, profile.goal));
        }
        tips
    }

    fn progression_tips(&self, opportunities: &[ProgressionOpportunity]) -> Vec<TrainingTip> {
        let mut tips = Vec::new();

        let longest = opportunities
            .iter()
            .reduce(|best, next| {
                if next.weeks_at_same_level > best.weeks_at_same_level {
                    next
                } else {
                    best
                }
            })
            .filter(|top| top.weeks_at_same_level >= self.min_plateau_weeks);
        if let Some(top) = longest {
            tips.push(
                TrainingTip::new(
                    TipCategory::Progression,
                    TipPriority::High,
                    "🏋️‍♂️",
                    "Time for more weight!",
                    format!(
                        "You have trained {} with {:.1} kg for {} weeks. Try {:.1} kg today, you can do it! 💪",
                        top.exercise_name,
                        top.current_weight,
                        top.weeks_at_same_level,
                        top.suggested_weight
                    ),
                )
                .with_metadata(TipMetadata {
                    exercise_name: Some(top.exercise_name.clone()),
                    current_value: Some(top.current_weight),
                    suggested_value: Some(top.suggested_weight),
                    ..TipMetadata::default()
                }),
            );
        }

        if let Some(opportunity) = opportunities.iter().find(|opportunity| {
            opportunity.current_reps < REP_TIP_MAX_REPS
                && opportunity.weeks_at_same_level >= REP_TIP_MIN_WEEKS
        }) {
            tips.push(
                TrainingTip::new(
                    TipCategory::Progression,
                    TipPriority::Medium,
                    "📈",
                    "Add a rep",
                    format!(
                        "You currently manage {} reps on {}. Aim for {}! 🎯",
                        opportunity.current_reps,
                        opportunity.exercise_name,
                        opportunity.suggested_reps
                    ),
                )
                .with_metadata(TipMetadata {
                    exercise_name: Some(opportunity.exercise_name.clone()),
                    current_value: Some(f64::from(opportunity.current_reps)),
                    suggested_value: Some(f64::from(opportunity.suggested_reps)),
                    ..TipMetadata::default()
                }),
            );
        }

        if opportunities.len() >= DELOAD_PLATEAU_COUNT {
            tips.push(TrainingTip::new(
                TipCategory::Progression,
                TipPriority::Medium,
                "⚡️",
                "Progressive overload",
                "You have hit a plateau on several exercises. Time for a deload week or a new training stimulus! 🔄",
            ));
        }

        tips
    }
}

fn balance_tips(balance: &MuscleGroupBalance) -> Vec<TrainingTip> {
    let mut tips = Vec::new();

    let push_pull = balance.imbalances.iter().find(|imbalance| {
        matches!(
            imbalance.kind,
            ImbalanceKind::PushOverPull | ImbalanceKind::PullOverPush
        )
    });
    if let Some(imbalance) = push_pull {
        tips.push(
            TrainingTip::new(
                TipCategory::Balance,
                TipPriority::High,
                "🎯",
                "Muscle imbalance detected",
                format!(
                    "Your {} training is {:.1}x higher than your {} training. Focus more on {} for balanced development! ⚖️",
                    imbalance.overtrained,
                    imbalance.ratio,
                    imbalance.undertrained,
                    imbalance.undertrained
                ),
            )
            .with_metadata(TipMetadata {
                muscle_group: Some(imbalance.undertrained.display_name().to_owned()),
                ..TipMetadata::default()
            }),
        );
    }

    if let Some(imbalance) = balance.imbalance(ImbalanceKind::UpperOverLower) {
        tips.push(
            TrainingTip::new(
                TipCategory::Balance,
                TipPriority::High,
                "🏃‍♂️",
                "Never skip leg day!",
                format!(
                    "Your upper body gets {:.1}x more volume than your legs. How about a leg day this week? 🦵",
                    imbalance.ratio
                ),
            )
            .with_metadata(TipMetadata {
                muscle_group: Some(MuscleGroup::Legs.display_name().to_owned()),
                ..TipMetadata::default()
            }),
        );
    }

    tips
}

fn recovery_tips(recovery: &RecoveryStatus) -> Vec<TrainingTip> {
    let mut tips = Vec::new();

    if recovery.overtraining_risk {
        tips.push(TrainingTip::new(
            TipCategory::Recovery,
            TipPriority::High,
            "⚠️",
            "Watch out: overtraining!",
            format!(
                "You completed {} workouts in 7 days. Take a break for optimal recovery and muscle growth! 🛌",
                recovery.workouts_in_last_week
            ),
        ));
    }

    if recovery.has_history() {
        let days = recovery.days_since_last_workout;
        if (COMEBACK_MIN_DAYS..=COMEBACK_MAX_DAYS).contains(&days) {
            tips.push(TrainingTip::new(
                TipCategory::Recovery,
                TipPriority::High,
                "🔥",
                "Welcome back!",
                format!(
                    "Your last workout was {days} days ago. You are fully recovered, time for a new session! 💪"
                ),
            ));
        }

        if days > LONG_BREAK_DAYS {
            tips.push(TrainingTip::new(
                TipCategory::Consistency,
                TipPriority::High,
                "💫",
                "Long time no see!",
                format!(
                    "It has been {days} days. Every step counts, start today with a light workout! 🚀"
                ),
            ));
        }
    }

    if recovery.needs_rest {
        tips.push(TrainingTip::new(
            TipCategory::Recovery,
            TipPriority::Medium,
            "😴",
            "Take a rest day",
            format!(
                "You already trained today and {} times this week. Let your muscles recover before the next session! 🛌",
                recovery.workouts_in_last_week
            ),
        ));
    }

    tips
}

fn consistency_tips(metrics: &ConsistencyMetrics) -> Vec<TrainingTip> {
    let mut tips = Vec::new();

    if metrics.current_streak >= STREAK_TIP_MIN {
        tips.push(TrainingTip::new(
            TipCategory::Motivation,
            TipPriority::Medium,
            "🔥",
            "Streak is on! 🔥",
            format!(
                "You completed {} workouts in a row! That is impressive consistency, keep going! 💪",
                metrics.current_streak
            ),
        ));
    }

    let per_week = metrics.average_workouts_per_week;
    if per_week < LOW_FREQUENCY_PER_WEEK && metrics.total_workouts >= LOW_FREQUENCY_MIN_SESSIONS {
        tips.push(TrainingTip::new(
            TipCategory::Consistency,
            TipPriority::Medium,
            "📆",
            "More consistency = more progress",
            format!(
                "You currently train {per_week:.1}x per week. Aim for 3-4x for optimal progress! 📅"
            ),
        ));
    }

    let (ideal_low, ideal_high) = IDEAL_FREQUENCY_PER_WEEK;
    if (ideal_low..=ideal_high).contains(&per_week) {
        tips.push(TrainingTip::new(
            TipCategory::Motivation,
            TipPriority::Low,
            "⭐️",
            "Perfect training frequency!",
            format!(
                "You train {per_week:.1}x per week, just right for muscle growth and recovery. Excellent! 🌟"
            ),
        ));
    }

    tips
}

fn goal_tips(alignment: &GoalAlignment) -> Vec<TrainingTip> {
    let mut tips = Vec::new();

    match (alignment.goal, alignment.rep_range) {
        (FitnessGoal::MuscleBuilding, RepRangeAlignment::TooLow) => {
            tips.push(TrainingTip::new(
                TipCategory::Goal,
                TipPriority::High,
                "🎯",
                "Optimize for muscle growth",
                "For optimal muscle growth aim for 8-12 reps per set. Lower the weight a little and add reps! 💪",
            ));
        }
        (FitnessGoal::Strength, RepRangeAlignment::TooHigh) => {
            tips.push(TrainingTip::new(
                TipCategory::Goal,
                TipPriority::High,
                "💪",
                "Optimize for strength",
                "For maximal strength train 3-6 reps with heavy weight. Raise the weight and cut the reps! ⚡️",
            ));
        }
        (FitnessGoal::Endurance, RepRangeAlignment::TooLow) => {
            tips.push(TrainingTip::new(
                TipCategory::Goal,
                TipPriority::High,
                "🚴",
                "Optimize for endurance",
                "For muscular endurance aim for 15 or more reps per set. Use a lighter weight and keep moving! 🔁",
            ));
        }
        _ => {}
    }

    match alignment.volume {
        VolumeAlignment::TooLow => tips.push(TrainingTip::new(
            TipCategory::Goal,
            TipPriority::Medium,
            "📊",
            "Increase your training volume",
            format!(
                "Your current volume is a bit low for your goal ({}). Add 1-2 sets per exercise! 📈",
                alignment.goal
            ),
        )),
        VolumeAlignment::TooHigh => tips.push(TrainingTip::new(
            TipCategory::Goal,
            TipPriority::Medium,
            "🧯",
            "Reduce your training volume",
            format!(
                "Your sessions carry a very high volume for your goal ({}). Drop 1-2 sets per exercise to recover better! 📉",
                alignment.goal
            ),
        )),
        VolumeAlignment::Good => {}
    }

    tips
}

fn achievement_tip(achievement: &Achievement) -> TrainingTip {
    let exercise = achievement.exercise_name.as_deref().unwrap_or("your training");
    match achievement.kind {
        AchievementKind::NewPersonalRecord { weight, reps, .. } => TrainingTip::new(
            TipCategory::Motivation,
            TipPriority::High,
            "🏆",
            "New personal record! 🏆",
            format!(
                "Congratulations on your new PR on {exercise}: {weight}kg × {reps} reps! You are a champion! 🎉"
            ),
        )
        .with_metadata(TipMetadata {
            exercise_name: achievement.exercise_name.clone(),
            current_value: Some(weight),
            ..TipMetadata::default()
        }),
        AchievementKind::VolumeIncrease { percent } => TrainingTip::new(
            TipCategory::Motivation,
            TipPriority::Medium,
            "📊",
            "Volume increase!",
            format!(
                "Your training volume on {exercise} went up by {percent:.0}%! Great progression! 📈"
            ),
        ),
        AchievementKind::ConsistencyMilestone { days } => TrainingTip::new(
            TipCategory::Motivation,
            TipPriority::Medium,
            "🎖",
            "Consistency milestone!",
            format!("{days} days of training in a row! That is true dedication, you are a role model! 🌟"),
        ),
    }
}

fn health_tips(health: &HealthSnapshot, goal: FitnessGoal) -> Vec<TrainingTip> {
    let Some(trend) = health.weight_trend else {
        return Vec::new();
    };

    let tip = match (goal, trend) {
        (FitnessGoal::MuscleBuilding, WeightTrend::Increasing { amount_kg, weeks }) => {
            Some(TrainingTip::new(
                TipCategory::Motivation,
                TipPriority::Medium,
                "📈",
                "Weight gain, perfect!",
                format!(
                    "You gained {amount_kg:.1} kg in {weeks} weeks, just right for building muscle. Keep it up! 💪"
                ),
            ))
        }
        (FitnessGoal::MuscleBuilding, WeightTrend::Decreasing { amount_kg, .. }) => {
            Some(TrainingTip::new(
                TipCategory::Goal,
                TipPriority::High,
                "🥗",
                "Weight is dropping",
                format!(
                    "Your weight dropped by {amount_kg:.1} kg. To build muscle you need more calories. Eat more protein! 🍗"
                ),
            ))
        }
        (FitnessGoal::WeightLoss, WeightTrend::Decreasing { amount_kg, weeks }) => {
            Some(TrainingTip::new(
                TipCategory::Motivation,
                TipPriority::High,
                "🎯",
                "Great progress!",
                format!(
                    "You lost {amount_kg:.1} kg in {weeks} weeks! Your hard work is paying off! 🎉"
                ),
            ))
        }
        (FitnessGoal::WeightLoss, WeightTrend::Increasing { .. }) => Some(TrainingTip::new(
            TipCategory::Goal,
            TipPriority::Medium,
            "🔍",
            "Calorie check",
            "Your weight is creeping up. Keep an eye on your calorie deficit and stay on it, you can do it! 💪",
        )),
        _ => None,
    };

    tip.into_iter().collect()
}
