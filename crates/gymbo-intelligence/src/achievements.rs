// ABOUTME: Detects recent achievements: personal records, volume increases, streak milestones
// ABOUTME: Records are replayed chronologically so each session is judged against its past only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use gymbo_core::models::{CompletedSession, ExerciseRecord, RecordKind};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::analysis_config::AnalysisConfig;
use crate::history::{self, exercise_histories, mean, window_start};
use crate::record_store::RecordStore;

/// What was achieved
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum AchievementKind {
    /// A set beat the exercise's previous record
    NewPersonalRecord {
        /// Weight of the set
        weight: f64,
        /// Reps of the set
        reps: u32,
        /// Which best was beaten first
        record_kind: RecordKind,
    },
    /// Session volume rose above the baseline
    VolumeIncrease {
        /// Increase over baseline in percent
        percent: f64,
    },
    /// Consecutive training days reached a milestone
    ConsistencyMilestone {
        /// Milestone day count
        days: u32,
    },
}

/// A recent achievement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    /// Exercise involved, `None` for streak milestones
    pub exercise_name: Option<String>,
    /// What was achieved
    pub kind: AchievementKind,
    /// When it happened
    pub date: DateTime<Utc>,
}

/// Scans the achievement window
#[derive(Debug, Clone)]
pub struct AchievementDetector {
    window_weeks: i64,
    baseline_weeks: i64,
    volume_increase_percent: f64,
    milestones: Vec<u32>,
    store: RecordStore,
}

impl Default for AchievementDetector {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl AchievementDetector {
    /// Create a detector from configuration
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            window_weeks: config.timeframes.achievement_window_weeks,
            baseline_weeks: config.timeframes.volume_baseline_weeks,
            volume_increase_percent: config.achievements.volume_increase_percent,
            milestones: config.achievements.streak_milestones.clone(),
            store: RecordStore::new(config.one_rep_max_formula),
        }
    }

    /// Achievements in the window ending at `now`
    ///
    /// Personal records come first in chronological order, then volume
    /// increases by exercise name, then at most one streak milestone.
    #[must_use]
    pub fn analyze(&self, sessions: &[CompletedSession], now: DateTime<Utc>) -> Vec<Achievement> {
        let window_start = window_start(now, Duration::try_weeks(self.window_weeks));

        let mut achievements = self.personal_records(sessions, window_start);
        achievements.extend(self.volume_increases(sessions, window_start));
        achievements.extend(self.streak_milestone(sessions, window_start));

        debug!(
            achievements = achievements.len(),
            "Achievement detection complete"
        );
        achievements
    }

    fn personal_records(
        &self,
        sessions: &[CompletedSession],
        window_start: DateTime<Utc>,
    ) -> Vec<Achievement> {
        let mut ordered: Vec<&CompletedSession> = sessions.iter().collect();
        ordered.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        let mut records: BTreeMap<Uuid, ExerciseRecord> = BTreeMap::new();
        let mut achievements = Vec::new();

        for session in ordered {
            if session.date >= window_start {
                let mut reported: BTreeSet<Uuid> = BTreeSet::new();
                for performed in &session.exercises {
                    let exercise_id = performed.exercise.id;
                    let Some(record) = records.get(&exercise_id) else {
                        continue;
                    };
                    if reported.contains(&exercise_id) {
                        continue;
                    }
                    let broken = performed.completed_sets().find_map(|set| {
                        record
                            .has_new_record(set.weight_kg, set.reps)
                            .map(|kind| (set.weight_kg, set.reps, kind))
                    });
                    if let Some((weight, reps, record_kind)) = broken {
                        reported.insert(exercise_id);
                        achievements.push(Achievement {
                            exercise_name: Some(performed.exercise.name.clone()),
                            kind: AchievementKind::NewPersonalRecord {
                                weight,
                                reps,
                                record_kind,
                            },
                            date: session.date,
                        });
                    }
                }
            }

            for performed in &session.exercises {
                let exercise_id = performed.exercise.id;
                for set in performed.completed_sets() {
                    if let Some(updated) = self.store.apply(
                        records.get(&exercise_id),
                        exercise_id,
                        &performed.exercise.name,
                        set.weight_kg,
                        set.reps,
                        session.date,
                    ) {
                        records.insert(exercise_id, updated);
                    }
                }
            }
        }

        achievements
    }

    fn volume_increases(
        &self,
        sessions: &[CompletedSession],
        window_start: DateTime<Utc>,
    ) -> Vec<Achievement> {
        let baseline_start =
            history::window_start(window_start, Duration::try_weeks(self.baseline_weeks));
        let mut achievements: Vec<Achievement> = exercise_histories(sessions)
            .into_iter()
            .filter_map(|history| {
                let latest = history.entries.first()?;
                if latest.date < window_start {
                    return None;
                }
                let baseline: Vec<f64> = history
                    .entries
                    .iter()
                    .filter(|entry| entry.date >= baseline_start && entry.date < window_start)
                    .map(|entry| entry.volume)
                    .collect();
                let baseline = mean(&baseline).filter(|volume| *volume > 0.0)?;
                let percent = (latest.volume - baseline) / baseline * 100.0;
                (percent > self.volume_increase_percent).then(|| Achievement {
                    exercise_name: Some(history.exercise_name.clone()),
                    kind: AchievementKind::VolumeIncrease { percent },
                    date: latest.date,
                })
            })
            .collect();

        achievements.sort_by(|a, b| a.exercise_name.cmp(&b.exercise_name));
        achievements
    }

    fn streak_milestone(
        &self,
        sessions: &[CompletedSession],
        window_start: DateTime<Utc>,
    ) -> Option<Achievement> {
        let latest = sessions.iter().map(|session| session.date).max()?;
        if latest < window_start {
            return None;
        }

        let days = consecutive_training_days(sessions);
        let days_u32 = u32::try_from(days).unwrap_or(u32::MAX);
        let milestone = self
            .milestones
            .iter()
            .copied()
            .filter(|milestone| *milestone <= days_u32)
            .max()?;

        Some(Achievement {
            exercise_name: None,
            kind: AchievementKind::ConsistencyMilestone { days: milestone },
            date: latest,
        })
    }
}

/// Consecutive calendar days with a session, ending at the most recent one
#[must_use]
pub fn consecutive_training_days(sessions: &[CompletedSession]) -> usize {
    let days: BTreeSet<NaiveDate> = sessions
        .iter()
        .map(|session| session.date.date_naive())
        .collect();

    let mut streak = 0;
    let mut expected: Option<NaiveDate> = None;
    for day in days.iter().rev() {
        if expected.is_some_and(|next| *day != next) {
            break;
        }
        streak += 1;
        expected = day.pred_opt();
        if expected.is_none() {
            break;
        }
    }
    streak
}
