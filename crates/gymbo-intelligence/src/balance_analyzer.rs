// ABOUTME: Muscle group volume distribution and push/pull and upper/lower imbalance detection
// ABOUTME: Works on the trailing balance window of completed sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use gymbo_core::models::{CompletedSession, MuscleGroup};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_config::{AnalysisConfig, BalanceThresholds};
use crate::history::{sessions_since, window_start};

/// Which comparison produced an imbalance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ImbalanceKind {
    /// Pushing volume dominates pulling volume
    PushOverPull,
    /// Pulling volume dominates pushing volume
    PullOverPush,
    /// Upper body volume dominates leg volume
    UpperOverLower,
}

/// An overtrained / undertrained pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MuscleGroupImbalance {
    /// Comparison that triggered
    pub kind: ImbalanceKind,
    /// Representative overtrained group
    pub overtrained: MuscleGroup,
    /// Representative undertrained group
    pub undertrained: MuscleGroup,
    /// Dominant side divided by the weaker side
    pub ratio: f64,
}

/// Volume distribution across muscle groups
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MuscleGroupBalance {
    /// Share of total volume per group, in percent
    ///
    /// Compound exercises credit every group they target, so shares may sum
    /// to more than 100.
    pub distribution: BTreeMap<MuscleGroup, f64>,
    /// Detected imbalances
    pub imbalances: Vec<MuscleGroupImbalance>,
    /// Volume of the window, each set counted once
    pub total_volume: f64,
}

impl MuscleGroupBalance {
    /// Share of a group, zero when untrained
    #[must_use]
    pub fn share(&self, group: MuscleGroup) -> f64 {
        self.distribution.get(&group).copied().unwrap_or(0.0)
    }

    fn combined_share(&self, groups: &[MuscleGroup]) -> f64 {
        groups.iter().map(|group| self.share(*group)).sum()
    }

    /// First imbalance of the given kind
    #[must_use]
    pub fn imbalance(&self, kind: ImbalanceKind) -> Option<&MuscleGroupImbalance> {
        self.imbalances.iter().find(|imbalance| imbalance.kind == kind)
    }
}

/// Analyzes volume distribution
#[derive(Debug, Clone)]
pub struct BalanceAnalyzer {
    window_weeks: i64,
    thresholds: BalanceThresholds,
}

impl Default for BalanceAnalyzer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl BalanceAnalyzer {
    /// Create an analyzer from configuration
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            window_weeks: config.timeframes.balance_window_weeks,
            thresholds: config.balance.clone(),
        }
    }

    /// Distribution and imbalances over the window ending at `now`
    #[must_use]
    pub fn analyze(&self, sessions: &[CompletedSession], now: DateTime<Utc>) -> MuscleGroupBalance {
        let cutoff = window_start(now, Duration::try_weeks(self.window_weeks));
        let mut group_volume: BTreeMap<MuscleGroup, f64> = BTreeMap::new();
        let mut total_volume = 0.0;

        for session in sessions_since(sessions, cutoff) {
            for performed in &session.exercises {
                let volume = performed.completed_volume();
                for group in &performed.exercise.muscle_groups {
                    *group_volume.entry(*group).or_insert(0.0) += volume;
                }
                total_volume += volume;
            }
        }

        if total_volume <= 0.0 {
            return MuscleGroupBalance::default();
        }

        let mut balance = MuscleGroupBalance {
            distribution: group_volume
                .into_iter()
                .map(|(group, volume)| (group, volume / total_volume * 100.0))
                .collect(),
            imbalances: Vec::new(),
            total_volume,
        };
        balance.imbalances = self.find_imbalances(&balance);

        debug!(
            total_volume,
            imbalances = balance.imbalances.len(),
            "Muscle balance analysis complete"
        );
        balance
    }

    fn find_imbalances(&self, balance: &MuscleGroupBalance) -> Vec<MuscleGroupImbalance> {
        let mut imbalances = Vec::new();

        let push = balance.combined_share(&MuscleGroup::PUSH);
        let pull = balance.combined_share(&MuscleGroup::PULL);
        if push > 0.0 && pull > 0.0 {
            let limit = self.thresholds.push_pull_ratio_limit;
            if push / pull > limit {
                imbalances.push(MuscleGroupImbalance {
                    kind: ImbalanceKind::PushOverPull,
                    overtrained: MuscleGroup::Chest,
                    undertrained: MuscleGroup::Back,
                    ratio: push / pull,
                });
            } else if pull / push > limit {
                imbalances.push(MuscleGroupImbalance {
                    kind: ImbalanceKind::PullOverPush,
                    overtrained: MuscleGroup::Back,
                    undertrained: MuscleGroup::Chest,
                    ratio: pull / push,
                });
            }
        }

        let upper = balance.combined_share(&MuscleGroup::UPPER_BODY);
        let lower = balance.combined_share(&MuscleGroup::LOWER_BODY);
        if upper > 0.0 && lower > 0.0 && upper / lower > self.thresholds.upper_lower_ratio_limit {
            imbalances.push(MuscleGroupImbalance {
                kind: ImbalanceKind::UpperOverLower,
                overtrained: MuscleGroup::Chest,
                undertrained: MuscleGroup::Legs,
                ratio: upper / lower,
            });
        }

        imbalances
    }
}
