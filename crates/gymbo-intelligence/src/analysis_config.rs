// ABOUTME: Configuration-driven thresholds for training analysis replacing magic numbers
// ABOUTME: Provides type-safe, environment-configurable parameters for all analyzers and tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::str::FromStr;

use gymbo_core::constants::limits::{MAX_WINDOW_DAYS, MAX_WINDOW_WEEKS};
use gymbo_core::constants::{
    achievements, balance, consistency, goal_alignment, progression, recovery, tips,
};
use gymbo_core::models::OneRepMaxFormula;
use gymbo_core::AppError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Analysis configuration errors
#[derive(Debug, Error)]
pub enum AnalysisConfigError {
    /// Timeframe variable could not be parsed
    #[error("Invalid timeframe: {0}")]
    InvalidTimeframe(String),

    /// Threshold variable could not be parsed
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    /// Values parsed but are inconsistent
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

impl From<AnalysisConfigError> for AppError {
    fn from(error: AnalysisConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}

/// Time windows used by the analyzers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisTimeframes {
    /// Trailing weeks analyzed for muscle balance
    pub balance_window_weeks: i64,

    /// Trailing days counted for recovery
    pub recovery_window_days: i64,

    /// Maximum gap between sessions that keeps a streak alive
    pub streak_max_gap_days: i64,

    /// Trailing weeks used for the average weekly frequency
    pub frequency_window_weeks: i64,

    /// Most recent sessions used for goal alignment
    pub goal_alignment_sessions: usize,

    /// Trailing weeks scanned for achievements
    pub achievement_window_weeks: i64,

    /// Weeks before the achievement window used as volume baseline
    pub volume_baseline_weeks: i64,
}

/// Plateau detection thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionThresholds {
    /// Minimum sessions with an exercise before it is analyzed
    pub min_sessions: usize,

    /// Sessions averaged for the current working level
    pub recent_sessions: usize,

    /// Sessions in the plateau variance window
    pub plateau_window_sessions: usize,

    /// Variance (kg²) of per-session averages below which progress is flat
    pub plateau_variance_threshold: f64,

    /// Minimum plateau length in weeks before reporting
    pub min_plateau_weeks: i64,

    /// Multiplier applied to the current weight for the suggestion
    pub weight_increase_factor: f64,

    /// Confidence attached to every opportunity
    pub opportunity_confidence: f64,
}

/// Muscle balance thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceThresholds {
    /// Push/pull ratio limit (either direction)
    pub push_pull_ratio_limit: f64,

    /// Upper/lower ratio limit
    pub upper_lower_ratio_limit: f64,
}

/// Recovery thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryThresholds {
    /// Weekly sessions signalling overtraining risk
    pub overtraining_sessions: usize,

    /// Weekly sessions that, with a same-day session, call for rest
    pub needs_rest_sessions: usize,
}

/// Goal alignment thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAlignmentThresholds {
    /// Strength rep band (inclusive)
    pub strength_reps: (f64, f64),

    /// Muscle building rep band (inclusive)
    pub muscle_building_reps: (f64, f64),

    /// Endurance minimum reps
    pub endurance_min_reps: f64,

    /// Session volume below which volume is too low
    pub low_session_volume: f64,

    /// Session volume above which volume is too high
    pub high_session_volume: f64,
}

/// Achievement thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementThresholds {
    /// Minimum volume increase over baseline, in percent
    pub volume_increase_percent: f64,

    /// Consecutive training day counts worth celebrating, ascending
    pub streak_milestones: Vec<u32>,
}

/// Tip engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipSettings {
    /// Number of tips returned when the caller does not ask for a count
    pub default_max_tips: usize,
}

/// Main analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Time windows
    pub timeframes: AnalysisTimeframes,
    /// Plateau detection
    pub progression: ProgressionThresholds,
    /// Muscle balance
    pub balance: BalanceThresholds,
    /// Recovery status
    pub recovery: RecoveryThresholds,
    /// Goal alignment
    pub goal_alignment: GoalAlignmentThresholds,
    /// Achievements
    pub achievements: AchievementThresholds,
    /// Tip engine
    pub tips: TipSettings,
    /// Formula for every one-rep-max estimate
    pub one_rep_max_formula: OneRepMaxFormula,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            timeframes: AnalysisTimeframes {
                balance_window_weeks: balance::WINDOW_WEEKS,
                recovery_window_days: recovery::WINDOW_DAYS,
                streak_max_gap_days: consistency::STREAK_MAX_GAP_DAYS,
                frequency_window_weeks: consistency::FREQUENCY_WINDOW_WEEKS,
                goal_alignment_sessions: goal_alignment::RECENT_SESSIONS,
                achievement_window_weeks: achievements::WINDOW_WEEKS,
                volume_baseline_weeks: achievements::VOLUME_BASELINE_WEEKS,
            },
            progression: ProgressionThresholds {
                min_sessions: progression::MIN_SESSIONS,
                recent_sessions: progression::RECENT_SESSIONS,
                plateau_window_sessions: progression::PLATEAU_WINDOW_SESSIONS,
                plateau_variance_threshold: progression::PLATEAU_VARIANCE_THRESHOLD,
                min_plateau_weeks: progression::MIN_PLATEAU_WEEKS,
                weight_increase_factor: progression::WEIGHT_INCREASE_FACTOR,
                opportunity_confidence: progression::OPPORTUNITY_CONFIDENCE,
            },
            balance: BalanceThresholds {
                push_pull_ratio_limit: balance::PUSH_PULL_RATIO_LIMIT,
                upper_lower_ratio_limit: balance::UPPER_LOWER_RATIO_LIMIT,
            },
            recovery: RecoveryThresholds {
                overtraining_sessions: recovery::OVERTRAINING_SESSIONS,
                needs_rest_sessions: recovery::NEEDS_REST_SESSIONS,
            },
            goal_alignment: GoalAlignmentThresholds {
                strength_reps: goal_alignment::STRENGTH_REPS,
                muscle_building_reps: goal_alignment::MUSCLE_BUILDING_REPS,
                endurance_min_reps: goal_alignment::ENDURANCE_MIN_REPS,
                low_session_volume: goal_alignment::LOW_SESSION_VOLUME,
                high_session_volume: goal_alignment::HIGH_SESSION_VOLUME,
            },
            achievements: AchievementThresholds {
                volume_increase_percent: achievements::VOLUME_INCREASE_PERCENT,
                streak_milestones: achievements::STREAK_MILESTONES.to_vec(),
            },
            tips: TipSettings {
                default_max_tips: tips::DEFAULT_MAX_TIPS,
            },
            one_rep_max_formula: OneRepMaxFormula::Linear,
        }
    }
}

/// Parse an environment variable if present
fn env_override<T: FromStr>(
    name: &str,
    to_error: fn(String) -> AnalysisConfigError,
) -> Result<Option<T>, AnalysisConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| to_error(name.to_owned())),
        Err(_) => Ok(None),
    }
}

impl AnalysisConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    pub fn from_environment() -> Result<Self, AnalysisConfigError> {
        let mut config = Self::default();

        if let Some(value) = env_override(
            "GYMBO_PLATEAU_VARIANCE_THRESHOLD",
            AnalysisConfigError::InvalidThreshold,
        )? {
            config.progression.plateau_variance_threshold = value;
        }

        if let Some(value) =
            env_override("GYMBO_PLATEAU_MIN_WEEKS", AnalysisConfigError::InvalidTimeframe)?
        {
            config.progression.min_plateau_weeks = value;
        }

        if let Some(value) = env_override(
            "GYMBO_BALANCE_WINDOW_WEEKS",
            AnalysisConfigError::InvalidTimeframe,
        )? {
            config.timeframes.balance_window_weeks = value;
        }

        if let Some(value) = env_override(
            "GYMBO_OVERTRAINING_SESSIONS",
            AnalysisConfigError::InvalidThreshold,
        )? {
            config.recovery.overtraining_sessions = value;
        }

        if let Some(value) = env_override(
            "GYMBO_VOLUME_INCREASE_PERCENT",
            AnalysisConfigError::InvalidThreshold,
        )? {
            config.achievements.volume_increase_percent = value;
        }

        if let Some(value) = env_override("GYMBO_MAX_TIPS", AnalysisConfigError::InvalidThreshold)?
        {
            config.tips.default_max_tips = value;
        }

        if let Some(value) = env_override(
            "GYMBO_ONE_REP_MAX_FORMULA",
            AnalysisConfigError::InvalidThreshold,
        )? {
            config.one_rep_max_formula = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), AnalysisConfigError> {
        let windows = [
            (
                "balance_window_weeks",
                self.timeframes.balance_window_weeks,
                MAX_WINDOW_WEEKS,
            ),
            (
                "recovery_window_days",
                self.timeframes.recovery_window_days,
                MAX_WINDOW_DAYS,
            ),
            (
                "streak_max_gap_days",
                self.timeframes.streak_max_gap_days,
                MAX_WINDOW_DAYS,
            ),
            (
                "frequency_window_weeks",
                self.timeframes.frequency_window_weeks,
                MAX_WINDOW_WEEKS,
            ),
            (
                "achievement_window_weeks",
                self.timeframes.achievement_window_weeks,
                MAX_WINDOW_WEEKS,
            ),
            (
                "volume_baseline_weeks",
                self.timeframes.volume_baseline_weeks,
                MAX_WINDOW_WEEKS,
            ),
            (
                "min_plateau_weeks",
                self.progression.min_plateau_weeks,
                MAX_WINDOW_WEEKS,
            ),
        ];
        if let Some((name, _, max)) = windows
            .iter()
            .find(|(_, value, max)| *value <= 0 || value > max)
        {
            return Err(AnalysisConfigError::ValidationFailed(format!(
                "{name} must be between 1 and {max}"
            )));
        }

        let thresholds = [
            (
                "plateau_variance_threshold",
                self.progression.plateau_variance_threshold,
            ),
            (
                "weight_increase_factor",
                self.progression.weight_increase_factor,
            ),
            (
                "opportunity_confidence",
                self.progression.opportunity_confidence,
            ),
            ("push_pull_ratio_limit", self.balance.push_pull_ratio_limit),
            ("upper_lower_ratio_limit", self.balance.upper_lower_ratio_limit),
            ("strength_reps.min", self.goal_alignment.strength_reps.0),
            ("strength_reps.max", self.goal_alignment.strength_reps.1),
            (
                "muscle_building_reps.min",
                self.goal_alignment.muscle_building_reps.0,
            ),
            (
                "muscle_building_reps.max",
                self.goal_alignment.muscle_building_reps.1,
            ),
            ("endurance_min_reps", self.goal_alignment.endurance_min_reps),
            ("low_session_volume", self.goal_alignment.low_session_volume),
            ("high_session_volume", self.goal_alignment.high_session_volume),
            (
                "volume_increase_percent",
                self.achievements.volume_increase_percent,
            ),
        ];
        if let Some((name, _)) = thresholds.iter().find(|(_, value)| !value.is_finite()) {
            return Err(AnalysisConfigError::ValidationFailed(format!(
                "{name} must be a finite number"
            )));
        }

        if self.timeframes.goal_alignment_sessions == 0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "goal_alignment_sessions must be > 0".into(),
            ));
        }

        let progression = &self.progression;
        if progression.min_sessions < 2 {
            return Err(AnalysisConfigError::ValidationFailed(
                "min_sessions must be >= 2".into(),
            ));
        }
        if progression.recent_sessions == 0 || progression.plateau_window_sessions < 2 {
            return Err(AnalysisConfigError::ValidationFailed(
                "recent_sessions must be > 0 and plateau_window_sessions >= 2".into(),
            ));
        }
        if progression.plateau_variance_threshold <= 0.0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "plateau_variance_threshold must be > 0".into(),
            ));
        }
        if progression.weight_increase_factor < 1.0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "weight_increase_factor must be >= 1.0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&progression.opportunity_confidence) {
            return Err(AnalysisConfigError::ValidationFailed(
                "opportunity_confidence must be between 0 and 1".into(),
            ));
        }

        if self.balance.push_pull_ratio_limit <= 1.0 || self.balance.upper_lower_ratio_limit <= 1.0
        {
            return Err(AnalysisConfigError::ValidationFailed(
                "balance ratio limits must be > 1.0".into(),
            ));
        }

        if self.recovery.needs_rest_sessions > self.recovery.overtraining_sessions {
            return Err(AnalysisConfigError::ValidationFailed(
                "needs_rest_sessions must be <= overtraining_sessions".into(),
            ));
        }

        let goals = &self.goal_alignment;
        if goals.strength_reps.0 > goals.strength_reps.1
            || goals.muscle_building_reps.0 > goals.muscle_building_reps.1
        {
            return Err(AnalysisConfigError::ValidationFailed(
                "rep bands must have min <= max".into(),
            ));
        }
        if goals.high_session_volume <= goals.low_session_volume {
            return Err(AnalysisConfigError::ValidationFailed(
                "high_session_volume must be > low_session_volume".into(),
            ));
        }

        if self.achievements.volume_increase_percent < 0.0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "volume_increase_percent must be >= 0".into(),
            ));
        }
        if !self
            .achievements
            .streak_milestones
            .windows(2)
            .all(|pair| pair[0] < pair[1])
        {
            return Err(AnalysisConfigError::ValidationFailed(
                "streak_milestones must be strictly ascending".into(),
            ));
        }

        if self.tips.default_max_tips == 0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "default_max_tips must be > 0".into(),
            ));
        }

        Ok(())
    }
}
