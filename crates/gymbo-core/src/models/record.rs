// ABOUTME: Personal record model with one-rep-max estimation and monotonic update rules
// ABOUTME: Pure arithmetic: record detection priority chain and max-merging of new performances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Personal records
//!
//! Each exercise has at most one [`ExerciseRecord`] tracking three independent
//! bests: heaviest weight, most reps, and best estimated one-rep max. Every best
//! is monotonically non-decreasing; [`ExerciseRecord::updated_with`] may raise
//! a field but never lower it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::constants::records::{BRZYCKI_INTERCEPT, BRZYCKI_SLOPE, LINEAR_ONE_REP_MAX_DIVISOR};

/// Formula used to estimate a one-rep max from a submaximal set
///
/// Two formulas were historically used at different call sites. `Linear` is
/// canonical; `Brzycki` stays available for callers that opt in explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxFormula {
    /// `weight × (1 + reps / 30)`
    #[default]
    Linear,
    /// `weight / (1.0278 − 0.0278 × reps)`
    Brzycki,
}

impl OneRepMaxFormula {
    /// Estimate a one-rep max
    ///
    /// Zero reps return the weight unchanged and a single rep is exact for both
    /// formulas. Brzycki is singular at 37+ reps and falls back to the linear
    /// estimate there.
    #[must_use]
    pub fn estimate(self, weight: f64, reps: u32) -> f64 {
        if reps <= 1 {
            return weight;
        }
        let reps = f64::from(reps);
        let linear = weight * (1.0 + reps / LINEAR_ONE_REP_MAX_DIVISOR);
        match self {
            Self::Linear => linear,
            Self::Brzycki => {
                let denominator = BRZYCKI_SLOPE.mul_add(-reps, BRZYCKI_INTERCEPT);
                if denominator <= f64::EPSILON {
                    linear
                } else {
                    weight / denominator
                }
            }
        }
    }
}

impl fmt::Display for OneRepMaxFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Brzycki => f.write_str("brzycki"),
        }
    }
}

impl FromStr for OneRepMaxFormula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" | "epley" => Ok(Self::Linear),
            "brzycki" => Ok(Self::Brzycki),
            other => Err(format!("unknown one-rep-max formula '{other}'")),
        }
    }
}

/// Estimate a one-rep max with the canonical linear formula
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    OneRepMaxFormula::Linear.estimate(weight, reps)
}

/// Kind of personal record a set achieved
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Heaviest weight ever lifted
    MaxWeight,
    /// Most reps ever performed
    MaxReps,
    /// Best estimated one-rep max
    EstimatedOneRepMax,
}

impl RecordKind {
    /// Human readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::MaxWeight => "Heaviest weight",
            Self::MaxReps => "Most reps",
            Self::EstimatedOneRepMax => "Best estimated 1RM",
        }
    }

    /// Emoji shown next to the record
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::MaxWeight => "🏋️",
            Self::MaxReps => "🔥",
            Self::EstimatedOneRepMax => "💪",
        }
    }
}

/// Best performances for one exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseRecord {
    /// Exercise the record belongs to
    pub exercise_id: Uuid,
    /// Exercise name at the time of the last update
    pub exercise_name: String,

    /// Heaviest weight lifted
    pub max_weight: f64,
    /// Reps performed with the heaviest weight
    pub max_weight_reps: u32,
    /// When the heaviest weight was lifted
    pub max_weight_date: DateTime<Utc>,

    /// Most reps performed
    pub max_reps: u32,
    /// Weight used for the most reps
    pub max_reps_weight: f64,
    /// When the most reps were performed
    pub max_reps_date: DateTime<Utc>,

    /// Best estimated one-rep max
    pub best_estimated_one_rep_max: f64,
    /// Weight of the set producing the best estimate
    pub best_one_rep_max_weight: f64,
    /// Reps of the set producing the best estimate
    pub best_one_rep_max_reps: u32,
    /// When the best estimate was set
    pub best_one_rep_max_date: DateTime<Utc>,

    /// Formula used for every estimate on this record
    #[serde(default)]
    pub formula: OneRepMaxFormula,

    /// First performance recorded
    pub created_at: DateTime<Utc>,
    /// Latest performance applied
    pub updated_at: DateTime<Utc>,
}

impl ExerciseRecord {
    /// Create a record from the first completed set of an exercise
    #[must_use]
    pub fn from_first_set(
        exercise_id: Uuid,
        exercise_name: impl Into<String>,
        weight: f64,
        reps: u32,
        date: DateTime<Utc>,
        formula: OneRepMaxFormula,
    ) -> Self {
        Self {
            exercise_id,
            exercise_name: exercise_name.into(),
            max_weight: weight,
            max_weight_reps: reps,
            max_weight_date: date,
            max_reps: reps,
            max_reps_weight: weight,
            max_reps_date: date,
            best_estimated_one_rep_max: formula.estimate(weight, reps),
            best_one_rep_max_weight: weight,
            best_one_rep_max_reps: reps,
            best_one_rep_max_date: date,
            formula,
            created_at: date,
            updated_at: date,
        }
    }

    /// Estimate a one-rep max with this record's formula
    #[must_use]
    pub fn estimate(&self, weight: f64, reps: u32) -> f64 {
        self.formula.estimate(weight, reps)
    }

    /// Check whether a set would set a new record
    ///
    /// Evaluated as a priority chain: only the first satisfied kind is
    /// reported even when the set improves several bests.
    #[must_use]
    pub fn has_new_record(&self, weight: f64, reps: u32) -> Option<RecordKind> {
        if weight > self.max_weight {
            Some(RecordKind::MaxWeight)
        } else if reps > self.max_reps {
            Some(RecordKind::MaxReps)
        } else if self.estimate(weight, reps) > self.best_estimated_one_rep_max {
            Some(RecordKind::EstimatedOneRepMax)
        } else {
            None
        }
    }

    /// Produce a new record with each best replaced by `max(old, new)`
    ///
    /// The three bests move independently, so they may originate from
    /// different sets and sessions.
    #[must_use]
    pub fn updated_with(&self, weight: f64, reps: u32, date: DateTime<Utc>) -> Self {
        let mut next = self.clone();

        if weight > self.max_weight {
            next.max_weight = weight;
            next.max_weight_reps = reps;
            next.max_weight_date = date;
        }

        if reps > self.max_reps {
            next.max_reps = reps;
            next.max_reps_weight = weight;
            next.max_reps_date = date;
        }

        let estimated = self.estimate(weight, reps);
        if estimated > self.best_estimated_one_rep_max {
            next.best_estimated_one_rep_max = estimated;
            next.best_one_rep_max_weight = weight;
            next.best_one_rep_max_reps = reps;
            next.best_one_rep_max_date = date;
        }

        next.updated_at = self.updated_at.max(date);
        next
    }

    /// Most recent date on which any of the three bests changed
    #[must_use]
    pub fn last_broken_at(&self) -> DateTime<Utc> {
        self.max_weight_date
            .max(self.max_reps_date)
            .max(self.best_one_rep_max_date)
    }
}
