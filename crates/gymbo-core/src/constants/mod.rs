// ABOUTME: Training constants used as defaults by the analyzers, tip engine, and generator
// ABOUTME: Groups thresholds by domain: records, progression, balance, recovery, goals, generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training constants
//!
//! Every tunable threshold of the engine lives here and is surfaced through
//! `AnalysisConfig` so it can be overridden per deployment.

/// One-rep-max and personal record constants
pub mod records {
    /// Divisor of the linear 1RM approximation `weight * (1 + reps / 30)`
    pub const LINEAR_ONE_REP_MAX_DIVISOR: f64 = 30.0;

    /// Brzycki curve intercept
    pub const BRZYCKI_INTERCEPT: f64 = 1.0278;

    /// Brzycki curve slope per repetition
    pub const BRZYCKI_SLOPE: f64 = 0.0278;

    /// Window for "recently broken" record statistics
    pub const RECENT_RECORD_DAYS: i64 = 30;

    /// Percent of 1RM to load per rep range
    pub const TRAINING_WEIGHT_PERCENTAGES: [(&str, f64); 6] = [
        ("1-3 reps (strength)", 0.90),
        ("4-6 reps (strength)", 0.85),
        ("6-8 reps (hypertrophy)", 0.80),
        ("8-12 reps (hypertrophy)", 0.75),
        ("12-15 reps (endurance)", 0.65),
        ("15+ reps (endurance)", 0.50),
    ];
}

/// Plateau detection
pub mod progression {
    /// Minimum sessions containing an exercise before it is analyzed
    pub const MIN_SESSIONS: usize = 2;

    /// Sessions averaged for the current working weight and reps
    pub const RECENT_SESSIONS: usize = 3;

    /// Sessions in the plateau variance window
    pub const PLATEAU_WINDOW_SESSIONS: usize = 4;

    /// Variance (kg²) below which per-session averages count as flat
    pub const PLATEAU_VARIANCE_THRESHOLD: f64 = 0.5;

    /// Minimum plateau length in weeks before reporting
    pub const MIN_PLATEAU_WEEKS: i64 = 3;

    /// Suggested load increase (2.5%)
    pub const WEIGHT_INCREASE_FACTOR: f64 = 1.025;

    /// Fixed confidence of a progression opportunity
    pub const OPPORTUNITY_CONFIDENCE: f64 = 0.8;
}

/// Muscle group balance
pub mod balance {
    /// Trailing window analyzed for balance
    pub const WINDOW_WEEKS: i64 = 4;

    /// Push/pull ratio above which an imbalance is flagged (either direction)
    pub const PUSH_PULL_RATIO_LIMIT: f64 = 1.5;

    /// Upper/lower ratio above which legs are flagged as undertrained
    pub const UPPER_LOWER_RATIO_LIMIT: f64 = 2.0;
}

/// Recovery status
pub mod recovery {
    /// Trailing window for the weekly session count
    pub const WINDOW_DAYS: i64 = 7;

    /// Sessions in the window that signal overtraining risk
    pub const OVERTRAINING_SESSIONS: usize = 6;

    /// Sessions in the window that, together with a same-day session, call for rest
    pub const NEEDS_REST_SESSIONS: usize = 3;

    /// Days-since-last value reported when there is no history at all
    pub const NO_HISTORY_DAYS: i64 = i64::MAX;
}

/// Consistency metrics
pub mod consistency {
    /// Maximum gap between sessions that keeps a streak alive
    pub const STREAK_MAX_GAP_DAYS: i64 = 7;

    /// Window for the average weekly frequency
    pub const FREQUENCY_WINDOW_WEEKS: i64 = 8;
}

/// Goal alignment
pub mod goal_alignment {
    /// Most recent sessions considered
    pub const RECENT_SESSIONS: usize = 5;

    /// Strength rep band (inclusive)
    pub const STRENGTH_REPS: (f64, f64) = (3.0, 6.0);

    /// Muscle building rep band (inclusive)
    pub const MUSCLE_BUILDING_REPS: (f64, f64) = (8.0, 12.0);

    /// Endurance minimum reps
    pub const ENDURANCE_MIN_REPS: f64 = 15.0;

    /// Session volume (kg) below which training volume is too low
    pub const LOW_SESSION_VOLUME: f64 = 5_000.0;

    /// Session volume (kg) above which training volume is too high
    pub const HIGH_SESSION_VOLUME: f64 = 30_000.0;
}

/// Achievement detection
pub mod achievements {
    /// Trailing window scanned for achievements
    pub const WINDOW_WEEKS: i64 = 2;

    /// Weeks before the window used as the volume baseline
    pub const VOLUME_BASELINE_WEEKS: i64 = 4;

    /// Minimum volume increase over baseline, in percent
    pub const VOLUME_INCREASE_PERCENT: f64 = 10.0;

    /// Consecutive training day counts worth celebrating
    pub const STREAK_MILESTONES: [u32; 8] = [5, 7, 10, 14, 21, 30, 50, 100];
}

/// Tip generation
pub mod tips {
    /// Default number of tips returned
    pub const DEFAULT_MAX_TIPS: usize = 3;

    /// Weeks at the same level for the "add a rep" rule
    pub const REP_TIP_MIN_WEEKS: i64 = 2;

    /// Rep count below which the "add a rep" rule fires
    pub const REP_TIP_MAX_REPS: u32 = 8;

    /// Plateau count that triggers the deload rule
    pub const DELOAD_PLATEAU_COUNT: usize = 3;

    /// Days since last session that start the "welcome back" range
    pub const COMEBACK_MIN_DAYS: i64 = 5;

    /// Days since last session that end the "welcome back" range
    pub const COMEBACK_MAX_DAYS: i64 = 10;

    /// Days since last session above which the long-break tip fires
    pub const LONG_BREAK_DAYS: i64 = 14;

    /// Streak length worth celebrating
    pub const STREAK_TIP_MIN: u32 = 3;

    /// Weekly frequency below which a consistency tip fires
    pub const LOW_FREQUENCY_PER_WEEK: f64 = 2.0;

    /// Session count required before the low frequency tip fires
    pub const LOW_FREQUENCY_MIN_SESSIONS: usize = 5;

    /// Ideal weekly frequency band (inclusive)
    pub const IDEAL_FREQUENCY_PER_WEEK: (f64, f64) = (3.0, 5.0);
}

/// Workout generation
pub mod generation {
    /// Lower bound on the number of exercises in a generated workout
    pub const MIN_EXERCISES: usize = 3;

    /// Highest supported weekly frequency
    pub const MAX_WEEKLY_FREQUENCY: u8 = 7;

    /// Lowercase name fragments identifying machine exercises
    pub const MACHINE_NAME_MARKERS: [&str; 2] = ["machine", "maschine"];
}

/// Bounds accepted by configuration validation
pub mod limits {
    /// Longest window expressed in weeks (ten years)
    pub const MAX_WINDOW_WEEKS: i64 = 520;

    /// Longest window expressed in days (ten years)
    pub const MAX_WINDOW_DAYS: i64 = 3650;
}
