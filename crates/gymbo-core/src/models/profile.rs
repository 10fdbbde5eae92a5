// ABOUTME: User profile and workout generator preferences with their enumerations
// ABOUTME: Defines fitness goals, experience tiers, equipment preference, and duration buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary training goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Maximal strength
    Strength,
    /// Hypertrophy
    MuscleBuilding,
    /// Muscular endurance
    Endurance,
    /// Fat loss
    WeightLoss,
    /// General fitness
    #[default]
    General,
}

impl FitnessGoal {
    /// Human readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::MuscleBuilding => "Muscle Building",
            Self::Endurance => "Endurance",
            Self::WeightLoss => "Weight Loss",
            Self::General => "General Fitness",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Training experience tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// 0-1 years of training
    #[default]
    Beginner,
    /// 1-3 years of training
    Intermediate,
    /// 3+ years of training
    Advanced,
}

impl ExperienceLevel {
    /// Human readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// Preferred equipment for generated workouts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentPreference {
    /// Barbells, dumbbells, bodyweight
    FreeWeights,
    /// Machines only
    Machines,
    /// Anything goes
    #[default]
    Mixed,
}

impl EquipmentPreference {
    /// Human readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FreeWeights => "Free Weights",
            Self::Machines => "Machines",
            Self::Mixed => "Mixed",
        }
    }
}

/// Session duration bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutDuration {
    /// About 30 minutes
    Short,
    /// About 45 minutes
    #[default]
    Medium,
    /// About 60 minutes
    Long,
    /// About 90 minutes
    Extended,
}

impl WorkoutDuration {
    /// Nominal length in minutes
    #[must_use]
    pub const fn minutes(self) -> u32 {
        match self {
            Self::Short => 30,
            Self::Medium => 45,
            Self::Long => 60,
            Self::Extended => 90,
        }
    }
}

/// User profile read by the analyzers and tip engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Training goal
    pub goal: FitnessGoal,
    /// Experience tier
    pub experience: ExperienceLevel,
    /// Equipment preference
    pub equipment: EquipmentPreference,
    /// Preferred session length
    pub preferred_duration: WorkoutDuration,
    /// Sessions per week the user aims for
    pub weekly_frequency_goal: u8,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            goal: FitnessGoal::default(),
            experience: ExperienceLevel::default(),
            equipment: EquipmentPreference::default(),
            preferred_duration: WorkoutDuration::default(),
            weekly_frequency_goal: 3,
        }
    }
}

/// Inputs of the workout generator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutPreferences {
    /// Experience tier
    pub experience: ExperienceLevel,
    /// Training goal
    pub goal: FitnessGoal,
    /// Sessions per week
    pub frequency: u8,
    /// Equipment preference
    pub equipment: EquipmentPreference,
    /// Session length bucket
    pub duration: WorkoutDuration,
}

impl From<&UserProfile> for WorkoutPreferences {
    fn from(profile: &UserProfile) -> Self {
        Self {
            experience: profile.experience,
            goal: profile.goal,
            frequency: profile.weekly_frequency_goal,
            equipment: profile.equipment,
            duration: profile.preferred_duration,
        }
    }
}
