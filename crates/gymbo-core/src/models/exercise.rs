// ABOUTME: Exercise catalog entity with muscle groups, equipment, and difficulty tiers
// ABOUTME: Closed enumerations matched exhaustively by analyzers and the workout generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Muscle groups an exercise can target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, rhomboids, erectors
    Back,
    /// Deltoids
    Shoulders,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// Quads, hamstrings, calves
    Legs,
    /// Glutes
    Glutes,
    /// Abdominals
    Abs,
    /// Conditioning work
    Cardio,
}

impl MuscleGroup {
    /// Every muscle group, in catalog order
    pub const ALL: [Self; 9] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Legs,
        Self::Glutes,
        Self::Abs,
        Self::Cardio,
    ];

    /// Pushing muscles
    pub const PUSH: [Self; 3] = [Self::Chest, Self::Shoulders, Self::Triceps];

    /// Pulling muscles
    pub const PULL: [Self; 2] = [Self::Back, Self::Biceps];

    /// Upper body muscles
    pub const UPPER_BODY: [Self; 5] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
    ];

    /// Lower body muscles
    pub const LOWER_BODY: [Self; 2] = [Self::Legs, Self::Glutes];

    /// Human readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Chest => "Chest",
            Self::Back => "Back",
            Self::Shoulders => "Shoulders",
            Self::Biceps => "Biceps",
            Self::Triceps => "Triceps",
            Self::Legs => "Legs",
            Self::Glutes => "Glutes",
            Self::Abs => "Abs",
            Self::Cardio => "Cardio",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Equipment category of a catalog exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    /// Barbells, dumbbells, kettlebells
    #[default]
    FreeWeights,
    /// Selectorized or plate-loaded machines
    Machine,
    /// Cable stations
    Cable,
    /// No external load
    Bodyweight,
    /// Combination of the above
    Mixed,
}

/// Difficulty tier of a catalog exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    /// Suitable for novices
    #[default]
    Beginner,
    /// Requires some technique
    Intermediate,
    /// Technically demanding
    Advanced,
}

/// Catalog exercise
///
/// Immutable reference data owned by the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Stable identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Targeted muscle groups (at least one)
    pub muscle_groups: Vec<MuscleGroup>,
    /// Equipment category
    pub equipment: EquipmentType,
    /// Difficulty tier
    pub difficulty: DifficultyLevel,
    /// Free-text description
    pub description: String,
    /// Step-by-step instructions
    pub instructions: Vec<String>,
}

impl Exercise {
    /// Create a catalog exercise with a fresh id and empty description
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        muscle_groups: Vec<MuscleGroup>,
        equipment: EquipmentType,
        difficulty: DifficultyLevel,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            muscle_groups,
            equipment,
            difficulty,
            description: String::new(),
            instructions: Vec::new(),
        }
    }

    /// Compound exercises target two or more muscle groups
    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.muscle_groups.len() >= 2
    }

    /// Isolation exercises target exactly one muscle group
    #[must_use]
    pub fn is_isolation(&self) -> bool {
        self.muscle_groups.len() == 1
    }

    /// Whether the exercise works the given muscle group
    #[must_use]
    pub fn targets(&self, group: MuscleGroup) -> bool {
        self.muscle_groups.contains(&group)
    }
}
