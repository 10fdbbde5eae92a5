// ABOUTME: Constraint-driven workout generator assembling a session from the exercise catalog
// ABOUTME: Filters by equipment and difficulty, balances compound and isolation work, sets parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout generator
//!
//! Selection walks the target muscle groups for the compound share and then
//! for the isolation share, preferring exercises whose difficulty fits the
//! user's experience. Remaining slots are backfilled from the filtered
//! catalog. Rep counts come from an injected random source so callers can
//! seed it for reproducible plans.

use std::ops::RangeInclusive;

use gymbo_core::constants::generation::{MACHINE_NAME_MARKERS, MAX_WEEKLY_FREQUENCY, MIN_EXERCISES};
use gymbo_core::models::{
    DifficultyLevel, EquipmentPreference, Exercise, ExerciseSet, ExperienceLevel, FitnessGoal,
    MuscleGroup, Workout, WorkoutDuration, WorkoutExercise, WorkoutPreferences,
};
use gymbo_core::AppError;
use rand::Rng;
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

/// Workout generation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The catalog is empty
    #[error("no exercises available for the selected preferences")]
    NoExercisesAvailable,

    /// Filtering left nothing to select
    #[error("not enough exercises found (required: {required}, available: {available})")]
    InsufficientExercises {
        /// Exercises the plan needed
        required: usize,
        /// Exercises that survived filtering
        available: usize,
    },

    /// Preferences outside the supported range
    #[error("invalid workout preferences: {0}")]
    InvalidPreferences(String),
}

impl From<GenerationError> for AppError {
    fn from(error: GenerationError) -> Self {
        let app_error = match &error {
            GenerationError::NoExercisesAvailable => {
                Self::generation_infeasible(error.to_string())
            }
            GenerationError::InsufficientExercises {
                required,
                available,
            } => Self::generation_infeasible(error.to_string()).with_details(json!({
                "required": required,
                "available": available,
            })),
            GenerationError::InvalidPreferences(_) => Self::invalid_input(error.to_string()),
        };
        app_error.with_source(error)
    }
}

/// Builds workouts from preferences and a catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutGenerator;

impl WorkoutGenerator {
    /// Create a generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate a workout using the thread-local random source
    ///
    /// # Errors
    ///
    /// See [`Self::generate_with_rng`]
    pub fn generate(
        &self,
        preferences: &WorkoutPreferences,
        catalog: &[Exercise],
    ) -> Result<Workout, GenerationError> {
        self.generate_with_rng(preferences, catalog, &mut rand::thread_rng())
    }

    /// Generate a workout drawing rep counts from `rng`
    ///
    /// # Errors
    ///
    /// Returns `InvalidPreferences` when the weekly frequency is 0 or above 7,
    /// `NoExercisesAvailable` for an empty catalog, and `InsufficientExercises`
    /// when the equipment filter removes every candidate.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        preferences: &WorkoutPreferences,
        catalog: &[Exercise],
        rng: &mut R,
    ) -> Result<Workout, GenerationError> {
        if preferences.frequency == 0 || preferences.frequency > MAX_WEEKLY_FREQUENCY {
            return Err(GenerationError::InvalidPreferences(format!(
                "weekly frequency must be between 1 and {MAX_WEEKLY_FREQUENCY}, got {}",
                preferences.frequency
            )));
        }
        if catalog.is_empty() {
            return Err(GenerationError::NoExercisesAvailable);
        }

        let target_groups = target_muscle_groups(preferences.frequency);
        let selected = select_exercises(preferences, &target_groups, catalog);
        if selected.is_empty() {
            let required = exercise_count(preferences.duration, preferences.experience);
            warn!(
                required,
                catalog = catalog.len(),
                equipment = preferences.equipment.display_name(),
                "No catalog exercise survived filtering"
            );
            return Err(GenerationError::InsufficientExercises {
                required,
                available: 0,
            });
        }

        let rest_seconds = rest_seconds(preferences.goal);
        let exercises: Vec<WorkoutExercise> = selected
            .into_iter()
            .map(|exercise| {
                let reps = rng.gen_range(rep_range(preferences.goal));
                let sets = set_count(exercise, preferences.experience);
                WorkoutExercise {
                    exercise: exercise.clone(),
                    sets: (0..sets)
                        .map(|_| ExerciseSet::planned(0.0, reps, rest_seconds))
                        .collect(),
                }
            })
            .collect();

        let workout = Workout {
            name: workout_name(preferences.goal, preferences.equipment),
            exercises,
            default_rest_seconds: rest_seconds,
            notes: workout_notes(preferences),
        };

        info!(
            name = %workout.name,
            exercises = workout.exercises.len(),
            sets = workout.total_sets(),
            "Generated workout"
        );
        Ok(workout)
    }
}

/// Muscle groups trained at a weekly frequency
#[must_use]
pub fn target_muscle_groups(frequency: u8) -> Vec<MuscleGroup> {
    use MuscleGroup::{Abs, Back, Biceps, Chest, Legs, Shoulders, Triceps};

    match frequency {
        0..=2 => vec![Chest, Back, Shoulders, Legs, Abs],
        3 => vec![Chest, Back, Legs, Shoulders, Abs],
        4 | 5 => vec![Chest, Back, Shoulders, Legs, Biceps, Triceps, Abs],
        _ => MuscleGroup::ALL.to_vec(),
    }
}

/// Whether the exercise name marks it as a machine exercise
#[must_use]
pub fn is_machine_exercise(exercise: &Exercise) -> bool {
    let name = exercise.name.to_lowercase();
    MACHINE_NAME_MARKERS
        .iter()
        .any(|marker| name.contains(marker))
}

/// Catalog entries allowed by the equipment preference
#[must_use]
pub fn filter_by_equipment(
    preference: EquipmentPreference,
    catalog: &[Exercise],
) -> Vec<&Exercise> {
    catalog
        .iter()
        .filter(|exercise| match preference {
            EquipmentPreference::FreeWeights => !is_machine_exercise(exercise),
            EquipmentPreference::Machines => is_machine_exercise(exercise),
            EquipmentPreference::Mixed => true,
        })
        .collect()
}

/// Whether an exercise's difficulty suits the experience level
#[must_use]
pub const fn matches_difficulty(exercise: &Exercise, experience: ExperienceLevel) -> bool {
    match experience {
        ExperienceLevel::Beginner => matches!(
            exercise.difficulty,
            DifficultyLevel::Beginner | DifficultyLevel::Intermediate
        ),
        ExperienceLevel::Intermediate => true,
        ExperienceLevel::Advanced => matches!(
            exercise.difficulty,
            DifficultyLevel::Intermediate | DifficultyLevel::Advanced
        ),
    }
}

/// Stable partition putting suitable difficulties first
#[must_use]
pub fn order_by_difficulty(
    exercises: Vec<&Exercise>,
    experience: ExperienceLevel,
) -> Vec<&Exercise> {
    let (mut ordered, fallback): (Vec<&Exercise>, Vec<&Exercise>) = exercises
        .into_iter()
        .partition(|exercise| matches_difficulty(exercise, experience));
    ordered.extend(fallback);
    ordered
}

/// Exercises per workout for a duration and experience level
#[must_use]
pub fn exercise_count(duration: WorkoutDuration, experience: ExperienceLevel) -> usize {
    let base: usize = match duration {
        WorkoutDuration::Short => 4,
        WorkoutDuration::Medium => 6,
        WorkoutDuration::Long => 8,
        WorkoutDuration::Extended => 10,
    };
    let adjusted = match experience {
        ExperienceLevel::Beginner => base - 1,
        ExperienceLevel::Intermediate => base,
        ExperienceLevel::Advanced => base + 1,
    };
    adjusted.max(MIN_EXERCISES)
}

/// Share of compound exercises for an experience level
#[must_use]
pub const fn compound_ratio(experience: ExperienceLevel) -> f64 {
    match experience {
        ExperienceLevel::Beginner => 0.8,
        ExperienceLevel::Intermediate => 0.6,
        ExperienceLevel::Advanced => 0.4,
    }
}

/// Planned sets, one extra for compound exercises
#[must_use]
pub fn set_count(exercise: &Exercise, experience: ExperienceLevel) -> u32 {
    let base = match experience {
        ExperienceLevel::Beginner => 2,
        ExperienceLevel::Intermediate => 3,
        ExperienceLevel::Advanced => 4,
    };
    if exercise.is_compound() {
        base + 1
    } else {
        base
    }
}

/// Rep range drawn from for a goal
#[must_use]
pub const fn rep_range(goal: FitnessGoal) -> RangeInclusive<u32> {
    match goal {
        FitnessGoal::Strength => 3..=6,
        FitnessGoal::MuscleBuilding => 8..=12,
        FitnessGoal::Endurance => 15..=20,
        FitnessGoal::WeightLoss => 12..=15,
        FitnessGoal::General => 10..=12,
    }
}

/// Rest between sets for a goal
#[must_use]
pub const fn rest_seconds(goal: FitnessGoal) -> u32 {
    match goal {
        FitnessGoal::Strength => 120,
        FitnessGoal::MuscleBuilding => 90,
        FitnessGoal::Endurance => 60,
        FitnessGoal::WeightLoss => 45,
        FitnessGoal::General => 75,
    }
}

/// Display name of a generated workout
#[must_use]
pub fn workout_name(goal: FitnessGoal, equipment: EquipmentPreference) -> String {
    let prefix = match goal {
        FitnessGoal::MuscleBuilding => "Muscle Building",
        FitnessGoal::Strength => "Strength",
        FitnessGoal::Endurance => "Endurance",
        FitnessGoal::WeightLoss => "Fat Burn",
        FitnessGoal::General => "Fitness",
    };
    format!("{prefix} - {}", equipment.display_name())
}

/// Multi-line notes describing the plan
#[must_use]
pub fn workout_notes(preferences: &WorkoutPreferences) -> String {
    let tip = match preferences.goal {
        FitnessGoal::Strength => "Focus on heavy weights and longer rests",
        FitnessGoal::MuscleBuilding => "Controlled movements, mind-muscle connection",
        FitnessGoal::Endurance => "Higher reps, shorter rests",
        FitnessGoal::WeightLoss => "Keep the intensity high, supersets welcome",
        FitnessGoal::General => "Balanced training, listen to your body",
    };

    [
        format!("🎯 Goal: {}", preferences.goal.display_name()),
        format!("📊 Level: {}", preferences.experience.display_name()),
        format!("⏱️ Duration: ~{} minutes", preferences.duration.minutes()),
        format!("🔄 Frequency: {}x per week", preferences.frequency),
        format!("💡 Tip: {tip}"),
    ]
    .join("\n")
}

fn select_exercises<'a>(
    preferences: &WorkoutPreferences,
    target_groups: &[MuscleGroup],
    catalog: &'a [Exercise],
) -> Vec<&'a Exercise> {
    let available = order_by_difficulty(
        filter_by_equipment(preferences.equipment, catalog),
        preferences.experience,
    );
    let compounds: Vec<&Exercise> = available
        .iter()
        .copied()
        .filter(|exercise| exercise.is_compound())
        .collect();
    let isolations: Vec<&Exercise> = available
        .iter()
        .copied()
        .filter(|exercise| exercise.is_isolation())
        .collect();

    let target = exercise_count(preferences.duration, preferences.experience);
    let compound_count = (target as f64 * compound_ratio(preferences.experience)).floor() as usize;
    let isolation_count = target - compound_count;

    let mut selected: Vec<&Exercise> = Vec::with_capacity(target);
    for (pool, count) in [(&compounds, compound_count), (&isolations, isolation_count)] {
        for group in target_groups.iter().take(count) {
            if let Some(exercise) = pick_for_group(pool, *group, &selected, preferences.experience)
            {
                selected.push(exercise);
            }
        }
    }

    for candidate in available {
        if selected.len() >= target {
            break;
        }
        if !contains(&selected, candidate) {
            selected.push(candidate);
        }
    }

    selected.truncate(target);
    selected
}

/// First unused exercise for a group, preferring a suitable difficulty
fn pick_for_group<'a>(
    pool: &[&'a Exercise],
    group: MuscleGroup,
    selected: &[&Exercise],
    experience: ExperienceLevel,
) -> Option<&'a Exercise> {
    let mut candidates = pool
        .iter()
        .copied()
        .filter(|exercise| exercise.targets(group) && !contains(selected, exercise));
    let first = candidates.next()?;
    if matches_difficulty(first, experience) {
        return Some(first);
    }
    Some(
        candidates
            .find(|exercise| matches_difficulty(exercise, experience))
            .unwrap_or(first),
    )
}

fn contains(selected: &[&Exercise], exercise: &Exercise) -> bool {
    selected.iter().any(|chosen| chosen.id == exercise.id)
}
