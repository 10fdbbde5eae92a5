// ABOUTME: Persistence collaborator contract for the training engine plus an in-memory implementation
// ABOUTME: Sessions, exercise catalog, personal records, and the user profile behind one trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Persistence collaborator
//!
//! The engine never owns storage. Everything it reads or writes goes through
//! [`TrainingRepository`]; [`InMemoryRepository`] backs tests, benches, and
//! embedders without a database.

use std::sync::RwLock;

use dashmap::DashMap;
use gymbo_core::models::{CompletedSession, Exercise, ExerciseRecord, UserProfile};
use gymbo_core::{AppError, AppResult};
use tracing::debug;
use uuid::Uuid;

/// Storage operations required by the training engine
pub trait TrainingRepository: Send + Sync {
    /// Completed sessions, newest first, at most `limit` when given
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails
    fn fetch_sessions(&self, limit: Option<usize>) -> AppResult<Vec<CompletedSession>>;

    /// Full exercise catalog in a stable order
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails
    fn fetch_exercise_catalog(&self) -> AppResult<Vec<Exercise>>;

    /// Record of one exercise, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails
    fn fetch_record(&self, exercise_id: Uuid) -> AppResult<Option<ExerciseRecord>>;

    /// Every stored record
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails
    fn fetch_records(&self) -> AppResult<Vec<ExerciseRecord>>;

    /// Insert or replace the record of `record.exercise_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails
    fn upsert_record(&self, record: ExerciseRecord) -> AppResult<()>;

    /// Current user profile
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails
    fn fetch_profile(&self) -> AppResult<UserProfile>;
}

/// Thread-safe repository held entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    sessions: DashMap<Uuid, CompletedSession>,
    catalog: RwLock<Vec<Exercise>>,
    records: DashMap<Uuid, ExerciseRecord>,
    profile: RwLock<UserProfile>,
}

impl InMemoryRepository {
    /// Create an empty repository with the default profile
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with a catalog and a profile
    #[must_use]
    pub fn with_catalog(catalog: Vec<Exercise>, profile: UserProfile) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            profile: RwLock::new(profile),
            ..Self::default()
        }
    }

    /// Store a completed session
    pub fn add_session(&self, session: CompletedSession) {
        debug!(session_id = %session.id, "Storing completed session");
        self.sessions.insert(session.id, session);
    }

    /// Remove a session, returning it if it existed
    pub fn delete_session(&self, session_id: Uuid) -> Option<CompletedSession> {
        self.sessions.remove(&session_id).map(|(_, session)| session)
    }

    /// Append an exercise to the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lock is poisoned
    pub fn add_exercise(&self, exercise: Exercise) -> AppResult<()> {
        self.catalog
            .write()
            .map_err(|_| AppError::internal("exercise catalog lock poisoned"))?
            .push(exercise);
        Ok(())
    }

    /// Replace the user profile
    ///
    /// # Errors
    ///
    /// Returns an error if the profile lock is poisoned
    pub fn set_profile(&self, profile: UserProfile) -> AppResult<()> {
        *self
            .profile
            .write()
            .map_err(|_| AppError::internal("profile lock poisoned"))? = profile;
        Ok(())
    }

    /// Number of stored sessions
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

impl TrainingRepository for InMemoryRepository {
    fn fetch_sessions(&self, limit: Option<usize>) -> AppResult<Vec<CompletedSession>> {
        let mut sessions: Vec<CompletedSession> = self
            .sessions
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        sessions.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        if let Some(limit) = limit {
            sessions.truncate(limit);
        }
        Ok(sessions)
    }

    fn fetch_exercise_catalog(&self) -> AppResult<Vec<Exercise>> {
        self.catalog
            .read()
            .map(|catalog| catalog.clone())
            .map_err(|_| AppError::internal("exercise catalog lock poisoned"))
    }

    fn fetch_record(&self, exercise_id: Uuid) -> AppResult<Option<ExerciseRecord>> {
        Ok(self
            .records
            .get(&exercise_id)
            .map(|entry| entry.value().clone()))
    }

    fn fetch_records(&self) -> AppResult<Vec<ExerciseRecord>> {
        let mut records: Vec<ExerciseRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by_key(|record| record.exercise_id);
        Ok(records)
    }

    fn upsert_record(&self, record: ExerciseRecord) -> AppResult<()> {
        self.records.insert(record.exercise_id, record);
        Ok(())
    }

    fn fetch_profile(&self) -> AppResult<UserProfile> {
        self.profile
            .read()
            .map(|profile| profile.clone())
            .map_err(|_| AppError::internal("profile lock poisoned"))
    }
}
