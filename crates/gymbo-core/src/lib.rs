// ABOUTME: Core types and constants for the GymBo training analytics engine
// ABOUTME: Foundation crate with error handling, domain models, record math, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # GymBo Core
//!
//! Foundation crate providing shared types for the GymBo training analytics
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Training thresholds organized by analysis domain
//! - **models**: Sessions, sets, exercises, profiles, records, tips, and health data

/// Unified error handling system with standard error codes
pub mod errors;

/// Training constants organized by analysis domain
pub mod constants;

/// Core data models (sessions, exercises, records, tips, profile)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
