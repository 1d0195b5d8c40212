//! Core domain logic for the readiness checker
//!
//! This module contains the domain types and pure logic. The checks in
//! [`crate::checks`] do the filesystem and subprocess work and hand their
//! findings to these types.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`CheckReport`, `DeploymentInfo`, `ReadinessTier`)
//! - `services/` - Substring matching and pass tallying

pub mod models;
pub mod services;
