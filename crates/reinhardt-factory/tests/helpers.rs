//! Test helpers for reinhardt-factory integration tests.
//!
//! This module provides sample models and an in-memory store standing in for
//! a database.

#[path = "helpers/models.rs"]
pub mod models;

#[path = "helpers/store.rs"]
pub mod store;
