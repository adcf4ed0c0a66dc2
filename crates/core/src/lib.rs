//! Team Tracker Core - goal domain model, list controller and form state.
//!
//! This crate is transport-agnostic. It defines the [`goals::GoalClientTrait`]
//! capability which the `goals-client` crate implements over HTTP, and which
//! tests replace with in-memory doubles.

pub mod constants;
pub mod errors;
pub mod goals;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
