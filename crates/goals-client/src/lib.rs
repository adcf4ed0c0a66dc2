//! Team Tracker Goals Client - HTTP access to the goals REST API.
//!
//! This crate provides [`GoalsClient`], which implements
//! [`team_tracker_core::goals::GoalClientTrait`] so it can be injected into
//! the goal list controller.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use team_tracker_core::goals::GoalListService;
//! use team_tracker_goals_client::GoalsClient;
//!
//! let client = GoalsClient::new("http://localhost:5000/api")?;
//! let mut goals = GoalListService::new(Arc::new(client));
//! goals.load().await?;
//! ```

mod client;
mod error;

pub use client::GoalsClient;
pub use error::{GoalClientError, Result, NO_RESPONSE_MESSAGE};
