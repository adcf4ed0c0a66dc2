pub mod commands;
pub mod config;
pub mod table;
mod main_lib;

pub use main_lib::{build_goal_list, init_tracing};
