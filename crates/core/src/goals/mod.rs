//! Goals module - domain models, list controller, form state, and traits.

mod goals_form;
mod goals_model;
mod goals_service;
mod goals_traits;

#[cfg(test)]
mod goals_form_tests;



pub use goals_form::{FormMode, FormSubmission, FormTarget, GoalForm, GoalFormFields};
pub use goals_model::{Goal, GoalDraft, GoalStatus, GoalUpdate, NewGoal};
pub use goals_service::{reconcile_update, GoalListService};
pub use goals_traits::GoalClientTrait;
