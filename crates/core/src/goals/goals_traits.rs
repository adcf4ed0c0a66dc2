use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalStatus, GoalUpdate, NewGoal};
use async_trait::async_trait;

/// Remote goal operations, injected into the list controller.
///
/// Implementations normalize every transport failure into
/// [`crate::Error::Remote`] with a readable message.
#[async_trait]
pub trait GoalClientTrait: Send + Sync {
    /// Fetches all goals, optionally filtered server-side by status.
    async fn list_goals(&self, status: Option<GoalStatus>) -> Result<Vec<Goal>>;

    /// Creates a goal and returns it with its server-assigned id.
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;

    /// Sends only the changed fields. `None` means the server answered
    /// without a body.
    async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<Option<Goal>>;

    async fn delete_goal(&self, goal_id: &str) -> Result<()>;
}
