use log::{debug, error, warn};
use std::sync::Arc;

use crate::errors::Result;
use crate::goals::goals_form::{FormSubmission, FormTarget};
use crate::goals::goals_model::{Goal, GoalDraft, GoalStatus, GoalUpdate, NewGoal};
use crate::goals::goals_traits::GoalClientTrait;

/// Holds the in-memory goal list and keeps it in step with the server.
///
/// The list only changes after a remote call succeeds. Failed calls are
/// logged, returned to the caller, and leave the list as it was (except
/// `load`, which empties it).
pub struct GoalListService {
    client: Arc<dyn GoalClientTrait>,
    goals: Vec<Goal>,
}

impl GoalListService {
    pub fn new(client: Arc<dyn GoalClientTrait>) -> Self {
        GoalListService {
            client,
            goals: Vec::new(),
        }
    }

    /// Goals in fetch/insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, goal_id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == goal_id)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Replaces the local list with the server's full collection.
    pub async fn load(&mut self) -> Result<()> {
        self.load_filtered(None).await
    }

    /// Replaces the local list with the server's collection, filtered by
    /// `status` on the server side when given.
    pub async fn load_filtered(&mut self, status: Option<GoalStatus>) -> Result<()> {
        match self.client.list_goals(status).await {
            Ok(goals) => {
                debug!("Loaded {} goals", goals.len());
                self.goals = goals;
                Ok(())
            }
            Err(e) => {
                error!("Failed to load goals: {}", e);
                self.goals.clear();
                Err(e)
            }
        }
    }

    /// Sends a form submission to the server and reconciles the result.
    ///
    /// Returns the goal as it now appears in the list.
    pub async fn submit(&mut self, submission: FormSubmission) -> Result<Goal> {
        match submission.target {
            FormTarget::Add => self.create(submission.draft).await,
            FormTarget::Edit(target) => self.update(&target, &submission.draft).await,
        }
    }

    /// Deletes a goal on the server, then drops it from the list.
    pub async fn remove(&mut self, goal_id: &str) -> Result<()> {
        if let Err(e) = self.client.delete_goal(goal_id).await {
            error!("Failed to delete goal {}: {}", goal_id, e);
            return Err(e);
        }
        self.goals.retain(|g| g.id != goal_id);
        debug!("Deleted goal {}", goal_id);
        Ok(())
    }

    async fn create(&mut self, draft: GoalDraft) -> Result<Goal> {
        let new_goal = NewGoal::from(draft);
        new_goal.validate()?;

        match self.client.create_goal(new_goal).await {
            Ok(goal) => {
                debug!("Created goal {}", goal.id);
                self.goals.push(goal.clone());
                Ok(goal)
            }
            Err(e) => {
                error!("Failed to create goal: {}", e);
                Err(e)
            }
        }
    }

    async fn update(&mut self, target: &Goal, draft: &GoalDraft) -> Result<Goal> {
        draft.validate()?;

        // Diff against the form's target, not the list entry: fields the
        // user left alone must not be sent.
        let changes = GoalUpdate::between(target, draft);
        let existing = self.get(&target.id).cloned().unwrap_or_else(|| target.clone());
        if changes.is_empty() {
            debug!("No changes for goal {}, skipping update", existing.id);
            return Ok(existing);
        }

        let echo = match self.client.update_goal(&existing.id, changes.clone()).await {
            Ok(echo) => echo,
            Err(e) => {
                error!("Failed to update goal {}: {}", existing.id, e);
                return Err(e);
            }
        };

        let reconciled = reconcile_update(&existing, &changes, echo);
        match self.goals.iter_mut().find(|g| g.id == existing.id) {
            Some(entry) => *entry = reconciled.clone(),
            None => warn!("Updated goal {} is not in the local list", existing.id),
        }
        Ok(reconciled)
    }
}

/// Decides what a goal looks like locally after a successful update.
///
/// A server echo is the system of record for every mutable field. Without an
/// echo, `submitted` is assumed applied verbatim and all other fields keep
/// their previous values. The id always stays `existing.id`.
pub fn reconcile_update(existing: &Goal, submitted: &GoalUpdate, echo: Option<Goal>) -> Goal {
    match echo {
        Some(echoed) => {
            if echoed.id != existing.id {
                warn!(
                    "Server echoed goal id {} for update of {}, keeping local id",
                    echoed.id, existing.id
                );
            }
            Goal {
                id: existing.id.clone(),
                ..echoed
            }
        }
        None => submitted.apply_to(existing),
    }
}
