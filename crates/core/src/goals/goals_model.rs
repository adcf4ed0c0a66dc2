//! Goals domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};

/// Progress of a goal. Closed set; new goals start as `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl GoalStatus {
    pub const ALL: [GoalStatus; 3] = [
        GoalStatus::NotStarted,
        GoalStatus::InProgress,
        GoalStatus::Completed,
    ];

    /// Wire representation, e.g. `NOT_STARTED`.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "NOT_STARTED",
            GoalStatus::InProgress => "IN_PROGRESS",
            GoalStatus::Completed => "COMPLETED",
        }
    }

    /// Display label used in the goal table.
    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "NOT STARTED",
            GoalStatus::InProgress => "IN PROGRESS",
            GoalStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = Error;

    /// Accepts the wire name in any case, with `-` or spaces in place of `_`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        GoalStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown goal status '{}'",
                    s
                )))
            })
    }
}

/// Domain model representing a persisted goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Server-assigned identifier. Never changes once assigned.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: GoalStatus,
}

/// Goal-shaped payload without an identifier, as produced by the goal form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub status: GoalStatus,
}

/// Input model for creating a new goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
}

impl GoalDraft {
    /// Rejects a draft whose title is blank.
    pub fn validate(&self) -> Result<()> {
        require_title(&self.title)
    }
}

impl NewGoal {
    /// Validates the new goal data.
    pub fn validate(&self) -> Result<()> {
        require_title(&self.title)
    }
}

fn require_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "title".to_string(),
        )));
    }
    Ok(())
}

impl From<GoalDraft> for NewGoal {
    fn from(draft: GoalDraft) -> Self {
        NewGoal {
            title: draft.title,
            description: non_empty(draft.description.as_deref()).map(str::to_string),
            due_date: draft.due_date,
            status: Some(draft.status),
        }
    }
}

/// Partial update for an existing goal. Absent fields are left untouched and
/// are not sent over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
}

impl GoalUpdate {
    /// Builds an update holding only the fields of `draft` that differ from
    /// `existing`. An empty description and a missing one compare equal.
    pub fn between(existing: &Goal, draft: &GoalDraft) -> Self {
        let description = if non_empty(draft.description.as_deref())
            != non_empty(existing.description.as_deref())
        {
            Some(draft.description.clone().unwrap_or_default())
        } else {
            None
        };

        GoalUpdate {
            title: (draft.title != existing.title).then(|| draft.title.clone()),
            description,
            due_date: (draft.due_date != existing.due_date).then_some(draft.due_date),
            status: (draft.status != existing.status).then_some(draft.status),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
    }

    /// Returns `goal` with the fields of this update applied verbatim.
    /// The identifier is never touched.
    pub fn apply_to(&self, goal: &Goal) -> Goal {
        let mut updated = goal.clone();
        if let Some(title) = &self.title {
            updated.title = title.clone();
        }
        if let Some(description) = &self.description {
            updated.description = non_empty(Some(description)).map(str::to_string);
        }
        if let Some(due_date) = self.due_date {
            updated.due_date = due_date;
        }
        if let Some(status) = self.status {
            updated.status = status;
        }
        updated
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
