//! Goal form state machine.
//!
//! The form is either closed or open for a target (a new goal, or an existing
//! goal being edited). Field edits are only accepted while open, and a
//! successful submit always closes the form before the submission reaches the
//! list controller.

use chrono::{NaiveDate, Utc};
use log::debug;

use crate::constants::DUE_DATE_FORMAT;
use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalDraft, GoalStatus};

/// Whether an open form creates or edits a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// What an open form submits against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    Add,
    /// The goal as it was when the form opened. Its id identifies the list
    /// entry to reconcile after the update.
    Edit(Goal),
}

impl FormTarget {
    pub fn mode(&self) -> FormMode {
        match self {
            FormTarget::Add => FormMode::Add,
            FormTarget::Edit(_) => FormMode::Edit,
        }
    }
}

/// Current values of the form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalFormFields {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub status: GoalStatus,
}

impl GoalFormFields {
    /// Add-mode defaults: empty text, `today` as due date, not started.
    pub fn defaults(today: NaiveDate) -> Self {
        GoalFormFields {
            title: String::new(),
            description: String::new(),
            due_date: Some(today),
            status: GoalStatus::NotStarted,
        }
    }

    /// Pre-fills from `goal`, falling back to add-mode defaults for anything
    /// the goal leaves empty.
    pub fn from_goal(goal: &Goal, today: NaiveDate) -> Self {
        let defaults = Self::defaults(today);
        GoalFormFields {
            title: goal.title.clone(),
            description: goal.description.clone().unwrap_or(defaults.description),
            due_date: Some(goal.due_date),
            status: goal.status,
        }
    }
}

/// A validated submission, handed from the form to the list controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub target: FormTarget,
    pub draft: GoalDraft,
}

impl FormSubmission {
    pub fn mode(&self) -> FormMode {
        self.target.mode()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GoalForm {
    #[default]
    Closed,
    Open {
        target: FormTarget,
        fields: GoalFormFields,
    },
}

impl GoalForm {
    pub fn new() -> Self {
        GoalForm::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, GoalForm::Open { .. })
    }

    pub fn mode(&self) -> Option<FormMode> {
        self.target().map(FormTarget::mode)
    }

    pub fn target(&self) -> Option<&FormTarget> {
        match self {
            GoalForm::Open { target, .. } => Some(target),
            GoalForm::Closed => None,
        }
    }

    pub fn fields(&self) -> Option<&GoalFormFields> {
        match self {
            GoalForm::Open { fields, .. } => Some(fields),
            GoalForm::Closed => None,
        }
    }

    /// Opens for a new goal with fresh defaults, discarding any previous
    /// session.
    pub fn open_add(&mut self) {
        self.open_add_on(today());
    }

    /// Same as [`GoalForm::open_add`] with an explicit current date.
    pub fn open_add_on(&mut self, today: NaiveDate) {
        debug!("Opening goal form in add mode");
        *self = GoalForm::Open {
            target: FormTarget::Add,
            fields: GoalFormFields::defaults(today),
        };
    }

    /// Opens pre-filled from `goal` for editing.
    pub fn open_edit(&mut self, goal: Goal) {
        self.open_edit_on(goal, today());
    }

    pub fn open_edit_on(&mut self, goal: Goal, today: NaiveDate) {
        debug!("Opening goal form in edit mode for goal {}", goal.id);
        let fields = GoalFormFields::from_goal(&goal, today);
        *self = GoalForm::Open {
            target: FormTarget::Edit(goal),
            fields,
        };
    }

    /// Closes without submitting. Entered values are dropped.
    pub fn close(&mut self) {
        *self = GoalForm::Closed;
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.fields_mut()?.title = title.into();
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<()> {
        self.fields_mut()?.description = description.into();
        Ok(())
    }

    /// Sets the due date from `YYYY-MM-DD` input. Blank input clears it.
    pub fn set_due_date(&mut self, value: &str) -> Result<()> {
        let value = value.trim();
        let due_date = if value.is_empty() {
            None
        } else {
            Some(NaiveDate::parse_from_str(value, DUE_DATE_FORMAT)?)
        };
        self.fields_mut()?.due_date = due_date;
        Ok(())
    }

    pub fn set_status(&mut self, status: GoalStatus) -> Result<()> {
        self.fields_mut()?.status = status;
        Ok(())
    }

    /// Packages the current fields into a full goal-shaped draft and closes
    /// the form.
    ///
    /// Fails without closing when the form is not open or when `title` or
    /// `dueDate` is missing.
    pub fn submit(&mut self) -> Result<FormSubmission> {
        let GoalForm::Open { target, fields } = &*self else {
            return Err(Error::InvalidState("goal form is not open".to_string()));
        };

        if fields.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }
        let due_date = fields
            .due_date
            .ok_or_else(|| ValidationError::MissingField("dueDate".to_string()))?;

        let description = if fields.description.is_empty() {
            None
        } else {
            Some(fields.description.clone())
        };
        let submission = FormSubmission {
            target: target.clone(),
            draft: GoalDraft {
                title: fields.title.clone(),
                description,
                due_date,
                status: fields.status,
            },
        };

        *self = GoalForm::Closed;
        Ok(submission)
    }

    fn fields_mut(&mut self) -> Result<&mut GoalFormFields> {
        match self {
            GoalForm::Open { fields, .. } => Ok(fields),
            GoalForm::Closed => Err(Error::InvalidState("goal form is not open".to_string())),
        }
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
