// commands.rs: goal subcommands.

use clap::Subcommand;
use team_tracker_core::goals::{GoalForm, GoalListService, GoalStatus};
use team_tracker_core::Error;

use crate::table::render_goal_table;

#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// List goals as a table.
    List {
        /// Only show goals with this status (e.g., "in_progress").
        #[arg(long)]
        status: Option<GoalStatus>,
    },
    /// Add a new goal.
    Add {
        /// Goal title.
        #[arg(long)]
        title: String,
        /// Optional longer description.
        #[arg(long)]
        description: Option<String>,
        /// Due date as YYYY-MM-DD (defaults to today).
        #[arg(long)]
        due: Option<String>,
        /// Initial status (defaults to not_started).
        #[arg(long)]
        status: Option<GoalStatus>,
    },
    /// Edit an existing goal. Only the given fields change.
    Edit {
        /// Goal ID.
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Due date as YYYY-MM-DD.
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        status: Option<GoalStatus>,
    },
    /// Delete a goal.
    Delete {
        /// Goal ID.
        id: String,
    },
}

/// Field values given on the command line; `None` keeps the form's value.
struct FieldArgs<'a> {
    title: Option<&'a str>,
    description: Option<&'a str>,
    due: Option<&'a str>,
    status: Option<GoalStatus>,
}

impl FieldArgs<'_> {
    fn apply(&self, form: &mut GoalForm) -> team_tracker_core::Result<()> {
        if let Some(title) = self.title {
            form.set_title(title)?;
        }
        if let Some(description) = self.description {
            form.set_description(description)?;
        }
        if let Some(due) = self.due {
            form.set_due_date(due)?;
        }
        if let Some(status) = self.status {
            form.set_status(status)?;
        }
        Ok(())
    }
}

/// Runs one command against the goal list and returns what to print.
pub async fn execute(cmd: &GoalCommands, goals: &mut GoalListService) -> anyhow::Result<String> {
    match cmd {
        GoalCommands::List { status } => {
            goals.load_filtered(*status).await?;
            Ok(render_goal_table(goals.goals()))
        }
        GoalCommands::Add {
            title,
            description,
            due,
            status,
        } => {
            let fields = FieldArgs {
                title: Some(title.as_str()),
                description: description.as_deref(),
                due: due.as_deref(),
                status: *status,
            };
            add_goal(goals, &fields).await
        }
        GoalCommands::Edit {
            id,
            title,
            description,
            due,
            status,
        } => {
            let fields = FieldArgs {
                title: title.as_deref(),
                description: description.as_deref(),
                due: due.as_deref(),
                status: *status,
            };
            edit_goal(goals, id, &fields).await
        }
        GoalCommands::Delete { id } => {
            goals.remove(id).await?;
            Ok(format!("Goal deleted: {}\n", id))
        }
    }
}

async fn add_goal(goals: &mut GoalListService, fields: &FieldArgs<'_>) -> anyhow::Result<String> {
    let mut form = GoalForm::new();
    form.open_add();
    fields.apply(&mut form)?;

    let goal = goals.submit(form.submit()?).await?;
    Ok(format!(
        "Goal created: {}\n{}",
        goal.id,
        render_goal_table(std::slice::from_ref(&goal))
    ))
}

async fn edit_goal(
    goals: &mut GoalListService,
    goal_id: &str,
    fields: &FieldArgs<'_>,
) -> anyhow::Result<String> {
    goals.load().await?;
    let target = goals
        .get(goal_id)
        .cloned()
        .ok_or_else(|| Error::NotFound(goal_id.to_string()))?;

    let mut form = GoalForm::new();
    form.open_edit(target);
    fields.apply(&mut form)?;

    let goal = goals.submit(form.submit()?).await?;
    Ok(format!(
        "Goal updated: {}\n{}",
        goal.id,
        render_goal_table(std::slice::from_ref(&goal))
    ))
}
