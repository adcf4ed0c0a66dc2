// table.rs: plain-text rendering of the goal list.

use team_tracker_core::goals::Goal;

const HEADERS: [&str; 5] = ["ID", "TITLE", "DESCRIPTION", "DUE DATE", "STATUS"];

/// Human-readable due date, e.g. `Jun 30, 2024`.
pub fn format_due_date(goal: &Goal) -> String {
    goal.due_date.format("%b %-d, %Y").to_string()
}

/// Renders goals as left-aligned columns, one row per goal, in list order.
pub fn render_goal_table(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "No goals yet.\n".to_string();
    }

    let rows: Vec<[String; 5]> = goals
        .iter()
        .map(|g| {
            [
                g.id.clone(),
                g.title.clone(),
                g.description.clone().unwrap_or_default(),
                format_due_date(g),
                g.status.label().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
