//! Plain-text rendering of a board for `kb board show --text`.

use kb_core::{Project, Task};
use kb_services::KanbanBoard;

use std::fmt::Write;

/// Render the selected worksheet as one section per column, in column
/// order, listing each task on its own line.
pub fn render_board(project: &Project, board: &KanbanBoard) -> String {
    let mut out = String::new();

    let worksheet = board
        .selected_worksheet()
        .map(|w| w.title.as_str())
        .unwrap_or("(no worksheet)");
    let heading = format!("{} / {}", project.name, worksheet);
    let _ = writeln!(out, "{heading}");
    let _ = writeln!(out, "{}", "=".repeat(heading.chars().count()));

    for lane in board.tasks_by_status() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} [{}] ({})",
            lane.column.title,
            lane.status(),
            lane.len()
        );

        if lane.is_empty() {
            let _ = writeln!(out, "  (empty)");
        }
        for task in &lane.tasks {
            let _ = writeln!(out, "  - {}", task_line(task));
        }
    }

    out
}

fn task_line(task: &Task) -> String {
    let mut line = format!("{} [{}]", task.title, task.priority);
    if let Some(due) = task.due_date {
        let _ = write!(line, " due {due}");
    }
    if let Some(assignee) = &task.assignee {
        let _ = write!(line, " @{assignee}");
    }
    if !task.comments.is_empty() {
        let _ = write!(line, " ({} comments)", task.comments.len());
    }
    let id = task.id.to_string();
    let _ = write!(line, "  #{}", &id[..8]);
    line
}
