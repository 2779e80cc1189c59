//! Plain-text rendering of the screen.

use std::fmt::Write as _;

use todo_core::ScreenView;
use todo_core::domain::EditState;

/// Completed titles are drawn as `~~title~~`, the row under edit gets a `>`.
pub fn render(view: &ScreenView) -> String {
    let mut out = String::new();

    if view.rows.is_empty() {
        out.push_str("  (no tasks)\n");
    }
    for row in &view.rows {
        let marker = if row.editing { '>' } else { ' ' };
        let check = if row.completed { 'x' } else { ' ' };
        let title = if row.completed {
            format!("~~{}~~", row.title)
        } else {
            row.title.clone()
        };
        let _ = writeln!(out, "{marker}{:>3}. [{check}] {title}", row.ordinal);
    }

    let _ = writeln!(out, "{}", "-".repeat(32));
    let mode = match view.mode {
        EditState::Idle => "new task",
        EditState::Editing { .. } => "editing",
    };
    let _ = writeln!(out, "{mode}: \"{}\"", view.input);

    let buttons: Vec<String> = view.actions.iter().map(|a| format!("[{a}]")).collect();
    let _ = writeln!(
        out,
        "{}    ({}/{} done)",
        buttons.join(" "),
        view.completed_count(),
        view.rows.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::Action;
    use todo_core::app::RowView;
    use todo_core::domain::TaskId;

    fn row(ordinal: usize, title: &str, completed: bool, editing: bool) -> RowView {
        RowView {
            ordinal,
            id: TaskId::new(ordinal as i64),
            title: title.to_string(),
            completed,
            editing,
        }
    }

    #[test]
    fn renders_idle_screen() {
        let view = ScreenView {
            rows: vec![row(1, "walk dog", false, false), row(2, "buy milk", true, false)],
            input: String::new(),
            mode: EditState::Idle,
            actions: vec![Action::Add],
        };

        let text = render(&view);
        assert!(text.contains("   1. [ ] walk dog\n"));
        assert!(text.contains("   2. [x] ~~buy milk~~\n"));
        assert!(text.contains("new task: \"\""));
        assert!(text.contains("[Add]"));
        assert!(text.contains("(1/2 done)"));
    }

    #[test]
    fn marks_row_under_edit() {
        let view = ScreenView {
            rows: vec![row(1, "buy milk", false, true)],
            input: "buy bread".to_string(),
            mode: EditState::Editing {
                target: 0,
                dirty: true,
            },
            actions: vec![Action::Save, Action::Cancel],
        };

        let text = render(&view);
        assert!(text.starts_with(">  1. [ ] buy milk\n"));
        assert!(text.contains("editing: \"buy bread\""));
        assert!(text.contains("[Save] [Cancel]"));
    }

    #[test]
    fn empty_list_has_placeholder() {
        let view = ScreenView {
            rows: vec![],
            input: String::new(),
            mode: EditState::Idle,
            actions: vec![Action::Add],
        };
        assert!(render(&view).starts_with("  (no tasks)\n"));
    }
}
