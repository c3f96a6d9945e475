//! Task Item Component
//!
//! One row of a task board: checkbox, text, due date, priority badge,
//! edit and delete buttons. The checkbox never flips locally; clicking it
//! asks the parent to open the done-confirmation, and the row shows a
//! pending style until the user decides.

use leptos::prelude::*;

use crate::models::Task;
use crate::schedule::due_datetime;

/// Rendering state of a task's checkbox
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CheckState {
    Unchecked,
    Checked,
    /// Confirmation modal is open for this task; checkbox keeps its
    /// stored value but the row is styled as pending
    PendingConfirm,
}

pub fn check_state(checked: bool, pending: bool) -> CheckState {
    if pending {
        CheckState::PendingConfirm
    } else if checked {
        CheckState::Checked
    } else {
        CheckState::Unchecked
    }
}

fn priority_class(priority: &str) -> &'static str {
    match priority {
        "High" => "high-priority",
        "Low" => "low-priority",
        _ => "mid-priority",
    }
}

fn due_label(date: &str) -> Option<String> {
    due_datetime(date).map(|dt| {
        if date.contains('T') {
            dt.format("%b %-d, %-I:%M %p").to_string()
        } else {
            dt.format("%b %-d").to_string()
        }
    })
}

#[component]
pub fn TaskItem(
    task: Task,
    #[prop(into)] pending_toggle: Signal<Option<u32>>,
    #[prop(into)] on_toggle: Callback<Task>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<Task>,
) -> impl IntoView {
    let task_id = task.id;
    let state = Memo::new(move |_| {
        pending_toggle.get().filter(|id| *id == task_id).is_some()
    });

    let row_class = {
        let checked = task.checked;
        move || {
            let mut class = String::from("task-item");
            if checked {
                class.push_str(" checked");
            }
            if matches!(check_state(checked, state.get()), CheckState::PendingConfirm) {
                class.push_str(" pending-confirm");
            }
            class
        }
    };

    let toggle_task = task.clone();
    let edit_task = task.clone();
    let delete_task = task.clone();
    let due = due_label(&task.date);

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                prop:checked=task.checked
                on:click=move |ev| {
                    ev.prevent_default();
                    on_toggle.run(toggle_task.clone());
                }
            />
            <span class="task-text">{task.text.clone()}</span>
            {due.map(|d| view! { <span class="task-due">{d}</span> })}
            <span class=format!("priority-badge {}", priority_class(&task.priority))>
                {task.priority.clone()}
            </span>
            <button class="edit-btn" on:click=move |_| on_edit.run(edit_task.clone())>
                "Edit"
            </button>
            <button class="delete-btn" on:click=move |_| on_delete.run(delete_task.clone())>
                "×"
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_wins_over_stored_value() {
        assert_eq!(check_state(false, false), CheckState::Unchecked);
        assert_eq!(check_state(true, false), CheckState::Checked);
        assert_eq!(check_state(false, true), CheckState::PendingConfirm);
        assert_eq!(check_state(true, true), CheckState::PendingConfirm);
    }

    #[test]
    fn due_labels() {
        assert_eq!(due_label(""), None);
        assert_eq!(due_label("2024-03-05"), Some("Mar 5".to_string()));
        assert_eq!(
            due_label("2024-03-05T14:30"),
            Some("Mar 5, 2:30 PM".to_string())
        );
    }
}
