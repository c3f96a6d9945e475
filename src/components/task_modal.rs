//! Task Modal Component
//!
//! Add/edit dialog for a task: name, optional date, optional time,
//! priority. The same form serves both scopes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::tasks::{self, TaskDraft, TaskEdit};
use crate::context::use_app_context;
use crate::models::{Task, TaskScope};
use crate::store::{store_push_task, store_update_task, use_app_store};
use crate::validate::{combine_date_time, split_date_time};

use super::{MessageSlot, StatusMessage};

const PRIORITIES: &[&str] = &["High", "Mid", "Low"];

/// The select can only display the three known priorities, so anything
/// else prefills as Mid rather than silently keeping a value the form
/// never shows.
fn form_priority(priority: &str) -> String {
    if PRIORITIES.contains(&priority) {
        priority.to_string()
    } else {
        "Mid".to_string()
    }
}

#[component]
pub fn TaskModal(
    scope: TaskScope,
    editing: Option<Task>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let slot = MessageSlot::new();

    let edit_id = editing.as_ref().map(|t| t.id);
    let (initial_date, initial_time) = editing
        .as_ref()
        .map(|t| split_date_time(&t.date))
        .unwrap_or_default();

    let (text, set_text) = signal(editing.as_ref().map(|t| t.text.clone()).unwrap_or_default());
    let (date, set_date) = signal(initial_date);
    let (time, set_time) = signal(initial_time);
    let (priority, set_priority) = signal(
        editing
            .as_ref()
            .map(|t| form_priority(&t.priority))
            .unwrap_or_else(|| "Mid".to_string()),
    );
    let (busy, set_busy) = signal(false);

    let title = if edit_id.is_some() { "Edit Task" } else { "Add Task" };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = text.get().trim().to_string();
        if text.is_empty() {
            slot.error("Please enter a task name.");
            return;
        }
        let date = combine_date_time(&date.get(), &time.get());
        let priority = priority.get();
        set_busy.set(true);
        spawn_local(async move {
            let result = match edit_id {
                Some(task_id) => {
                    tasks::update(scope, task_id, &TaskEdit { text, date, priority })
                        .await
                        .map(|task| store_update_task(&store, scope, task))
                }
                None => {
                    let draft = TaskDraft {
                        text,
                        date,
                        checked: false,
                        priority,
                    };
                    tasks::create(scope, &draft)
                        .await
                        .map(|task| store_push_task(&store, scope, task))
                }
            };
            set_busy.set(false);
            match result {
                Ok(()) => {
                    ctx.refresh_calendar();
                    on_close.run(());
                }
                Err(err) => slot.error(err.to_string()),
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h3>{title}</h3>
                <form on:submit=submit>
                    <input
                        type="text"
                        placeholder="Task name"
                        prop:value=move || text.get()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                    />
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                    />
                    <input
                        type="time"
                        prop:value=move || time.get()
                        on:input=move |ev| set_time.set(event_target_value(&ev))
                    />
                    <select
                        prop:value=move || priority.get()
                        on:change=move |ev| set_priority.set(event_target_value(&ev))
                    >
                        {PRIORITIES
                            .iter()
                            .map(|p| view! { <option value=*p>{*p}</option> })
                            .collect_view()}
                    </select>
                    <StatusMessage msg_slot=slot />
                    <div class="modal-actions">
                        <button type="submit" class="confirm-btn" disabled=move || busy.get()>
                            "Save"
                        </button>
                        <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_priorities_prefill_as_mid() {
        assert_eq!(form_priority("High"), "High");
        assert_eq!(form_priority("Mid"), "Mid");
        assert_eq!(form_priority("Low"), "Low");
        assert_eq!(form_priority("Urgent"), "Mid");
        assert_eq!(form_priority(""), "Mid");
    }
}
