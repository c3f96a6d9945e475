//! Toast Component
//!
//! Bottom-corner notification. Deletion toasts carry an Undo button for
//! as long as they are visible; once the toast dismisses or is replaced
//! by any other message, the undo buffer is dropped. Undo re-creates the
//! snapshot through the API; the server assigns a fresh ID.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{lists, tasks, tasks::TaskDraft};
use crate::context::{use_app_context, ToastState};
use crate::models::TaskScope;
use crate::store::{store_push_list, store_push_task, use_app_store, AppStateStoreFields, UndoEntry};

/// Undo is offered only while the deletion toast itself is on screen
fn undo_available(toast: Option<&ToastState>, has_entry: bool) -> bool {
    has_entry && toast.is_some_and(|t| t.with_undo)
}

#[component]
pub fn Toast() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    // once the deletion toast is gone the buffered entity is unreachable
    Effect::new(move |_| {
        let undo_visible = ctx.toast.read().as_ref().is_some_and(|t| t.with_undo);
        if !undo_visible {
            store.undo().write().take();
        }
    });

    let undo = move |_| {
        let Some(entry) = store.undo().write().take() else {
            return;
        };
        spawn_local(async move {
            let result = match entry {
                UndoEntry::Task(task) => tasks::create(TaskScope::Personal, &TaskDraft::from(&task))
                    .await
                    .map(|created| {
                        store_push_task(&store, TaskScope::Personal, created);
                    }),
                UndoEntry::CollabTask { list_id, task } => {
                    let scope = TaskScope::Collaborative(list_id);
                    tasks::create(scope, &TaskDraft::from(&task))
                        .await
                        .map(|created| {
                            let still_open = store
                                .open_list()
                                .read()
                                .as_ref()
                                .is_some_and(|l| l.id == list_id);
                            if still_open {
                                store_push_task(&store, scope, created);
                            }
                        })
                }
                UndoEntry::List { name } => lists::create(&name).await.map(|created| {
                    store_push_list(&store, created);
                }),
            };
            match result {
                Ok(()) => {
                    ctx.refresh_calendar();
                    ctx.hide_toast();
                }
                Err(err) => ctx.show_toast(err.to_string()),
            }
        });
    };

    view! {
        {move || ctx.toast.get().map(|toast| {
            view! {
                <div class="toast">
                    <span>{toast.message}</span>
                    <Show when=move || {
                        undo_available(
                            ctx.toast.read().as_ref(),
                            store.undo().read().is_some(),
                        )
                    }>
                        <button class="undo-btn" on:click=undo>"Undo"</button>
                    </Show>
                    <button class="toast-close" on:click=move |_| {
                        ctx.hide_toast();
                    }>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(with_undo: bool) -> ToastState {
        ToastState {
            seq: 1,
            message: "Task \"a\" deleted.".to_string(),
            with_undo,
        }
    }

    #[test]
    fn undo_shows_only_on_a_visible_deletion_toast() {
        assert!(undo_available(Some(&toast(true)), true));
        // dismissed toast: a lingering buffer entry is not reachable
        assert!(!undo_available(None, true));
        // a later error toast must not expose the stale entry
        assert!(!undo_available(Some(&toast(false)), true));
        // deletion toast visible but buffer already consumed
        assert!(!undo_available(Some(&toast(true)), false));
    }
}
