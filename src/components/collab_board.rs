//! Collaborative Board Component
//!
//! List overview (open, rename, delete, manage members) and the detail
//! view for one open list, which reuses the task row component.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, tasks};
use crate::models::{CollaborativeList, Task, TaskScope};
use crate::schedule::{bucket_for, sorted, Bucket};
use crate::store::{use_app_store, AppStateStoreFields};

use super::TaskItem;

#[component]
pub fn CollabBoard(
    #[prop(into)] pending_toggle: Signal<Option<u32>>,
    #[prop(into)] on_create_list: Callback<()>,
    #[prop(into)] on_rename_list: Callback<CollaborativeList>,
    #[prop(into)] on_delete_list: Callback<CollaborativeList>,
    #[prop(into)] on_members: Callback<CollaborativeList>,
    #[prop(into)] on_add_task: Callback<u32>,
    #[prop(into)] on_toggle_task: Callback<(u32, Task)>,
    #[prop(into)] on_edit_task: Callback<(u32, Task)>,
    #[prop(into)] on_delete_task: Callback<(u32, Task)>,
) -> impl IntoView {
    let store = use_app_store();

    let open = move |list: CollaborativeList| {
        let list_id = list.id;
        *store.open_list().write() = Some(list);
        store.list_tasks().write().clear();
        spawn_local(async move {
            match tasks::list(TaskScope::Collaborative(list_id)).await {
                Ok(fetched) => *store.list_tasks().write() = fetched,
                Err(err) => web_sys::console::error_1(
                    &format!("[COLLAB] loading tasks for list {list_id} failed: {err}").into(),
                ),
            }
        });
    };

    let back = move |_| {
        *store.open_list().write() = None;
        store.list_tasks().write().clear();
        spawn_local(async move {
            match api::lists::list_all().await {
                Ok(lists) => *store.lists().write() = lists,
                Err(err) => web_sys::console::error_1(
                    &format!("[COLLAB] reloading lists failed: {err}").into(),
                ),
            }
        });
    };

    view! {
        <Show
            when=move || store.open_list().read().is_some()
            fallback=move || {
                view! {
                    <div class="collab-overview">
                        <div class="board-toolbar">
                            <button class="add-btn" on:click=move |_| on_create_list.run(())>
                                "+ New List"
                            </button>
                        </div>
                        <ul class="list-grid">
                            <For
                                each=move || store.lists().get()
                                key=|l| (l.id, l.name.clone(), l.is_owner)
                                children=move |list| {
                                    let open_list = list.clone();
                                    let rename_list = list.clone();
                                    let delete_list = list.clone();
                                    let members_list = list.clone();
                                    let owner_label = if list.is_owner {
                                        "Owner".to_string()
                                    } else {
                                        format!("by {}", list.owner)
                                    };
                                    // only owners may manage, rename, or delete
                                    let owner_actions = list.is_owner.then(|| {
                                        view! {
                                            <button on:click=move |_| {
                                                on_members.run(members_list.clone())
                                            }>
                                                "Manage"
                                            </button>
                                            <button on:click=move |_| {
                                                on_rename_list.run(rename_list.clone())
                                            }>
                                                "Rename"
                                            </button>
                                            <button
                                                class="delete-btn"
                                                on:click=move |_| {
                                                    on_delete_list.run(delete_list.clone())
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        }
                                    });
                                    view! {
                                        <li class="list-card">
                                            <span class="list-name">{list.name.clone()}</span>
                                            <span class="list-owner">{owner_label}</span>
                                            <div class="list-actions">
                                                <button on:click=move |_| open(open_list.clone())>
                                                    "Open"
                                                </button>
                                                {owner_actions}
                                            </div>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </div>
                }
            }
        >
            <ListDetail
                pending_toggle
                on_back=back
                on_add_task
                on_toggle_task
                on_edit_task
                on_delete_task
            />
        </Show>
    }
}

#[component]
fn ListDetail(
    #[prop(into)] pending_toggle: Signal<Option<u32>>,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_add_task: Callback<u32>,
    #[prop(into)] on_toggle_task: Callback<(u32, Task)>,
    #[prop(into)] on_edit_task: Callback<(u32, Task)>,
    #[prop(into)] on_delete_task: Callback<(u32, Task)>,
) -> impl IntoView {
    let store = use_app_store();

    let list_id = Memo::new(move |_| {
        store.open_list().read().as_ref().map(|l| l.id).unwrap_or(0)
    });
    let list_name = move || {
        store
            .open_list()
            .read()
            .as_ref()
            .map(|l| l.name.clone())
            .unwrap_or_default()
    };

    let ordered = Memo::new(move |_| {
        let criterion = *store.sort().read();
        sorted(&store.list_tasks().read(), criterion)
    });
    let active = Memo::new(move |_| {
        let today = Local::now().date_naive();
        ordered
            .get()
            .into_iter()
            .filter(|t| bucket_for(t, today) != Bucket::Done)
            .collect::<Vec<_>>()
    });
    let done = Memo::new(move |_| {
        ordered
            .get()
            .into_iter()
            .filter(|t| t.checked)
            .collect::<Vec<_>>()
    });

    let wrap = move |cb: Callback<(u32, Task)>| {
        Callback::new(move |task: Task| cb.run((list_id.get(), task)))
    };
    let toggle = wrap(on_toggle_task);
    let edit = wrap(on_edit_task);
    let delete = wrap(on_delete_task);

    view! {
        <div class="list-detail">
            <div class="board-toolbar">
                <button class="back-btn" on:click=move |_| on_back.run(())>
                    "← Lists"
                </button>
                <h2>{list_name}</h2>
                <button class="add-btn" on:click=move |_| on_add_task.run(list_id.get())>
                    "+ Add Task"
                </button>
            </div>
            <div class="bucket-columns">
                <section class="bucket-column">
                    <h2>"Tasks"</h2>
                    <ul class="task-list">
                        <For
                            each=move || active.get()
                            key=|t| (t.id, t.checked, t.text.clone(), t.date.clone(), t.priority.clone())
                            children=move |task| {
                                view! {
                                    <TaskItem
                                        task
                                        pending_toggle
                                        on_toggle=toggle
                                        on_edit=edit
                                        on_delete=delete
                                    />
                                }
                            }
                        />
                    </ul>
                </section>
                <section class="bucket-column">
                    <h2>"Done"</h2>
                    <ul class="task-list">
                        <For
                            each=move || done.get()
                            key=|t| (t.id, t.checked, t.text.clone(), t.date.clone(), t.priority.clone())
                            children=move |task| {
                                view! {
                                    <TaskItem
                                        task
                                        pending_toggle
                                        on_toggle=toggle
                                        on_edit=edit
                                        on_delete=delete
                                    />
                                }
                            }
                        />
                    </ul>
                </section>
            </div>
        </div>
    }
}
