//! Application Shell
//!
//! Path-based page dispatch plus the board page that wires the store,
//! context, boards, calendar, toast, and the single active modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, lists, tasks};
use crate::components::{
    navigate, CalendarPanel, CollabBoard, ConfirmModal, ForgotPasswordPage, ListNameModal,
    LoginPage, MembersModal, SettingsPage, TaskBoard, TaskModal, Toast,
};
use crate::context::AppContext;
use crate::models::{CollaborativeList, Task, TaskScope};
use crate::store::{
    store_push_list, store_remove_list, store_remove_task, store_update_list, store_update_task,
    AppState, AppStateStoreFields, AppStore, UndoEntry,
};
use crate::validate::avatar_initial;

/// The one dialog that may be open. Opening another closes this one.
#[derive(Clone, Debug, Default)]
pub enum ActiveModal {
    #[default]
    None,
    AddTask(TaskScope),
    EditTask(TaskScope, Task),
    DeleteTask(TaskScope, Task),
    ToggleTask(TaskScope, Task),
    CreateList,
    RenameList(CollaborativeList),
    DeleteList(CollaborativeList),
    Members(CollaborativeList),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ViewMode {
    Personal,
    Collaborative,
}

#[component]
pub fn App() -> impl IntoView {
    let path = window().location().pathname().unwrap_or_default();
    match path.trim_end_matches('/') {
        "" | "/login" => view! { <LoginPage /> }.into_any(),
        "/forgotpassword" => view! { <ForgotPasswordPage /> }.into_any(),
        "/settings" => view! { <SettingsPage /> }.into_any(),
        _ => view! { <BoardPage /> }.into_any(),
    }
}

#[component]
fn BoardPage() -> impl IntoView {
    let store: AppStore = reactive_stores::Store::new(AppState::default());
    let ctx = AppContext::new();
    provide_context(store);
    provide_context(ctx);

    let (mode, set_mode) = signal(ViewMode::Personal);
    let active_modal = RwSignal::new(ActiveModal::None);
    let (profile_initial, set_profile_initial) = signal("U".to_string());
    let (busy, set_busy) = signal(false);

    // initial load: personal tasks, lists, and the signed-in user
    Effect::new(move |_| {
        spawn_local(async move {
            match tasks::list(TaskScope::Personal).await {
                Ok(fetched) => *store.todos().write() = fetched,
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] loading tasks failed: {err}").into())
                }
            }
            match lists::list_all().await {
                Ok(fetched) => *store.lists().write() = fetched,
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] loading lists failed: {err}").into())
                }
            }
            match api::users::current().await {
                Ok(user) => {
                    set_profile_initial.set(avatar_initial(user.name.as_deref(), &user.username))
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] loading user failed: {err}").into())
                }
            }
            ctx.refresh_calendar();
        });
    });

    // refetch lists whenever the collaborative view is entered
    Effect::new(move |_| {
        if mode.get() != ViewMode::Collaborative {
            return;
        }
        spawn_local(async move {
            match lists::list_all().await {
                Ok(fetched) => *store.lists().write() = fetched,
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] loading lists failed: {err}").into())
                }
            }
        });
    });

    let pending_toggle = Memo::new(move |_| match active_modal.get() {
        ActiveModal::ToggleTask(_, task) => Some(task.id),
        _ => None,
    });

    let close_modal = move || active_modal.set(ActiveModal::None);

    // ========================
    // Confirm Handlers
    // ========================

    let confirm_toggle = move |scope: TaskScope, task: Task| {
        set_busy.set(true);
        spawn_local(async move {
            let result = tasks::toggle(scope, &task).await;
            set_busy.set(false);
            match result {
                Ok(updated) => {
                    store_update_task(&store, scope, updated);
                    ctx.refresh_calendar();
                }
                Err(err) => ctx.show_toast(err.to_string()),
            }
            close_modal();
        });
    };

    let confirm_delete_task = move |scope: TaskScope, task: Task| {
        set_busy.set(true);
        spawn_local(async move {
            let result = tasks::delete(scope, task.id).await;
            set_busy.set(false);
            match result {
                Ok(()) => {
                    store_remove_task(&store, scope, task.id);
                    let entry = match scope {
                        TaskScope::Personal => UndoEntry::Task(task.clone()),
                        TaskScope::Collaborative(list_id) => UndoEntry::CollabTask {
                            list_id,
                            task: task.clone(),
                        },
                    };
                    *store.undo().write() = Some(entry);
                    ctx.show_undo_toast(format!("Task \"{}\" deleted.", task.text));
                    ctx.refresh_calendar();
                }
                Err(err) => ctx.show_toast(err.to_string()),
            }
            close_modal();
        });
    };

    let confirm_create_list = move |name: String| {
        set_busy.set(true);
        spawn_local(async move {
            let result = lists::create(&name).await;
            set_busy.set(false);
            match result {
                Ok(created) => {
                    store_push_list(&store, created);
                    close_modal();
                }
                Err(err) => ctx.show_toast(err.to_string()),
            }
        });
    };

    let confirm_rename_list = move |list_id: u32, name: String| {
        set_busy.set(true);
        spawn_local(async move {
            let result = lists::rename(list_id, &name).await;
            set_busy.set(false);
            match result {
                Ok(updated) => {
                    store_update_list(&store, updated);
                    ctx.refresh_calendar();
                    close_modal();
                }
                Err(err) => ctx.show_toast(err.to_string()),
            }
        });
    };

    let confirm_delete_list = move |list: CollaborativeList| {
        set_busy.set(true);
        spawn_local(async move {
            let result = lists::delete(list.id).await;
            set_busy.set(false);
            match result {
                Ok(()) => {
                    store_remove_list(&store, list.id);
                    *store.undo().write() = Some(UndoEntry::List {
                        name: list.name.clone(),
                    });
                    ctx.show_undo_toast(format!("List \"{}\" deleted.", list.name));
                    ctx.refresh_calendar();
                }
                Err(err) => ctx.show_toast(err.to_string()),
            }
            close_modal();
        });
    };

    // ========================
    // Layout
    // ========================

    let nav_class = move |target: ViewMode| {
        if mode.get() == target {
            "nav-btn active"
        } else {
            "nav-btn"
        }
    };

    view! {
        <div class="app-shell">
            <nav class="top-nav">
                <button
                    class=move || nav_class(ViewMode::Personal)
                    on:click=move |_| set_mode.set(ViewMode::Personal)
                >
                    "Personal"
                </button>
                <button
                    class=move || nav_class(ViewMode::Collaborative)
                    on:click=move |_| set_mode.set(ViewMode::Collaborative)
                >
                    "Collaborative"
                </button>
                <button class="avatar" on:click=move |_| navigate("/settings")>
                    {move || profile_initial.get()}
                </button>
            </nav>
            <main class="board-area">
                {move || match mode.get() {
                    ViewMode::Personal => view! {
                        <TaskBoard
                            pending_toggle
                            on_add=move |_| {
                                active_modal.set(ActiveModal::AddTask(TaskScope::Personal))
                            }
                            on_toggle=move |task| {
                                active_modal
                                    .set(ActiveModal::ToggleTask(TaskScope::Personal, task))
                            }
                            on_edit=move |task| {
                                active_modal.set(ActiveModal::EditTask(TaskScope::Personal, task))
                            }
                            on_delete=move |task| {
                                active_modal
                                    .set(ActiveModal::DeleteTask(TaskScope::Personal, task))
                            }
                        />
                    }
                    .into_any(),
                    ViewMode::Collaborative => view! {
                        <CollabBoard
                            pending_toggle
                            on_create_list=move |_| active_modal.set(ActiveModal::CreateList)
                            on_rename_list=move |list| {
                                active_modal.set(ActiveModal::RenameList(list))
                            }
                            on_delete_list=move |list| {
                                active_modal.set(ActiveModal::DeleteList(list))
                            }
                            on_members=move |list| active_modal.set(ActiveModal::Members(list))
                            on_add_task=move |list_id| {
                                active_modal
                                    .set(ActiveModal::AddTask(TaskScope::Collaborative(list_id)))
                            }
                            on_toggle_task=move |(list_id, task)| {
                                active_modal
                                    .set(ActiveModal::ToggleTask(
                                        TaskScope::Collaborative(list_id),
                                        task,
                                    ))
                            }
                            on_edit_task=move |(list_id, task)| {
                                active_modal
                                    .set(ActiveModal::EditTask(
                                        TaskScope::Collaborative(list_id),
                                        task,
                                    ))
                            }
                            on_delete_task=move |(list_id, task)| {
                                active_modal
                                    .set(ActiveModal::DeleteTask(
                                        TaskScope::Collaborative(list_id),
                                        task,
                                    ))
                            }
                        />
                    }
                    .into_any(),
                }}
            </main>
            <CalendarPanel />
            <Toast />
            {move || match active_modal.get() {
                ActiveModal::None => ().into_any(),
                ActiveModal::AddTask(scope) => view! {
                    <TaskModal scope editing=None on_close=move |_| close_modal() />
                }
                .into_any(),
                ActiveModal::EditTask(scope, task) => view! {
                    <TaskModal scope editing=Some(task) on_close=move |_| close_modal() />
                }
                .into_any(),
                ActiveModal::DeleteTask(scope, task) => {
                    let body = format!("Do you want to delete \"{}\"?", task.text);
                    view! {
                        <ConfirmModal
                            title="Delete Task"
                            body=body
                            confirm_label="Delete"
                            busy
                            on_confirm=move |_| confirm_delete_task(scope, task.clone())
                            on_cancel=move |_| close_modal()
                        />
                    }
                    .into_any()
                }
                ActiveModal::ToggleTask(scope, task) => {
                    let (title, body) = if task.checked {
                        (
                            "Mark Task as Not Done",
                            "Do you want to mark this task as not done?",
                        )
                    } else {
                        ("Mark Task as Done", "Do you want to mark this task as done?")
                    };
                    view! {
                        <ConfirmModal
                            title=title
                            body=body
                            confirm_label="Confirm"
                            busy
                            on_confirm=move |_| confirm_toggle(scope, task.clone())
                            on_cancel=move |_| close_modal()
                        />
                    }
                    .into_any()
                }
                ActiveModal::CreateList => view! {
                    <ListNameModal
                        title="New List"
                        initial=""
                        busy
                        on_submit=confirm_create_list
                        on_cancel=move |_| close_modal()
                    />
                }
                .into_any(),
                ActiveModal::RenameList(list) => {
                    let list_id = list.id;
                    view! {
                        <ListNameModal
                            title="Rename List"
                            initial=list.name.clone()
                            busy
                            on_submit=move |name| confirm_rename_list(list_id, name)
                            on_cancel=move |_| close_modal()
                        />
                    }
                    .into_any()
                }
                ActiveModal::DeleteList(list) => {
                    let body = format!("Do you want to delete the list \"{}\"?", list.name);
                    view! {
                        <ConfirmModal
                            title="Delete List"
                            body=body
                            confirm_label="Delete"
                            busy
                            on_confirm=move |_| confirm_delete_list(list.clone())
                            on_cancel=move |_| close_modal()
                        />
                    }
                    .into_any()
                }
                ActiveModal::Members(list) => view! {
                    <MembersModal list on_close=move |_| close_modal() />
                }
                .into_any(),
            }}
        </div>
    }
}
