//! Personal Task Board Component
//!
//! Four bucket columns derived from the store's personal tasks, plus the
//! sort selector and the add button.

use chrono::Local;
use leptos::prelude::*;

use crate::models::Task;
use crate::schedule::{bucket_for, sorted, Bucket, SortCriterion};
use crate::store::{use_app_store, AppStateStoreFields};

use super::TaskItem;

#[component]
pub fn TaskBoard(
    #[prop(into)] pending_toggle: Signal<Option<u32>>,
    #[prop(into)] on_add: Callback<()>,
    #[prop(into)] on_toggle: Callback<Task>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<Task>,
) -> impl IntoView {
    let store = use_app_store();

    let ordered = Memo::new(move |_| {
        let criterion = *store.sort().read();
        sorted(&store.todos().read(), criterion)
    });

    let in_bucket = move |bucket: Bucket| {
        Memo::new(move |_| {
            let today = Local::now().date_naive();
            ordered
                .get()
                .into_iter()
                .filter(|t| bucket_for(t, today) == bucket)
                .collect::<Vec<_>>()
        })
    };
    let week = in_bucket(Bucket::Week);
    let month = in_bucket(Bucket::Month);
    let later = in_bucket(Bucket::Later);
    let done = in_bucket(Bucket::Done);

    view! {
        <div class="task-board">
            <div class="board-toolbar">
                <button class="add-btn" on:click=move |_| on_add.run(())>
                    "+ Add Task"
                </button>
                <select
                    class="sort-select"
                    prop:value=move || store.sort().read().key()
                    on:change=move |ev| {
                        *store.sort().write() = SortCriterion::from_key(&event_target_value(&ev));
                    }
                >
                    <option value="">"Sort: default"</option>
                    <option value="dateAdded">"Date added"</option>
                    <option value="dueDate">"Due date"</option>
                    <option value="priority">"Priority"</option>
                </select>
            </div>
            <div class="bucket-columns">
                <BucketColumn title="This Week" tasks=week pending_toggle on_toggle on_edit on_delete />
                <BucketColumn title="This Month" tasks=month pending_toggle on_toggle on_edit on_delete />
                <BucketColumn title="Later" tasks=later pending_toggle on_toggle on_edit on_delete />
                <BucketColumn title="Done" tasks=done pending_toggle on_toggle on_edit on_delete />
            </div>
        </div>
    }
}

#[component]
fn BucketColumn(
    title: &'static str,
    tasks: Memo<Vec<Task>>,
    #[prop(into)] pending_toggle: Signal<Option<u32>>,
    #[prop(into)] on_toggle: Callback<Task>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<Task>,
) -> impl IntoView {
    view! {
        <section class="bucket-column">
            <h2>{title}</h2>
            <ul class="task-list">
                <For
                    each=move || tasks.get()
                    key=|t| (t.id, t.checked, t.text.clone(), t.date.clone(), t.priority.clone())
                    children=move |task| {
                        view! {
                            <TaskItem task pending_toggle on_toggle on_edit on_delete />
                        }
                    }
                />
            </ul>
        </section>
    }
}
