//! Calendar Panel Component
//!
//! Hosts the FullCalendar widget and rebuilds its events whenever tasks,
//! lists, or the explicit refresh counter change. Personal events come
//! from the store; collaborative events are fetched per list so the
//! calendar shows every list, not just the open one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::calendar::{self, personal_events, list_events, CalendarEvent};
use crate::context::use_app_context;
use crate::models::TaskScope;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::api::tasks;

#[component]
pub fn CalendarPanel() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let node = NodeRef::<leptos::html::Div>::new();
    // the widget is a JS handle, so it lives outside the reactive graph
    let widget = StoredValue::new_local(None::<calendar::Calendar>);
    let (ready, set_ready) = signal(false);

    Effect::new(move |_| {
        if widget.with_value(|w| w.is_some()) {
            return;
        }
        if let Some(el) = node.get() {
            match calendar::mount(&el) {
                Ok(cal) => {
                    widget.set_value(Some(cal));
                    set_ready.set(true);
                }
                Err(err) => web_sys::console::error_1(&err),
            }
        }
    });

    Effect::new(move |_| {
        ctx.calendar_refresh.get();
        if !ready.get() {
            return;
        }
        let mut events: Vec<CalendarEvent> = personal_events(&store.todos().read());
        let lists: Vec<(u32, String)> = store
            .lists()
            .read()
            .iter()
            .map(|l| (l.id, l.name.clone()))
            .collect();
        spawn_local(async move {
            for (list_id, name) in lists {
                match tasks::list(TaskScope::Collaborative(list_id)).await {
                    Ok(fetched) => events.extend(list_events(&name, &fetched)),
                    Err(err) => web_sys::console::error_1(
                        &format!("[CAL] list {list_id} failed: {err}").into(),
                    ),
                }
            }
            widget.with_value(|w| {
                if let Some(cal) = w {
                    cal.remove_all_events();
                    calendar::add_events(cal, &events);
                }
            });
        });
    });

    view! {
        <aside class="calendar-panel">
            <div class="calendar-host" node_ref=node></div>
        </aside>
    }
}
