//! Calendar Event Derivation
//!
//! Pure derivation of calendar events from task state, plus bindings to
//! the FullCalendar browser global the page loads alongside the app.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::Task;
use crate::schedule::due_time;

/// Fixed color for collaborative-list events
pub const COLLAB_EVENT_COLOR: &str = "#3b82f6";

/// Personal events are colored by priority; a missing priority counts as Mid
pub fn priority_color(priority: &str) -> &'static str {
    match priority {
        "High" => "red",
        "Low" => "green",
        _ => "orange",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: String,
    #[serde(rename = "allDay")]
    pub all_day: bool,
    pub color: String,
}

/// Task text, suffixed with "h:mm AM/PM" when the date carries a time
pub fn event_title(text: &str, date: &str) -> String {
    match due_time(date) {
        Some(time) => format!("{} – {}", text, time.format("%-I:%M %p")),
        None => text.to_string(),
    }
}

fn dated(tasks: &[Task]) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(|t| !t.checked && !t.date.is_empty())
}

pub fn personal_events(tasks: &[Task]) -> Vec<CalendarEvent> {
    dated(tasks)
        .map(|t| CalendarEvent {
            title: event_title(&t.text, &t.date),
            start: t.date.clone(),
            all_day: true,
            color: priority_color(&t.priority).to_string(),
        })
        .collect()
}

/// Collaborative events are titled "[list name] ..." in one fixed color
pub fn list_events(list_name: &str, tasks: &[Task]) -> Vec<CalendarEvent> {
    dated(tasks)
        .map(|t| CalendarEvent {
            title: format!("[{}] {}", list_name, event_title(&t.text, &t.date)),
            start: t.date.clone(),
            all_day: true,
            color: COLLAB_EVENT_COLOR.to_string(),
        })
        .collect()
}

// ========================
// FullCalendar Bindings
// ========================

#[wasm_bindgen]
extern "C" {
    /// The widget class from the page's FullCalendar global
    #[wasm_bindgen(js_namespace = FullCalendar)]
    pub type Calendar;

    #[wasm_bindgen(constructor, js_namespace = FullCalendar)]
    fn new(el: &web_sys::Element, options: &JsValue) -> Calendar;

    #[wasm_bindgen(method)]
    fn render(this: &Calendar);

    #[wasm_bindgen(method, js_name = addEvent)]
    fn add_event(this: &Calendar, event: &JsValue);

    #[wasm_bindgen(method, js_name = removeAllEvents)]
    pub fn remove_all_events(this: &Calendar);
}

#[derive(Serialize)]
struct HeaderToolbar {
    left: &'static str,
    center: &'static str,
    right: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CalendarOptions {
    initial_view: &'static str,
    height: &'static str,
    header_toolbar: HeaderToolbar,
}

/// Create and render a month-view calendar inside `el`
pub fn mount(el: &web_sys::Element) -> Result<Calendar, JsValue> {
    let options = serde_wasm_bindgen::to_value(&CalendarOptions {
        initial_view: "dayGridMonth",
        height: "100%",
        header_toolbar: HeaderToolbar {
            left: "prev,next",
            center: "title",
            right: "",
        },
    })?;
    let calendar = Calendar::new(el, &options);
    calendar.render();
    Ok(calendar)
}

/// Push a batch of events into the widget
pub fn add_events(calendar: &Calendar, events: &[CalendarEvent]) {
    for event in events {
        match serde_wasm_bindgen::to_value(event) {
            Ok(value) => calendar.add_event(&value),
            Err(err) => web_sys::console::error_1(&err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, text: &str, date: &str, checked: bool, priority: &str) -> Task {
        Task {
            id,
            text: text.to_string(),
            date: date.to_string(),
            checked,
            priority: priority.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn checked_and_undated_tasks_produce_no_events() {
        let tasks = vec![
            make_task(1, "done", "2024-03-15", true, "High"),
            make_task(2, "someday", "", false, "High"),
            make_task(3, "due", "2024-03-15", false, "High"),
        ];
        let events = personal_events(&tasks);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "due");
    }

    #[test]
    fn personal_events_are_colored_by_priority() {
        let tasks = vec![
            make_task(1, "Pay rent", "2024-03-15", false, "High"),
            make_task(2, "laundry", "2024-03-16", false, "Low"),
            make_task(3, "emails", "2024-03-17", false, ""),
        ];
        let events = personal_events(&tasks);
        assert_eq!(events[0].title, "Pay rent");
        assert_eq!(events[0].color, "red");
        assert!(events[0].all_day);
        assert_eq!(events[1].color, "green");
        assert_eq!(events[2].color, "orange");
    }

    #[test]
    fn timed_tasks_get_a_formatted_suffix() {
        assert_eq!(event_title("standup", "2024-03-15T09:00"), "standup – 9:00 AM");
        assert_eq!(event_title("dinner", "2024-03-15T19:30"), "dinner – 7:30 PM");
        assert_eq!(event_title("all day", "2024-03-15"), "all day");
    }

    #[test]
    fn list_events_are_prefixed_and_fixed_color() {
        let tasks = vec![make_task(1, "buy milk", "2024-03-15", false, "High")];
        let events = list_events("Groceries", &tasks);
        assert_eq!(events[0].title, "[Groceries] buy milk");
        assert_eq!(events[0].color, COLLAB_EVENT_COLOR);
    }
}
