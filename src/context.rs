//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays visible before auto-dismissing
const TOAST_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq)]
pub struct ToastState {
    /// Generation counter so a stale dismiss timer cannot hide a newer toast
    pub seq: u32,
    pub message: String,
    /// True only for deletion toasts; gates the Undo button
    pub with_undo: bool,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped whenever calendar events need rebuilding - read
    pub calendar_refresh: ReadSignal<u32>,
    set_calendar_refresh: WriteSignal<u32>,
    /// Current toast, if any - read
    pub toast: ReadSignal<Option<ToastState>>,
    set_toast: WriteSignal<Option<ToastState>>,
    toast_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (calendar_refresh, set_calendar_refresh) = signal(0u32);
        let (toast, set_toast) = signal(None::<ToastState>);
        Self {
            calendar_refresh,
            set_calendar_refresh,
            toast,
            set_toast,
            toast_seq: StoredValue::new(0),
        }
    }

    /// Trigger a rebuild of calendar events
    pub fn refresh_calendar(&self) {
        self.set_calendar_refresh.update(|v| *v += 1);
    }

    /// Show a toast that auto-dismisses after a few seconds
    pub fn show_toast(&self, message: String) {
        self.show(message, false);
    }

    /// Deletion variant; the toast component offers Undo while it is visible
    pub fn show_undo_toast(&self, message: String) {
        self.show(message, true);
    }

    fn show(&self, message: String, with_undo: bool) {
        let seq = self.toast_seq.with_value(|s| s + 1);
        self.toast_seq.set_value(seq);
        self.set_toast.set(Some(ToastState {
            seq,
            message,
            with_undo,
        }));
        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            set_toast.update(|toast| {
                if toast.as_ref().is_some_and(|t| t.seq == seq) {
                    *toast = None;
                }
            });
        });
    }

    pub fn hide_toast(&self) {
        self.set_toast.set(None);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
