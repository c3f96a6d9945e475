//! Inline Status Messages
//!
//! Error and success text shown inside forms. Errors auto-hide after a
//! few seconds; success messages stay until replaced or cleared.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const ERROR_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MessageKind {
    Error,
    Success,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    seq: u32,
    kind: MessageKind,
    text: String,
}

/// One slot of form feedback, owned by the page that creates it
#[derive(Clone, Copy)]
pub struct MessageSlot {
    message: RwSignal<Option<Message>>,
    seq: StoredValue<u32>,
}

impl MessageSlot {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            seq: StoredValue::new(0),
        }
    }

    fn next_seq(&self) -> u32 {
        let seq = self.seq.with_value(|s| s + 1);
        self.seq.set_value(seq);
        seq
    }

    /// Show an error that hides itself after a few seconds
    pub fn error(&self, text: impl Into<String>) {
        let seq = self.next_seq();
        self.message.set(Some(Message {
            seq,
            kind: MessageKind::Error,
            text: text.into(),
        }));
        let message = self.message;
        spawn_local(async move {
            TimeoutFuture::new(ERROR_MS).await;
            message.update(|m| {
                if m.as_ref().is_some_and(|m| m.seq == seq) {
                    *m = None;
                }
            });
        });
    }

    /// Show a success message that stays until cleared
    pub fn success(&self, text: impl Into<String>) {
        let seq = self.next_seq();
        self.message.set(Some(Message {
            seq,
            kind: MessageKind::Success,
            text: text.into(),
        }));
    }

    pub fn clear(&self) {
        self.message.set(None);
    }
}

impl Default for MessageSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the slot's current message, if any
#[component]
pub fn StatusMessage(msg_slot: MessageSlot) -> impl IntoView {
    let slot = msg_slot;
    view! {
        {move || slot.message.get().map(|m| {
            let class = match m.kind {
                MessageKind::Error => "error-message",
                MessageKind::Success => "success-message",
            };
            view! { <div class=class>{m.text}</div> }
        })}
    }
}
