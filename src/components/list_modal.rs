//! List Name Modal Component
//!
//! Single-field dialog shared by "create list" and "rename list".

use leptos::prelude::*;

use super::{MessageSlot, StatusMessage};

#[component]
pub fn ListNameModal(
    #[prop(into)] title: String,
    #[prop(into)] initial: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_submit: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(initial);
    let slot = MessageSlot::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get().trim().to_string();
        if name.is_empty() {
            slot.error("Please enter a list name");
            return;
        }
        on_submit.run(name);
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h3>{title}</h3>
                <form on:submit=submit>
                    <input
                        type="text"
                        placeholder="List name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <StatusMessage msg_slot=slot />
                    <div class="modal-actions">
                        <button type="submit" class="confirm-btn" disabled=move || busy.get()>
                            "Save"
                        </button>
                        <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
