//! Confirmation Modal Component
//!
//! Generic yes/no dialog used for destructive actions and done-toggles.

use leptos::prelude::*;

#[component]
pub fn ConfirmModal(
    #[prop(into)] title: String,
    #[prop(into)] body: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h3>{title}</h3>
                <p>{body}</p>
                <div class="modal-actions">
                    <button
                        class="confirm-btn"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {confirm_label}
                    </button>
                    <button class="cancel-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
