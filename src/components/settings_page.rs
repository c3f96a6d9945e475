//! Account Settings Page
//!
//! Profile fields with per-row edit state, password change, logout, and
//! account deletion behind a confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::users;
use crate::models::User;
use crate::validate::{avatar_initial, check_new_password, looks_like_email};

use super::{navigate, ConfirmModal, MessageSlot, StatusMessage};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (user, set_user) = signal(None::<User>);
    let slot = MessageSlot::new();

    Effect::new(move |_| {
        spawn_local(async move {
            match users::current().await {
                Ok(fetched) => set_user.set(Some(fetched)),
                Err(err) => slot.error(err.to_string()),
            }
        });
    });

    view! {
        <div class="settings-page">
            <StatusMessage msg_slot=slot />
            {move || user.get().map(|u| view! { <SettingsBody user=u set_user /> })}
        </div>
    }
}

#[component]
fn SettingsBody(user: User, set_user: WriteSignal<Option<User>>) -> impl IntoView {
    let slot = MessageSlot::new();
    let (busy, set_busy) = signal(false);
    let (confirm_delete, set_confirm_delete) = signal(false);

    let name = RwSignal::new(user.name.clone().unwrap_or_default());
    let username = RwSignal::new(user.username.clone());
    let email = RwSignal::new(user.email.clone().unwrap_or_default());

    let initial = avatar_initial(user.name.as_deref(), &user.username);

    // every profile save sends the full profile, whichever row changed
    let save_profile = move || {
        let name_value = name.get().trim().to_string();
        let username_value = username.get().trim().to_string();
        let email_value = email.get().trim().to_string();
        if name_value.is_empty() || username_value.is_empty() {
            slot.error("Name and username are required.");
            return;
        }
        if !email_value.is_empty() && !looks_like_email(&email_value) {
            slot.error("Please enter a valid email address.");
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let email_arg = (!email_value.is_empty()).then_some(email_value.as_str());
            let result = users::update_profile(&name_value, &username_value, email_arg).await;
            set_busy.set(false);
            match result {
                Ok(updated) => {
                    slot.success("Profile updated.");
                    set_user.set(Some(updated));
                }
                Err(err) => slot.error(err.to_string()),
            }
        });
    };

    let do_delete = move |_| {
        set_busy.set(true);
        spawn_local(async move {
            let result = users::delete_account().await;
            set_busy.set(false);
            match result {
                Ok(()) => navigate("/login"),
                Err(err) => {
                    set_confirm_delete.set(false);
                    slot.error(err.to_string());
                }
            }
        });
    };

    let logout = move |_| {
        spawn_local(async move {
            // leave the page even if the server call fails
            let _ = crate::api::auth::logout().await;
            navigate("/login");
        });
    };

    view! {
        <div class="settings-card">
            <div class="settings-header">
                <span class="avatar">{initial}</span>
                <h1>"Account Settings"</h1>
            </div>
            <StatusMessage msg_slot=slot />
            <ProfileRow label="Name" value=name placeholder="Your name" busy on_save=move |_| save_profile() />
            <ProfileRow label="Username" value=username placeholder="Username" busy on_save=move |_| save_profile() />
            <ProfileRow label="Email" value=email placeholder="Email (optional)" busy on_save=move |_| save_profile() />
            <PasswordForm busy set_busy msg_slot=slot />
            <div class="settings-actions">
                <button class="logout-btn" on:click=logout>"Log Out"</button>
                <button
                    class="delete-account-btn"
                    on:click=move |_| set_confirm_delete.set(true)
                >
                    "Delete Account"
                </button>
            </div>
            <Show when=move || confirm_delete.get()>
                <ConfirmModal
                    title="Delete Account"
                    body="This permanently deletes your account and all of your tasks. This cannot be undone."
                    confirm_label="Delete"
                    busy
                    on_confirm=do_delete
                    on_cancel=move |_| set_confirm_delete.set(false)
                />
            </Show>
        </div>
    }
}

/// One editable profile field with its own view/edit state
#[component]
fn ProfileRow(
    label: &'static str,
    value: RwSignal<String>,
    placeholder: &'static str,
    busy: ReadSignal<bool>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    view! {
        <div class="profile-row">
            <span class="profile-label">{label}</span>
            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <span class="profile-value">{move || value.get()}</span>
                        <button
                            class="edit-btn"
                            on:click=move |_| {
                                set_draft.set(value.get());
                                set_editing.set(true);
                            }
                        >
                            "Edit"
                        </button>
                    }
                }
            >
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button
                    class="confirm-btn"
                    disabled=move || busy.get()
                    on:click=move |_| {
                        value.set(draft.get());
                        set_editing.set(false);
                        on_save.run(());
                    }
                >
                    "Save"
                </button>
                <button class="cancel-btn" on:click=move |_| set_editing.set(false)>
                    "Cancel"
                </button>
            </Show>
        </div>
    }
}

#[component]
fn PasswordForm(
    busy: ReadSignal<bool>,
    set_busy: WriteSignal<bool>,
    msg_slot: MessageSlot,
) -> impl IntoView {
    let slot = msg_slot;
    let (old_password, set_old_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let old = old_password.get();
        let new = new_password.get();
        if old.is_empty() {
            slot.error("Please enter your current password.");
            return;
        }
        if let Err(msg) = check_new_password(&new, &confirm.get()) {
            slot.error(msg);
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let result = users::change_password(&old, &new).await;
            set_busy.set(false);
            match result {
                Ok(()) => {
                    slot.success("Password changed.");
                    set_old_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm.set(String::new());
                }
                Err(err) => slot.error(err.to_string()),
            }
        });
    };

    view! {
        <form class="password-form" on:submit=submit>
            <h2>"Change Password"</h2>
            <input
                type="password"
                placeholder="Current password"
                prop:value=move || old_password.get()
                on:input=move |ev| set_old_password.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="New password"
                prop:value=move || new_password.get()
                on:input=move |ev| set_new_password.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Confirm new password"
                prop:value=move || confirm.get()
                on:input=move |ev| set_confirm.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>"Change Password"</button>
        </form>
    }
}
