//! Members Modal Component
//!
//! Owner-only dialog for adding and removing members of a list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::lists;
use crate::models::{CollaborativeList, Member};

use super::{MessageSlot, StatusMessage};

#[component]
pub fn MembersModal(
    list: CollaborativeList,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let list_id = list.id;
    let (members, set_members) = signal(Vec::<Member>::new());
    let (username, set_username) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let slot = MessageSlot::new();

    let reload = move || {
        spawn_local(async move {
            match lists::members(list_id).await {
                Ok(fetched) => set_members.set(fetched),
                Err(err) => slot.error(err.to_string()),
            }
        });
    };

    Effect::new(move |_| reload());

    let add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = username.get().trim().to_string();
        if name.is_empty() {
            slot.error("Please enter a username.");
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let result = lists::add_member(list_id, &name).await;
            set_busy.set(false);
            match result {
                Ok(()) => {
                    slot.success(format!("✓ {name} added successfully!"));
                    set_username.set(String::new());
                    reload();
                }
                Err(err) => slot.error(err.to_string()),
            }
        });
    };

    let remove = move |member: Member| {
        set_busy.set(true);
        spawn_local(async move {
            let result = lists::remove_member(list_id, member.id).await;
            set_busy.set(false);
            match result {
                Ok(()) => {
                    slot.clear();
                    reload();
                }
                Err(err) => slot.error(err.to_string()),
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h3>{format!("Members of {}", list.name)}</h3>
                <form on:submit=add>
                    <input
                        type="text"
                        placeholder="Username to add"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    <button type="submit" class="confirm-btn" disabled=move || busy.get()>
                        "Add"
                    </button>
                </form>
                <StatusMessage msg_slot=slot />
                <ul class="member-list">
                    <For
                        each=move || members.get()
                        key=|m| m.id
                        children=move |member| {
                            let remove_member = member.clone();
                            view! {
                                <li class="member-row">
                                    <span>{member.name.clone()}</span>
                                    <span class="member-username">{member.username.clone()}</span>
                                    <button
                                        class="delete-btn"
                                        disabled=move || busy.get()
                                        on:click=move |_| remove(remove_member.clone())
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                <div class="modal-actions">
                    <button class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
