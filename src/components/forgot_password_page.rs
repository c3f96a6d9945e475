//! Forgot Password Page
//!
//! Three gated steps: request the security question, verify the answer,
//! set a new password. Each step only unlocks when the previous one
//! succeeded server-side.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::auth;
use crate::validate::check_new_password;

use super::{navigate, MessageSlot, StatusMessage};

#[derive(Clone, Debug, PartialEq)]
enum Step {
    Request,
    Verify {
        username: String,
        question_id: u32,
        question: String,
    },
    Reset {
        username: String,
    },
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (step, set_step) = signal(Step::Request);
    let (busy, set_busy) = signal(false);
    let slot = MessageSlot::new();

    view! {
        <div class="auth-page">
            <section class="auth-card">
                <h1>"Reset Password"</h1>
                {move || match step.get() {
                    Step::Request => view! {
                        <RequestForm busy set_busy msg_slot=slot set_step />
                    }
                    .into_any(),
                    Step::Verify { username, question_id, question } => view! {
                        <VerifyForm username question_id question busy set_busy msg_slot=slot set_step />
                    }
                    .into_any(),
                    Step::Reset { username } => view! {
                        <ResetForm username busy set_busy msg_slot=slot />
                    }
                    .into_any(),
                }}
                <StatusMessage msg_slot=slot />
                <a href="/login">"Back to sign in"</a>
            </section>
        </div>
    }
}

#[component]
fn RequestForm(
    busy: ReadSignal<bool>,
    set_busy: WriteSignal<bool>,
    msg_slot: MessageSlot,
    set_step: WriteSignal<Step>,
) -> impl IntoView {
    let slot = msg_slot;
    let (username, set_username) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get().trim().to_string();
        if username.is_empty() {
            slot.error("Please enter your username or email.");
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let result = auth::forgot_password(&username).await;
            set_busy.set(false);
            match result {
                Ok(challenge) => {
                    slot.clear();
                    set_step.set(Step::Verify {
                        username,
                        question_id: challenge.question_id,
                        question: challenge.question,
                    });
                }
                Err(err) => slot.error(err.to_string()),
            }
        });
    };

    view! {
        <form on:submit=submit>
            <input
                type="text"
                placeholder="Username or email"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>"Continue"</button>
        </form>
    }
}

#[component]
fn VerifyForm(
    username: String,
    question_id: u32,
    question: String,
    busy: ReadSignal<bool>,
    set_busy: WriteSignal<bool>,
    msg_slot: MessageSlot,
    set_step: WriteSignal<Step>,
) -> impl IntoView {
    let slot = msg_slot;
    let (answer, set_answer) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let answer = answer.get().trim().to_string();
        if answer.is_empty() {
            slot.error("Please enter your answer.");
            return;
        }
        let username = username.clone();
        set_busy.set(true);
        spawn_local(async move {
            let result = auth::verify_security_answer(&username, question_id, &answer).await;
            set_busy.set(false);
            match result {
                Ok(()) => {
                    slot.clear();
                    set_step.set(Step::Reset { username });
                }
                Err(err) => slot.error(err.to_string()),
            }
        });
    };

    view! {
        <form on:submit=submit>
            <p class="security-question">{question}</p>
            <input
                type="text"
                placeholder="Your answer"
                prop:value=move || answer.get()
                on:input=move |ev| set_answer.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>"Verify"</button>
        </form>
    }
}

#[component]
fn ResetForm(
    username: String,
    busy: ReadSignal<bool>,
    set_busy: WriteSignal<bool>,
    msg_slot: MessageSlot,
) -> impl IntoView {
    let slot = msg_slot;
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let password = password.get();
        if let Err(msg) = check_new_password(&password, &confirm.get()) {
            slot.error(msg);
            return;
        }
        let username = username.clone();
        set_busy.set(true);
        spawn_local(async move {
            let result = auth::reset_password(&username, &password).await;
            set_busy.set(false);
            match result {
                Ok(()) => {
                    slot.success("Password reset successful. You can now log in.");
                    TimeoutFuture::new(2_000).await;
                    navigate("/login");
                }
                Err(err) => slot.error(err.to_string()),
            }
        });
    };

    view! {
        <form on:submit=submit>
            <input
                type="password"
                placeholder="New password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Confirm new password"
                prop:value=move || confirm.get()
                on:input=move |ev| set_confirm.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>"Reset Password"</button>
        </form>
    }
}
