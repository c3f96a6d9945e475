//! Login / Register Page
//!
//! One page with two panes toggled by a link: sign in, and the register
//! form with its security question.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::auth::{self, RegisterPayload, SecurityAnswer};
use crate::models::SecurityQuestion;
use crate::validate::{check_new_password, derive_identity};

use super::{navigate, MessageSlot, StatusMessage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (registering, set_registering) = signal(false);

    view! {
        <div class="auth-page">
            <Show
                when=move || registering.get()
                fallback=move || view! { <LoginSection on_register=move |_| set_registering.set(true) /> }
            >
                <RegisterSection on_login=move |_| set_registering.set(false) />
            </Show>
        </div>
    }
}

#[component]
fn LoginSection(#[prop(into)] on_register: Callback<()>) -> impl IntoView {
    let (credentials, set_credentials) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let slot = MessageSlot::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = credentials.get().trim().to_string();
        let password = password.get();
        if credentials.is_empty() || password.is_empty() {
            slot.error("Please enter both username/email and password.");
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let result = auth::login(&credentials, &password).await;
            set_busy.set(false);
            match result {
                Ok(resp) => {
                    slot.success(format!("Welcome back, {}!", resp.user.username));
                    TimeoutFuture::new(1_000).await;
                    navigate("/index");
                }
                Err(err) => slot.error(err.to_string()),
            }
        });
    };

    view! {
        <section class="auth-card">
            <h1>"Sign In"</h1>
            <form on:submit=submit>
                <input
                    type="text"
                    placeholder="Username or email"
                    prop:value=move || credentials.get()
                    on:input=move |ev| set_credentials.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <StatusMessage msg_slot=slot />
                <button type="submit" disabled=move || busy.get()>"Sign In"</button>
            </form>
            <a href="/forgotpassword">"Forgot password?"</a>
            <button class="link-btn" on:click=move |_| on_register.run(())>
                "Need an account? Register"
            </button>
        </section>
    }
}

#[component]
fn RegisterSection(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (credentials, set_credentials) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (answer, set_answer) = signal(String::new());
    let (question_id, set_question_id) = signal(None::<u32>);
    let (questions, set_questions) = signal(Vec::<SecurityQuestion>::new());
    let (busy, set_busy) = signal(false);
    let slot = MessageSlot::new();

    // the form stays disabled until the questions arrive
    Effect::new(move |_| {
        spawn_local(async move {
            match auth::security_questions().await {
                Ok(fetched) => {
                    set_question_id.set(fetched.first().map(|q| q.q_id));
                    set_questions.set(fetched);
                }
                Err(err) => slot.error(err.to_string()),
            }
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get().trim().to_string();
        let credentials = credentials.get().trim().to_string();
        let password = password.get();
        let answer = answer.get().trim().to_string();
        let Some(question_id) = question_id.get() else {
            slot.error("Security questions are still loading.");
            return;
        };
        if name.is_empty() || credentials.is_empty() || password.is_empty() || answer.is_empty() {
            slot.error("Please fill in all fields.");
            return;
        }
        if let Err(msg) = check_new_password(&password, &confirm.get()) {
            slot.error(msg);
            return;
        }
        let identity = derive_identity(&credentials);
        set_busy.set(true);
        spawn_local(async move {
            let payload = RegisterPayload {
                username: identity.username,
                email: identity.email,
                name,
                password,
                security_answer: SecurityAnswer {
                    question_id,
                    answer,
                },
            };
            let result = auth::register(&payload).await;
            set_busy.set(false);
            match result {
                Ok(user) => {
                    slot.success(format!(
                        "Account created successfully! Welcome, {}!",
                        user.username
                    ));
                    TimeoutFuture::new(1_500).await;
                    navigate("/index");
                }
                Err(err) => slot.error(err.to_string()),
            }
        });
    };

    view! {
        <section class="auth-card">
            <h1>"Register"</h1>
            <form on:submit=submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Username or email"
                    prop:value=move || credentials.get()
                    on:input=move |ev| set_credentials.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    set_question_id.set(event_target_value(&ev).parse().ok());
                }>
                    <For
                        each=move || questions.get()
                        key=|q| q.q_id
                        children=move |q| {
                            view! {
                                <option value=q.q_id.to_string()>{q.q_content.clone()}</option>
                            }
                        }
                    />
                </select>
                <input
                    type="text"
                    placeholder="Security answer"
                    prop:value=move || answer.get()
                    on:input=move |ev| set_answer.set(event_target_value(&ev))
                />
                <StatusMessage msg_slot=slot />
                <button
                    type="submit"
                    disabled=move || busy.get() || questions.read().is_empty()
                >
                    "Create Account"
                </button>
            </form>
            <button class="link-btn" on:click=move |_| on_login.run(())>
                "Already have an account? Sign in"
            </button>
        </section>
    }
}
