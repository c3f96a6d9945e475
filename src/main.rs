//! Doable Frontend Entry Point

mod models;
mod api;
mod validate;
mod schedule;
mod calendar;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
