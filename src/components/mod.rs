//! UI Components
//!
//! Reusable Leptos components.

mod calendar_panel;
mod collab_board;
mod confirm_modal;
mod feedback;
mod forgot_password_page;
mod list_modal;
mod login_page;
mod members_modal;
mod settings_page;
mod task_board;
mod task_item;
mod task_modal;
mod toast;

pub use calendar_panel::CalendarPanel;
pub use collab_board::CollabBoard;
pub use confirm_modal::ConfirmModal;
pub use feedback::{MessageSlot, StatusMessage};
pub use forgot_password_page::ForgotPasswordPage;
pub use list_modal::ListNameModal;
pub use login_page::LoginPage;
pub use members_modal::MembersModal;
pub use settings_page::SettingsPage;
pub use task_board::TaskBoard;
pub use task_item::TaskItem;
pub use task_modal::TaskModal;
pub use toast::Toast;

/// Full page navigation; the app has no client-side router
pub(crate) fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(path) {
            web_sys::console::error_1(&err);
        }
    }
}
