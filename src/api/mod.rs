//! REST API Client
//!
//! Thin fetch wrappers around the backend, one function per endpoint,
//! organized by domain. Functions never touch local state; a failed call
//! surfaces as an `ApiError` for the caller to handle.

mod error;

pub mod auth;
pub mod lists;
pub mod tasks;
pub mod users;

pub use error::ApiError;
pub(crate) use error::{decode, expect_ok};
