//! Account Endpoints

use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::json;

use super::{decode, expect_ok, ApiError};
use crate::models::User;

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    user: User,
}

pub async fn current() -> Result<User, ApiError> {
    let resp = Request::get("/api/current-user").send().await?;
    decode(resp).await
}

pub async fn update_profile(
    name: &str,
    username: &str,
    email: Option<&str>,
) -> Result<User, ApiError> {
    let resp = Request::put("/api/user")
        .json(&json!({ "name": name, "username": username, "email": email }))?
        .send()
        .await?;
    let body: ProfileResponse = decode(resp).await?;
    Ok(body.user)
}

pub async fn change_password(old_password: &str, new_password: &str) -> Result<(), ApiError> {
    let resp = Request::put("/api/user/password")
        .json(&json!({ "old_password": old_password, "new_password": new_password }))?
        .send()
        .await?;
    expect_ok(resp).await
}

pub async fn delete_account() -> Result<(), ApiError> {
    let resp = Request::delete("/api/user").send().await?;
    expect_ok(resp).await
}
