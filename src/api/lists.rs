//! Collaborative List Endpoints

use gloo_net::http::Request;
use serde_json::json;

use super::{decode, expect_ok, ApiError};
use crate::models::{CollaborativeList, Member};

pub async fn list_all() -> Result<Vec<CollaborativeList>, ApiError> {
    let resp = Request::get("/api/collaborative-lists").send().await?;
    decode(resp).await
}

pub async fn create(name: &str) -> Result<CollaborativeList, ApiError> {
    let resp = Request::post("/api/collaborative-lists")
        .json(&json!({ "name": name }))?
        .send()
        .await?;
    decode(resp).await
}

pub async fn rename(list_id: u32, name: &str) -> Result<CollaborativeList, ApiError> {
    let resp = Request::put(&format!("/api/collaborative-lists/{list_id}"))
        .json(&json!({ "name": name }))?
        .send()
        .await?;
    decode(resp).await
}

pub async fn delete(list_id: u32) -> Result<(), ApiError> {
    let resp = Request::delete(&format!("/api/collaborative-lists/{list_id}"))
        .send()
        .await?;
    expect_ok(resp).await
}

// ========================
// Members
// ========================

pub async fn members(list_id: u32) -> Result<Vec<Member>, ApiError> {
    let resp = Request::get(&format!("/api/collaborative-lists/{list_id}/members"))
        .send()
        .await?;
    decode(resp).await
}

pub async fn add_member(list_id: u32, username: &str) -> Result<(), ApiError> {
    let resp = Request::post(&format!("/api/collaborative-lists/{list_id}/members"))
        .json(&json!({ "username": username }))?
        .send()
        .await?;
    expect_ok(resp).await
}

pub async fn remove_member(list_id: u32, member_id: u32) -> Result<(), ApiError> {
    let resp = Request::delete(&format!(
        "/api/collaborative-lists/{list_id}/members/{member_id}"
    ))
    .send()
    .await?;
    expect_ok(resp).await
}
