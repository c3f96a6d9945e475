//! Auth Endpoints
//!
//! Login, registration, the security-question recovery flow, and logout.
//! Sessions are cookie-based; nothing here stores tokens client-side.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{decode, expect_ok, ApiError};
use crate::models::{SecurityQuestion, User};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct SecurityAnswer {
    pub question_id: u32,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: Option<String>,
    pub name: String,
    pub password: String,
    pub security_answer: SecurityAnswer,
}

/// The question to show the user during password recovery
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityChallenge {
    pub question_id: u32,
    pub question: String,
}

#[derive(Debug, Deserialize)]
struct ForgotPasswordResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    question_id: Option<u32>,
    #[serde(default)]
    security_question: Option<String>,
}

// ========================
// Endpoints
// ========================

/// `credentials` may be a username or an email address
pub async fn login(credentials: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let resp = Request::post("/api/login")
        .json(&json!({ "credentials": credentials, "password": password }))?
        .send()
        .await?;
    decode(resp).await
}

pub async fn register(payload: &RegisterPayload) -> Result<User, ApiError> {
    let resp = Request::post("/api/user").json(payload)?.send().await?;
    decode(resp).await
}

pub async fn security_questions() -> Result<Vec<SecurityQuestion>, ApiError> {
    let resp = Request::get("/api/security-questions").send().await?;
    decode(resp).await
}

pub async fn forgot_password(username: &str) -> Result<SecurityChallenge, ApiError> {
    let resp = Request::post("/api/forgotpassword")
        .json(&json!({ "username": username }))?
        .send()
        .await?;
    let body: ForgotPasswordResponse = decode(resp).await?;
    if !body.success {
        let msg = body
            .message
            .unwrap_or_else(|| "Password recovery failed.".to_string());
        return Err(ApiError::Server(msg));
    }
    match (body.question_id, body.security_question) {
        (Some(question_id), Some(question)) => Ok(SecurityChallenge {
            question_id,
            question,
        }),
        _ => Err(ApiError::Decode(
            "missing security question in response".to_string(),
        )),
    }
}

pub async fn verify_security_answer(
    username: &str,
    question_id: u32,
    answer: &str,
) -> Result<(), ApiError> {
    let resp = Request::post("/api/user/verify-security-answer")
        .json(&json!({
            "username": username,
            "question_id": question_id,
            "answer": answer,
        }))?
        .send()
        .await?;
    expect_ok(resp).await
}

pub async fn reset_password(username: &str, new_password: &str) -> Result<(), ApiError> {
    let resp = Request::post("/api/reset-password")
        .json(&json!({ "username": username, "new_password": new_password }))?
        .send()
        .await?;
    expect_ok(resp).await
}

pub async fn logout() -> Result<(), ApiError> {
    let resp = Request::post("/api/logout").send().await?;
    expect_ok(resp).await
}
