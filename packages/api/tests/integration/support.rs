use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Token the fake backend accepts.
pub const GOOD_TOKEN: &str = "0b6f0d53-8d1c-4c1e-9a3a-4f1f8c2d9e10";
/// Token the fake backend reports as expired.
pub const EXPIRED_TOKEN: &str = "expired-token";
/// Token that makes the fake backend answer with a non-JSON body.
pub const GARBLED_TOKEN: &str = "garbled-token";
pub const VERIFIED_EMAIL: &str = "gator@sfsu.edu";

/// In-process stand-in for the Flask verification blueprint.
pub struct FakeBackend {
    addr: SocketAddr,
    handle: tokio::task::JoinHandle<()>,
}

impl FakeBackend {
    pub async fn start() -> anyhow::Result<Self> {
        let app = Router::new()
            .route("/verify/send", post(send))
            .route("/verify/confirm", get(confirm))
            .route("/verify/delete-account", get(delete_account))
            .route("/verify/get-token", post(get_token))
            .route("/verify/get-verified-user", post(get_verified_user));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { addr, handle })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn send(Json(body): Json<Value>) -> Response {
    match body.get("email").and_then(Value::as_str) {
        None | Some("") => error(StatusCode::BAD_REQUEST, "Email is required"),
        Some(VERIFIED_EMAIL) => error(StatusCode::BAD_REQUEST, "Email already verified"),
        Some(_) => Json(json!({ "message": "Verification email sent" })).into_response(),
    }
}

fn token_response(params: &HashMap<String, String>, message: &str) -> Response {
    match params.get("token").map(String::as_str) {
        None | Some("") => error(StatusCode::BAD_REQUEST, "Token is required"),
        Some(GOOD_TOKEN) => Json(json!({ "message": message })).into_response(),
        Some(EXPIRED_TOKEN) => error(StatusCode::BAD_REQUEST, "Token has expired"),
        Some(GARBLED_TOKEN) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>").into_response()
        }
        Some(_) => error(StatusCode::BAD_REQUEST, "Invalid or expired token"),
    }
}

async fn confirm(Query(params): Query<HashMap<String, String>>) -> Response {
    token_response(&params, "Email verified successfully")
}

async fn delete_account(Query(params): Query<HashMap<String, String>>) -> Response {
    token_response(&params, "Account successfully deleted")
}

async fn get_token(Json(body): Json<Value>) -> Response {
    match body.get("email").and_then(Value::as_str) {
        Some(VERIFIED_EMAIL) => Json(json!({
            "token": "session-jwt",
            "user": {
                "user_id": 7,
                "username": "gator",
                "verification_status": "verified",
                "role": "user"
            }
        }))
        .into_response(),
        Some(_) => error(StatusCode::NOT_FOUND, "User not found"),
        None => error(StatusCode::BAD_REQUEST, "Email is required"),
    }
}

async fn get_verified_user(Json(body): Json<Value>) -> Response {
    match body.get("token").and_then(Value::as_str) {
        Some(GOOD_TOKEN) => Json(json!({ "verification_status": "unverified" })).into_response(),
        Some(_) => error(StatusCode::NOT_FOUND, "User not found or token expired"),
        None => error(StatusCode::BAD_REQUEST, "Token is required"),
    }
}
