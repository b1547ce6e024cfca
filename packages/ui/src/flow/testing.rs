use super::token::VerificationToken;
use api::{ApiError, ApiReply, VerificationApi};
use async_trait::async_trait;
use std::cell::RefCell;

pub fn token(value: &str) -> VerificationToken {
    VerificationToken::from_param(Some(value.to_string())).expect("non-empty token")
}

/// Canned answer for every call made to [`FakeApi`].
#[derive(Clone)]
pub enum Reply {
    Ok(u16),
    Rejected {
        status: u16,
        body: Option<serde_json::Value>,
    },
    /// The request never got an HTTP response.
    Unreachable,
}

/// Records every call and answers each with the same [`Reply`].
pub struct FakeApi {
    reply: Reply,
    confirm: RefCell<Vec<String>>,
    delete: RefCell<Vec<String>>,
    send: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            confirm: RefCell::default(),
            delete: RefCell::default(),
            send: RefCell::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.confirm.borrow().len() + self.delete.borrow().len() + self.send.borrow().len()
    }

    pub fn confirm_tokens(&self) -> Vec<String> {
        self.confirm.borrow().clone()
    }

    pub fn delete_tokens(&self) -> Vec<String> {
        self.delete.borrow().clone()
    }

    fn answer(&self) -> Result<ApiReply, ApiError> {
        match self.reply.clone() {
            Reply::Ok(status) => Ok(ApiReply {
                status,
                body: serde_json::json!({ "message": "ok" }),
            }),
            Reply::Rejected { status, body } => Err(ApiError::Status { status, body }),
            Reply::Unreachable => Err(ApiError::Config("backend unreachable".to_string())),
        }
    }
}

#[async_trait(?Send)]
impl VerificationApi for FakeApi {
    async fn send_verification_email(&self, email: &str) -> Result<ApiReply, ApiError> {
        self.send.borrow_mut().push(email.to_string());
        self.answer()
    }

    async fn confirm_verification(&self, token: &str) -> Result<ApiReply, ApiError> {
        self.confirm.borrow_mut().push(token.to_string());
        self.answer()
    }

    async fn delete_account(&self, token: &str) -> Result<ApiReply, ApiError> {
        self.delete.borrow_mut().push(token.to_string());
        self.answer()
    }
}
