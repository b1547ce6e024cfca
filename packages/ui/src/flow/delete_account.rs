use super::status::{Notice, Outcome, PageStatus, Redirect, LOGIN_PATH};
use super::token::VerificationToken;
use api::VerificationApi;
use std::time::Duration;
use tracing::{error, info};

pub const MISSING_DELETE_TOKEN: &str = "Missing deletion token";
pub const DELETE_FALLBACK_MESSAGE: &str = "Failed to delete account. Please try again.";
const DELETED_MESSAGE: &str = "Account successfully deleted";
const REDIRECT_AFTER: Duration = Duration::from_millis(3000);

/// Delete an unverified account through its emailed token.
///
/// Only an HTTP 200 counts as deleted. Everything else ends in `Error` with
/// the server's message when it sent one. No automatic redirect on error.
pub async fn run_delete_account(
    api: &dyn VerificationApi,
    token: Option<&VerificationToken>,
) -> Outcome {
    let Some(token) = token else {
        return failed(MISSING_DELETE_TOKEN.to_string());
    };

    match api.delete_account(token.as_str()).await {
        Ok(reply) if reply.status == 200 => {
            info!("delete_account: account deleted");
            Outcome {
                status: PageStatus::Success,
                notice: Notice::success(DELETED_MESSAGE),
                redirect: Some(Redirect {
                    to: LOGIN_PATH,
                    after: REDIRECT_AFTER,
                }),
                clear_pending_email: false,
            }
        }
        Ok(reply) => {
            error!("delete_account: unexpected status {}", reply.status);
            failed(DELETE_FALLBACK_MESSAGE.to_string())
        }
        Err(err) => {
            error!("delete_account: error deleting account: {}", err);
            let message = err
                .server_message()
                .unwrap_or(DELETE_FALLBACK_MESSAGE)
                .to_string();
            failed(message)
        }
    }
}

fn failed(message: String) -> Outcome {
    Outcome {
        status: PageStatus::Error(message.clone()),
        notice: Notice::error(message),
        redirect: None,
        clear_pending_email: false,
    }
}
