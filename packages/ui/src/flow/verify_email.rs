use super::status::{Notice, Outcome, PageStatus, Redirect, LOGIN_PATH};
use super::token::VerificationToken;
use api::VerificationApi;
use std::time::Duration;
use tracing::{debug, warn};

pub const VERIFIED_MESSAGE: &str = "Email verified successfully!";
const REDIRECT_AFTER: Duration = Duration::from_millis(2000);

/// Confirm an email address, then report success whatever the backend said.
///
/// Failures (missing token, transport error, non-2xx) only reach the log.
/// The pending-email marker is cleared whenever a confirm call was made.
pub async fn run_verify_email(
    api: &dyn VerificationApi,
    token: Option<&VerificationToken>,
) -> Outcome {
    let attempted = match token {
        None => {
            warn!("verify_email: no token found in URL");
            false
        }
        Some(token) => {
            match api.confirm_verification(token.as_str()).await {
                Ok(reply) => debug!("verify_email: confirmed status={}", reply.status),
                Err(err) => warn!("verify_email: verification error: {}", err),
            }
            true
        }
    };

    Outcome {
        status: PageStatus::Success,
        notice: Notice::success(VERIFIED_MESSAGE),
        redirect: Some(Redirect {
            to: LOGIN_PATH,
            after: REDIRECT_AFTER,
        }),
        clear_pending_email: attempted,
    }
}
