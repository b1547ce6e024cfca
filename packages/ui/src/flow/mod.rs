//! Page logic without any rendering, so it can run (and be tested) off the DOM.

mod delete_account;
mod status;
mod token;
mod verify_email;

pub use delete_account::{run_delete_account, DELETE_FALLBACK_MESSAGE, MISSING_DELETE_TOKEN};
pub use status::{Notice, NoticeKind, Outcome, PageStatus, Redirect, LOGIN_PATH};
pub use token::VerificationToken;
pub use verify_email::{run_verify_email, VERIFIED_MESSAGE};

#[cfg(test)]
pub(crate) mod testing;
