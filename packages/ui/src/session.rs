use dioxus::prelude::*;

/// Session-storage key set by the signup flow while a verification email is outstanding.
pub const PENDING_VERIFICATION_EMAIL: &str = "pendingVerificationEmail";

const JS_CLEAR_PENDING_EMAIL: &str = r#"(function(){ try { sessionStorage.removeItem("pendingVerificationEmail"); } catch(e) {} return ""; })()"#;

/// Best-effort removal of the pending-verification marker.
pub async fn clear_pending_verification_email() {
    if let Err(err) = document::eval(JS_CLEAR_PENDING_EMAIL).await {
        tracing::debug!("session: could not clear {}: {:?}", PENDING_VERIFICATION_EMAIL, err);
    }
}
