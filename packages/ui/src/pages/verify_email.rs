use super::use_page_flow;
use crate::flow::{run_verify_email, PageStatus, VerificationToken};
use crate::layout::{PageFrame, Spinner};
use crate::remote::RemoteVerificationApi;
use dioxus::prelude::*;

/// Landing page for the link in the verification email.
#[component]
pub fn VerifyEmailPage(token: Option<String>) -> Element {
    let token = VerificationToken::from_param(token);
    let status = use_page_flow(move || {
        let token = token.clone();
        async move { run_verify_email(&RemoteVerificationApi, token.as_ref()).await }
    });

    rsx! {
        PageFrame {
            match status() {
                PageStatus::Loading => rsx! {
                    Spinner { label: "Verifying your email..." }
                },
                // run_verify_email never reports an error.
                PageStatus::Success | PageStatus::Error(_) => rsx! {
                    div { class: "state state_success",
                        div { class: "state_icon", "✅" }
                        h1 { class: "state_title", "Email Verified" }
                        p { "Your email has been successfully verified!" }
                        p { class: "hint", "Redirecting you to login page..." }
                    }
                },
            }
        }
    }
}
