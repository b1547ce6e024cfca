use super::use_page_flow;
use crate::flow::{run_delete_account, PageStatus, VerificationToken, LOGIN_PATH};
use crate::layout::{PageFrame, Spinner};
use crate::remote::RemoteVerificationApi;
use dioxus::prelude::*;

/// Landing page for the "this wasn't me" link in the verification email.
#[component]
pub fn DeleteAccountPage(token: Option<String>) -> Element {
    let token = VerificationToken::from_param(token);
    let navigator = use_navigator();
    let status = use_page_flow(move || {
        let token = token.clone();
        async move { run_delete_account(&RemoteVerificationApi, token.as_ref()).await }
    });

    rsx! {
        PageFrame {
            match status() {
                PageStatus::Loading => rsx! {
                    Spinner { label: "Processing your request..." }
                },
                PageStatus::Success => rsx! {
                    div { class: "state state_success",
                        div { class: "state_icon", "✓" }
                        h2 { class: "state_title", "Account Deleted Successfully" }
                        p { "The account has been removed from our system." }
                        p { class: "hint", "Redirecting you to the login page..." }
                    }
                },
                PageStatus::Error(message) => rsx! {
                    div { class: "state state_error",
                        div { class: "state_icon", "×" }
                        h2 { class: "state_title", "Deletion Failed" }
                        p { class: "error_message", "{message}" }
                        p { class: "hint",
                            "We couldn't delete the account. The link may be expired or invalid."
                        }
                        button {
                            class: "btn",
                            onclick: move |_| {
                                let _ = navigator.push(LOGIN_PATH);
                            },
                            "Return to Login"
                        }
                    }
                },
            }
        }
    }
}
