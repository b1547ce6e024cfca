use dioxus::prelude::*;

#[component]
pub fn VerifyEmail(token: String) -> Element {
    // The router yields "" when the query has no token; the page treats that as missing.
    let token = Some(token);
    rsx! { ui::VerifyEmailPage { token } }
}
