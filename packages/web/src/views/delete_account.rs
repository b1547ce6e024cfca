use dioxus::prelude::*;

#[component]
pub fn DeleteAccount(token: String) -> Element {
    let token = Some(token);
    rsx! { ui::DeleteAccountPage { token } }
}
