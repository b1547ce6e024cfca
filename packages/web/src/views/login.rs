use dioxus::prelude::*;

/// Where both token pages send the user once they are done.
#[component]
pub fn Login() -> Element {
    rsx! {
        ui::PageFrame {
            div { class: "state",
                h1 { class: "state_title", "Sign in" }
                p { class: "hint", "Use your Gator Market account to continue." }
            }
        }
    }
}
