use dioxus::prelude::*;

const VERIFY_CSS: Asset = asset!("/assets/styling/verify.css");

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "gm_nav",
            a { class: "brand", href: "/login", "Gator Market" }
            a { class: "nav_link", href: "/login", "Login" }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "gm_footer",
            p { "Gator Market · SFSU student marketplace" }
        }
    }
}

/// Navbar, centered card area and footer shared by the token pages.
#[component]
pub fn PageFrame(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VERIFY_CSS }
        div { class: "page",
            Navbar {}
            main { class: "page_main",
                div { class: "card", {children} }
            }
            Footer {}
        }
    }
}

#[component]
pub fn Spinner(label: String) -> Element {
    rsx! {
        div { class: "state",
            div { class: "spinner", role: "progressbar" }
            h2 { class: "state_title", "{label}" }
        }
    }
}
