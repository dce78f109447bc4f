use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer footer-center p-4 bg-base-200",
            p { "Wamumbi charity management" }
            a { href: "/api/docs", class: "link", "API Docs" }
        }
    }
}
