use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::{Navbar, Page};

/// Mount point for the hosted identity provider's sign-in widget.
#[component]
pub fn SignIn() -> Element {
    rsx!(
        Title { "Sign in | Wamumbi" }
        Navbar {}
        Page { class: "flex items-center justify-center",
            div { id: "sign-in", class: "card shadow-sm w-full max-w-96",
                div { class: "card-body items-center",
                    h1 { class: "card-title", "Sign in" }
                    p { class: "text-sm", "Sign in to manage campaigns and view your donations." }
                }
            }
        }
    )
}
