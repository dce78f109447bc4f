use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::{Navbar, Page};
use crate::client::router::Route;

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Wamumbi" }
        Meta {
            name: "description",
            content: "Wamumbi charity management: run fundraising campaigns and track donations."
        }
        Navbar {}
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-256 py-16",
                p { class: "text-3xl font-bold", "Wamumbi" }
                p { class: "text-center",
                    "Run fundraising campaigns, accept donations, and follow every campaign's progress towards its goal."
                }
                ul { class: "flex flex-wrap justify-center gap-2",
                    li {
                        Link { to: Route::Campaigns {}, class: "btn btn-primary w-40", "View campaigns" }
                    }
                    li {
                        Link { to: Route::Donate {}, class: "btn btn-outline w-40", "Donate" }
                    }
                }
            }
        }
    )
}
