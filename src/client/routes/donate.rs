use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::{Navbar, Page};

#[component]
pub fn Donate() -> Element {
    rsx!(
        Title { "Donate | Wamumbi" }
        Navbar {}
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[960px] p-6 flex flex-col gap-6",
                h1 { class: "text-2xl font-bold", "Make a donation" }
                p {
                    "Every contribution goes directly to the campaign you choose. Donations can be made anonymously."
                }
                DonationOptions {}
            }
        }
    )
}

/// Donation amount and payment choices
#[component]
fn DonationOptions() -> Element {
    rsx!(
        section { class: "card shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Donation options" }
                p { class: "text-sm opacity-70", "Donation options are coming soon." }
            }
        }
    )
}
