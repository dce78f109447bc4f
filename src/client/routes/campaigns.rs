use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::{CampaignList, Navbar, Page, Sidebar};

#[component]
pub fn Campaigns() -> Element {
    let mut sidebar_open = use_signal(|| false);

    rsx!(
        Title { "Campaigns | Wamumbi" }
        Navbar { on_menu: move |_| sidebar_open.set(!sidebar_open()) }
        Sidebar {
            open: sidebar_open(),
            on_close: move |_| sidebar_open.set(false)
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                h1 { class: "text-2xl font-bold", "Campaigns" }
                CampaignList {}
            }
        }
    )
}
