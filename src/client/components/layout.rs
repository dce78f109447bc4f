use dioxus::prelude::*;

use crate::client::{components::Footer, router::Route};

/// Shell shared by every page: page content followed by the footer.
#[component]
pub fn Layout() -> Element {
    rsx! {
        div { class: "flex flex-col min-h-screen",
            main { class: "flex-1",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
