use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

/// Slide-out navigation, rendered only while `open` is true.
#[component]
pub fn Sidebar(open: bool, on_close: EventHandler<MouseEvent>) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        aside {
            class: "fixed top-0 left-0 z-20 h-full w-64 bg-base-200 shadow-lg p-4 flex flex-col gap-4",
            div { class: "flex justify-end",
                button {
                    class: "btn btn-ghost btn-square",
                    aria_label: "Close menu",
                    onclick: move |evt| on_close.call(evt),
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaXmark
                    }
                }
            }
            ul { class: "menu",
                li { Link { to: Route::Campaigns {}, "All campaigns" } }
                li { Link { to: Route::Donate {}, "Donate" } }
                li { a { href: "/api/docs", "API Docs" } }
            }
        }
    }
}
