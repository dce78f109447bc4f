use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaHandHoldingHeart};
use dioxus_free_icons::Icon;

use crate::client::router::Route;

/// Top navigation bar.
///
/// The menu button is only shown when `on_menu` is provided.
#[component]
pub fn Navbar(on_menu: Option<EventHandler<MouseEvent>>) -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start gap-2",
                if let Some(on_menu) = on_menu {
                    button {
                        class: "btn btn-ghost btn-square",
                        aria_label: "Toggle menu",
                        onclick: move |evt| on_menu.call(evt),
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaBars
                        }
                    }
                }
                Link {
                    to: Route::Home {},
                    class: "flex items-center gap-2 text-xl",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaHandHoldingHeart
                    }
                    "Wamumbi"
                }
            }
            div {
                class: "navbar-end gap-2",
                Link { to: Route::Campaigns {}, class: "btn btn-ghost", "Campaigns" }
                Link { to: Route::Donate {}, class: "btn btn-primary", "Donate" }
            }
        }
    }
}
