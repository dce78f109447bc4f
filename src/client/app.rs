use dioxus::document::{Link, Meta, Stylesheet, Title};
use dioxus::prelude::*;

use crate::client::router::Route;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        Title { "Wamumbi" }
        Meta {
            name: "description",
            content: "Wamumbi charity management: run fundraising campaigns and track donations."
        }
        Link { rel: "icon", href: FAVICON }
        Stylesheet { href: MAIN_CSS }

        Router::<Route> {}
    }
}
