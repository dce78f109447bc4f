use dioxus::prelude::*;

use crate::client::{
    components::Layout,
    routes::{Campaigns, Donate, Home, NotFound, SignIn},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]

    #[route("/")]
    Home {},

    #[route("/campaigns")]
    Campaigns {},

    #[route("/donate")]
    Donate {},

    #[route("/sign-in")]
    SignIn {},

    // The server answers `/login` with a 307, this covers client side navigation
    #[redirect("/login", || Route::SignIn {})]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
