#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use wamumbi::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, middleware::RouteMatcher, model::app::AppState, router, startup,
        };

        dotenvy::from_filename(".env.local").ok();
        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let route_matcher = match RouteMatcher::new(&config.public_routes) {
            Ok(route_matcher) => route_matcher,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        if route_matcher.matches_everything() {
            tracing::warn!(
                "Public routes include a catch-all pattern, every route is reachable without signing in"
            );
        }

        let session = startup::connect_to_session();
        let db = startup::connect_to_database(&config).await?;

        let state = AppState::new(db, route_matcher);

        tracing::info!("Starting server");

        let router = dioxus::server::router(client::App)
            .merge(router::routes().with_state(state.clone()));

        Ok(router::with_middleware(router, state, session))
    })
}
