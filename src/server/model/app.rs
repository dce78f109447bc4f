use std::sync::{Arc, OnceLock};

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{middleware::matcher::RouteMatcher, openapi::DocsGenerator, rpc::RpcRouter};

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Registered RPC procedures
    pub rpc: Arc<RpcRouter>,
    /// Classifies request paths as public or protected
    pub route_matcher: Arc<RouteMatcher>,
    docs: Arc<OnceLock<DocsGenerator>>,
}

impl AppState {
    /// Creates application state with the full set of Wamumbi procedures.
    pub fn new(db: DatabaseConnection, route_matcher: RouteMatcher) -> Self {
        Self {
            db,
            rpc: Arc::new(crate::server::rpc::app_router()),
            route_matcher: Arc::new(route_matcher),
            docs: Arc::new(OnceLock::new()),
        }
    }

    /// Replaces the registered procedures.
    pub fn with_rpc(mut self, rpc: RpcRouter) -> Self {
        self.rpc = Arc::new(rpc);
        self
    }

    /// API documentation generator, constructed on first use.
    pub fn docs(&self) -> &DocsGenerator {
        self.docs.get_or_init(|| {
            tracing::debug!("Initializing API documentation generator");

            DocsGenerator::new()
        })
    }

    /// Whether the documentation generator has been constructed yet.
    pub fn docs_initialized(&self) -> bool {
        self.docs.get().is_some()
    }
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db, RouteMatcher::default_public())
    }
}
