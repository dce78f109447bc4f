use std::collections::BTreeMap;

use axum::http::Method;
use dioxus_logger::tracing;
use serde_json::Value;

use crate::server::{
    error::rpc::RpcError,
    rpc::{
        context::RpcContext,
        procedure::{Procedure, ProcedureResult},
    },
};

/// Registry of procedures addressed by their dotted path.
#[derive(Default)]
pub struct RpcRouter {
    procedures: BTreeMap<String, Procedure>,
}

impl RpcRouter {
    /// Creates an empty router
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a procedure, replacing any procedure already using its path.
    pub fn procedure(mut self, procedure: Procedure) -> Self {
        let path = procedure.path().to_string();

        if self.procedures.insert(path.clone(), procedure).is_some() {
            tracing::warn!(procedure = %path, "Replaced previously registered procedure");
        }

        self
    }

    /// Registered procedures ordered by path
    pub fn procedures(&self) -> impl Iterator<Item = &Procedure> {
        self.procedures.values()
    }

    /// Procedure registered at `path`
    pub fn get(&self, path: &str) -> Option<&Procedure> {
        self.procedures.get(path)
    }

    /// Dispatches a call to the procedure registered at `path`.
    ///
    /// # Returns
    /// - `Ok(Value)` - Serialized procedure output
    /// - `Err(RpcError)` with `NOT_FOUND` - No procedure at `path`
    /// - `Err(RpcError)` with `METHOD_NOT_SUPPORTED` - Query called with `POST` or mutation
    ///   called with `GET`
    /// - `Err(RpcError)` - Error returned by the procedure itself
    pub async fn call(
        &self,
        path: &str,
        method: &Method,
        ctx: RpcContext,
        input: Value,
    ) -> ProcedureResult {
        let expected = if method == Method::POST {
            "mutation"
        } else {
            "query"
        };

        let Some(procedure) = self.procedures.get(path) else {
            return Err(RpcError::not_found(format!(
                "No \"{}\"-procedure on path \"{}\"",
                expected, path
            )));
        };

        if procedure.kind().method() != method {
            return Err(RpcError::method_not_supported(format!(
                "Unsupported {}-method to {} procedure at path \"{}\"",
                method,
                procedure.kind().as_str(),
                path
            )));
        }

        procedure.call(ctx, input).await
    }
}
