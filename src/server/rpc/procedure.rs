use std::{future::Future, sync::Arc};

use axum::http::Method;
use futures::future::{BoxFuture, FutureExt};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use utoipa::{
    openapi::{Ref, RefOr, Schema},
    PartialSchema, ToSchema,
};

use crate::server::{error::rpc::RpcError, rpc::context::RpcContext};

/// Result of invoking a procedure with untyped JSON.
pub type ProcedureResult = Result<Value, RpcError>;

type Handler = Arc<dyn Fn(RpcContext, Value) -> BoxFuture<'static, ProcedureResult> + Send + Sync>;

/// Whether a procedure reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    /// Read-only, called with `GET`
    Query,
    /// State changing, called with `POST`
    Mutation,
}

impl ProcedureKind {
    /// HTTP method the procedure must be called with
    pub fn method(&self) -> Method {
        match self {
            Self::Query => Method::GET,
            Self::Mutation => Method::POST,
        }
    }

    /// Lowercase name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

/// Input and output schemas of a procedure along with every schema they reference.
#[derive(Clone)]
pub struct ProcedureSchema {
    /// Reference to the input schema
    pub input: RefOr<Schema>,
    /// Reference to the output schema
    pub output: RefOr<Schema>,
    /// Named schemas to register as OpenAPI components
    pub components: Vec<(String, RefOr<Schema>)>,
}

impl ProcedureSchema {
    /// Collects schemas for an input type `I` and output type `O`.
    pub fn of<I: ToSchema, O: ToSchema>() -> Self {
        let mut components = vec![
            (I::name().into_owned(), <I as PartialSchema>::schema()),
            (O::name().into_owned(), <O as PartialSchema>::schema()),
        ];
        I::schemas(&mut components);
        O::schemas(&mut components);

        Self {
            input: RefOr::Ref(Ref::from_schema_name(I::name())),
            output: RefOr::Ref(Ref::from_schema_name(O::name())),
            components,
        }
    }
}

/// A named server-side function callable over the RPC endpoint.
pub struct Procedure {
    path: String,
    kind: ProcedureKind,
    summary: Option<String>,
    schema: Option<ProcedureSchema>,
    handler: Handler,
}

impl Procedure {
    /// Creates a procedure operating on raw JSON.
    ///
    /// Raw procedures carry no schema until [`Procedure::with_schema`] is called, and the
    /// API documentation cannot be generated while one is registered without it.
    pub fn new<F, Fut>(path: impl Into<String>, kind: ProcedureKind, handler: F) -> Self
    where
        F: Fn(RpcContext, Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ProcedureResult> + Send + 'static,
    {
        Self {
            path: path.into(),
            kind,
            summary: None,
            schema: None,
            handler: Arc::new(move |ctx: RpcContext, input: Value| handler(ctx, input).boxed()),
        }
    }

    /// Creates a typed query procedure.
    pub fn query<I, O, F, Fut>(path: impl Into<String>, handler: F) -> Self
    where
        I: DeserializeOwned + ToSchema + Send + 'static,
        O: Serialize + ToSchema + 'static,
        F: Fn(RpcContext, I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<O, RpcError>> + Send + 'static,
    {
        Self::typed(path, ProcedureKind::Query, handler)
    }

    /// Creates a typed mutation procedure.
    pub fn mutation<I, O, F, Fut>(path: impl Into<String>, handler: F) -> Self
    where
        I: DeserializeOwned + ToSchema + Send + 'static,
        O: Serialize + ToSchema + 'static,
        F: Fn(RpcContext, I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<O, RpcError>> + Send + 'static,
    {
        Self::typed(path, ProcedureKind::Mutation, handler)
    }

    fn typed<I, O, F, Fut>(path: impl Into<String>, kind: ProcedureKind, handler: F) -> Self
    where
        I: DeserializeOwned + ToSchema + Send + 'static,
        O: Serialize + ToSchema + 'static,
        F: Fn(RpcContext, I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<O, RpcError>> + Send + 'static,
    {
        let handler = Arc::new(handler);

        Self::new(path, kind, move |ctx, raw| {
            let handler = handler.clone();

            async move {
                let input = parse_input::<I>(raw)?;
                let output = handler(ctx, input).await?;

                serde_json::to_value(output).map_err(|e| {
                    dioxus_logger::tracing::error!("Failed to serialize procedure output: {}", e);

                    RpcError::internal()
                })
            }
        })
        .with_schema(ProcedureSchema::of::<I, O>())
    }

    /// Sets the one-line summary shown in the API documentation
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Attaches the schemas documenting the procedure's input and output
    pub fn with_schema(mut self, schema: ProcedureSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Dotted procedure path such as `campaign.list`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query or mutation
    pub fn kind(&self) -> ProcedureKind {
        self.kind
    }

    /// Summary set with [`Procedure::summary`]
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Schemas, `None` for procedures built with [`Procedure::new`] alone
    pub fn schema(&self) -> Option<&ProcedureSchema> {
        self.schema.as_ref()
    }

    /// Segment before the first dot, used to group procedures
    pub fn tag(&self) -> &str {
        self.path.split('.').next().unwrap_or(&self.path)
    }

    /// Invokes the procedure with raw JSON input
    pub async fn call(&self, ctx: RpcContext, input: Value) -> ProcedureResult {
        (self.handler)(ctx, input).await
    }
}

/// Deserializes procedure input, treating missing input as an empty object.
fn parse_input<I: DeserializeOwned>(raw: Value) -> Result<I, RpcError> {
    let raw = match raw {
        Value::Null => Value::Object(Default::default()),
        raw => raw,
    };

    serde_json::from_value(raw).map_err(|e| RpcError::bad_request(format!("Invalid input: {}", e)))
}
