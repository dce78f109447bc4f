//! API documentation generated from the registered RPC procedures.
//!
//! Every procedure contributes a path at `/api/trpc/<procedure>`. Queries are documented as
//! `GET` operations taking their input through the `input` query parameter, mutations as
//! `POST` operations taking a JSON body. When a document cannot be generated, callers serve
//! [`fallback_document`] instead.

use serde_json::{json, Value};
use thiserror::Error;
use utoipa::{
    openapi::{
        path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn},
        request_body::RequestBodyBuilder,
        tag::{Tag, TagBuilder},
        ComponentsBuilder, ContentBuilder, Info, InfoBuilder, ObjectBuilder, OpenApi,
        OpenApiBuilder, PathItem, PathsBuilder, Ref, RefOr, Required, ResponseBuilder, Schema,
    },
    PartialSchema, ToSchema,
};

use crate::{
    model::api::RpcErrorEnvelope,
    server::rpc::{Procedure, ProcedureKind, ProcedureSchema, RpcRouter},
};

/// `info.title` of every served document
pub const API_TITLE: &str = "Wamumbi Charity Management API";
/// `info.version` of every served document
pub const API_VERSION: &str = "1.0.0";
/// `info.description` of every served document
pub const API_DESCRIPTION: &str = "API documentation for Wamumbi Charity Management System";

/// Prefix procedures are served under
pub const RPC_PATH_PREFIX: &str = "/api/trpc";

/// Minimal document served when generation fails.
pub fn fallback_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": API_TITLE,
            "version": API_VERSION,
            "description": API_DESCRIPTION,
        },
        "paths": {},
        "components": {},
    })
}

/// Reasons a document could not be generated.
#[derive(Error, Debug)]
pub enum DocsError {
    /// A procedure was registered without input and output schemas.
    #[error("Procedure \"{0}\" has no schema to document")]
    MissingSchema(String),
    /// The generated document could not be converted to JSON.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Builds OpenAPI documents for an [`RpcRouter`].
pub struct DocsGenerator {
    info: Info,
    error_components: Vec<(String, RefOr<Schema>)>,
}

impl Default for DocsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DocsGenerator {
    /// Creates a generator with the Wamumbi API info and the shared error schemas
    pub fn new() -> Self {
        let info = InfoBuilder::new()
            .title(API_TITLE)
            .version(API_VERSION)
            .description(Some(API_DESCRIPTION))
            .build();

        let mut error_components = vec![(
            RpcErrorEnvelope::name().into_owned(),
            <RpcErrorEnvelope as PartialSchema>::schema(),
        )];
        RpcErrorEnvelope::schemas(&mut error_components);

        Self {
            info,
            error_components,
        }
    }

    /// Generates the document describing every procedure in `router`.
    ///
    /// # Returns
    /// - `Ok(OpenApi)` - Document with one path per procedure
    /// - `Err(DocsError::MissingSchema)` - A procedure carries no schema
    pub fn generate(&self, router: &RpcRouter) -> Result<OpenApi, DocsError> {
        let mut paths = PathsBuilder::new();
        let mut components = ComponentsBuilder::new();
        let mut tags: Vec<String> = Vec::new();

        for (name, schema) in &self.error_components {
            components = components.schema(name.clone(), schema.clone());
        }

        for procedure in router.procedures() {
            let schema = procedure
                .schema()
                .ok_or_else(|| DocsError::MissingSchema(procedure.path().to_string()))?;

            for (name, component) in &schema.components {
                components = components.schema(name.clone(), component.clone());
            }

            let tag = procedure.tag().to_string();
            if !tags.contains(&tag) {
                tags.push(tag);
            }

            paths = paths.path(
                format!("{}/{}", RPC_PATH_PREFIX, procedure.path()),
                path_item(procedure, schema),
            );
        }

        let tags: Vec<Tag> = tags
            .into_iter()
            .map(|name| TagBuilder::new().name(name).build())
            .collect();

        Ok(OpenApiBuilder::new()
            .info(self.info.clone())
            .paths(paths.build())
            .components(Some(components.build()))
            .tags(Some(tags))
            .build())
    }

    /// Generates the document as JSON.
    pub fn document(&self, router: &RpcRouter) -> Result<Value, DocsError> {
        let openapi = self.generate(router)?;

        Ok(serde_json::to_value(&openapi)?)
    }
}

fn path_item(procedure: &Procedure, schema: &ProcedureSchema) -> PathItem {
    let success = ResponseBuilder::new()
        .description("Procedure output wrapped in the result envelope")
        .content(
            "application/json",
            ContentBuilder::new()
                .schema(Some(result_envelope(schema.output.clone())))
                .build(),
        )
        .build();

    let failure = ResponseBuilder::new()
        .description("Procedure error")
        .content(
            "application/json",
            ContentBuilder::new()
                .schema(Some(Ref::from_schema_name(RpcErrorEnvelope::name())))
                .build(),
        )
        .build();

    let mut operation = OperationBuilder::new()
        .operation_id(Some(procedure.path()))
        .summary(procedure.summary_text())
        .tag(procedure.tag())
        .response("200", success)
        .response("default", failure);

    let method = match procedure.kind() {
        ProcedureKind::Query => {
            operation = operation.parameter(
                ParameterBuilder::new()
                    .name("input")
                    .parameter_in(ParameterIn::Query)
                    .required(Required::False)
                    .description(Some("JSON encoded procedure input"))
                    .schema(Some(schema.input.clone())),
            );

            HttpMethod::Get
        }
        ProcedureKind::Mutation => {
            operation = operation.request_body(Some(
                RequestBodyBuilder::new()
                    .content(
                        "application/json",
                        ContentBuilder::new()
                            .schema(Some(schema.input.clone()))
                            .build(),
                    )
                    .required(Some(Required::True))
                    .build(),
            ));

            HttpMethod::Post
        }
    };

    PathItem::new(method, operation.build())
}

/// `{"result": {"data": <output>}}`
fn result_envelope(output: RefOr<Schema>) -> RefOr<Schema> {
    let result = ObjectBuilder::new()
        .property("data", output)
        .required("data")
        .build();

    let envelope = ObjectBuilder::new()
        .property("result", RefOr::T(Schema::Object(result)))
        .required("result")
        .build();

    RefOr::T(Schema::Object(envelope))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::{fallback_document, DocsError, DocsGenerator};
    use crate::server::{
        error::rpc::RpcError,
        rpc::{app_router, Procedure, ProcedureKind},
    };

    #[test]
    /// Expect one path per procedure using the method matching its kind
    fn documents_every_procedure() {
        let router = app_router();

        let document = DocsGenerator::new().document(&router).unwrap();

        let paths = document["paths"].as_object().unwrap();
        assert_eq!(paths.len(), router.procedures().count());
        assert!(paths["/api/trpc/campaign.list"]["get"].is_object());
        assert!(paths["/api/trpc/campaign.list"]["post"].is_null());
        assert!(paths["/api/trpc/donation.create"]["post"]["requestBody"].is_object());
        assert_eq!(
            paths["/api/trpc/campaign.list"]["get"]["parameters"][0]["name"],
            "input"
        );
    }

    #[test]
    /// Expect input, output and error schemas to be registered as components
    fn collects_component_schemas() {
        let document = DocsGenerator::new().document(&app_router()).unwrap();

        let schemas = document["components"]["schemas"].as_object().unwrap();
        assert!(schemas.contains_key("CreateDonationInput"));
        assert!(schemas.contains_key("CampaignDto"));
        assert!(schemas.contains_key("UserDto"));
        assert!(schemas.contains_key("RpcErrorEnvelope"));
        assert_eq!(document["info"]["title"], "Wamumbi Charity Management API");
    }

    #[test]
    fn wraps_output_in_result_envelope() {
        let document = DocsGenerator::new().document(&app_router()).unwrap();

        let schema = &document["paths"]["/api/trpc/campaign.byId"]["get"]["responses"]["200"]
            ["content"]["application/json"]["schema"];
        assert_eq!(
            schema["properties"]["result"]["properties"]["data"]["$ref"],
            "#/components/schemas/CampaignDto"
        );
    }

    #[test]
    /// Expect generation to fail when a procedure has no schema
    fn fails_on_procedure_without_schema() {
        let router = app_router().procedure(Procedure::new(
            "campaign.raw",
            ProcedureKind::Query,
            |_, _| async { Ok::<_, RpcError>(Value::Null) },
        ));

        let result = DocsGenerator::new().document(&router);

        assert!(matches!(result, Err(DocsError::MissingSchema(path)) if path == "campaign.raw"));
    }

    #[test]
    fn fallback_document_is_exact() {
        let expected = serde_json::json!({
            "openapi": "3.0.3",
            "info": {
                "title": "Wamumbi Charity Management API",
                "version": "1.0.0",
                "description": "API documentation for Wamumbi Charity Management System"
            },
            "paths": {},
            "components": {}
        });

        assert_eq!(fallback_document(), expected);
    }
}
