use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Successful procedure response: `{"result": {"data": ...}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct RpcSuccessEnvelope<T> {
    pub result: RpcResultData<T>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RpcResultData<T> {
    pub data: T,
}

impl<T> RpcSuccessEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            result: RpcResultData { data },
        }
    }
}

/// Failed procedure response: `{"error": {"message", "code", "data"}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RpcErrorEnvelope {
    pub error: RpcErrorShape,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RpcErrorShape {
    /// Human readable error message
    pub message: String,
    /// JSON-RPC 2.0 error code
    pub code: i32,
    pub data: RpcErrorData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RpcErrorData {
    /// Error code name such as `NOT_FOUND`
    pub code: String,
    pub http_status: u16,
    /// Procedure path the error originated from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Input for procedures that take no arguments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NoInput {}

/// Input for procedures addressing a single record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct IdInput {
    pub id: i32,
}

/// Result of a delete mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DeletedDto {
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Expect error data to use camelCase keys and omit a missing path
    fn error_envelope_serializes_camel_case() {
        let envelope = RpcErrorEnvelope {
            error: RpcErrorShape {
                message: "not found".to_string(),
                code: -32004,
                data: RpcErrorData {
                    code: "NOT_FOUND".to_string(),
                    http_status: 404,
                    path: None,
                },
            },
        };

        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["error"]["data"]["httpStatus"], 404);
        assert!(value["error"]["data"].get("path").is_none());
    }
}
