#[cfg(feature = "web")]
use serde::de::DeserializeOwned;

#[cfg(feature = "web")]
use crate::model::api::{RpcErrorEnvelope, RpcSuccessEnvelope};

/// Call a query procedure without input and unwrap its result envelope
#[cfg(feature = "web")]
pub async fn query<T: DeserializeOwned>(procedure: &str) -> Result<T, String> {
    use reqwasm::http::Request;

    let response = Request::get(&format!("/api/trpc/{}", procedure))
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let envelope = response
                .json::<RpcSuccessEnvelope<T>>()
                .await
                .map_err(|e| format!("Failed to parse {} response: {}", procedure, e))?;
            Ok(envelope.result.data)
        }
        _ => {
            if let Ok(envelope) = response.json::<RpcErrorEnvelope>().await {
                Err(format!(
                    "Request failed with status {}: {}",
                    response.status(),
                    envelope.error.message
                ))
            } else {
                Err(format!("Request failed with status {}", response.status()))
            }
        }
    }
}
