use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::PlatformConfig;

use super::error::PlatformError;
use super::graphql::GraphQlEnvelope;

/// HTTP client for the commerce platform's Admin GraphQL API.
pub struct AdminApiClient {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

#[derive(Serialize)]
struct GraphQlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

impl AdminApiClient {
    pub fn new(config: &PlatformConfig) -> Self {
        let endpoint = format!(
            "https://{}/admin/api/{}/graphql.json",
            config.shop_domain, config.api_version
        );
        Self::with_endpoint(endpoint, config.access_token.clone())
    }

    /// Client against an explicit endpoint URL. Lets tests aim the
    /// workflows at a local stand-in server.
    pub fn with_endpoint(endpoint: String, access_token: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            endpoint,
            access_token,
        }
    }

    /// Execute one GraphQL document and decode its `data` payload.
    ///
    /// GraphQL-level errors become `PlatformError::GraphQl` here; user
    /// errors inside the payload stay with the caller, since not every
    /// document selects them.
    pub async fn execute<V, D>(&self, query: &str, variables: V) -> Result<D, PlatformError>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        let body = serde_json::to_string(&GraphQlRequest { query, variables })?;

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-Shopify-Access-Token", &self.access_token)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Admin API request failed with status {}: {}", status, body);
            return Err(PlatformError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;

        let envelope: GraphQlEnvelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                let preview: String = body.chars().take(500).collect();
                tracing::error!(
                    "Failed to parse Admin API response: {}. Body: {}",
                    e,
                    preview
                );
                return Err(PlatformError::Json(e));
            }
        };

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                tracing::error!("Admin API returned GraphQL errors: {:?}", messages);
                return Err(PlatformError::GraphQl(messages));
            }
        }

        let data = envelope.data.ok_or(PlatformError::MissingNode("data"))?;
        Ok(serde_json::from_value(data)?)
    }
}
