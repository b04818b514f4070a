//! REST client for the LUSID API.

use std::future::Future;

use async_trait::async_trait;
use log::{debug, error};
use lusid_models::{
    Configuration, CreatePropertyDefinitionRequest, CreateTransactionPortfolioRequest,
    CutLabelDefinition, DeletedEntityResponse, InstrumentIdTypeDescriptor, Portfolio,
    PropertyDefinition, ResourceList, VersionSummary,
};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::apis::*;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::requests::AsyncResult;

/// Client for the LUSID REST API.
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// # Example
///
/// ```ignore
/// let client = LusidClient::new(&ClientConfig::new("https://example.lusid.com/api", "token"))?;
/// client.delete_portfolio("tutorials", "portfolio-1").await?;
/// ```
#[derive(Debug, Clone)]
pub struct LusidClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: HeaderValue,
    model_configuration: Configuration,
}

impl LusidClient {
    /// Create a new client.
    ///
    /// The configured URL may point at the host or at its `/api` root.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token cannot be used as a header value
    /// or the HTTP client cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let auth_header = HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .map_err(|_| ClientError::auth("Invalid access token format"))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let trimmed = config.api_url.trim_end_matches('/');
        let base_url = trimmed.strip_suffix("/api").unwrap_or(trimmed).to_string();

        Ok(Self {
            client,
            base_url,
            auth_header,
            model_configuration: config.model_configuration(),
        })
    }

    /// Configuration to build validating models with.
    pub fn model_configuration(&self) -> Configuration {
        self.model_configuration
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs a request on the runtime's worker pool and returns a handle to
    /// poll, wait on, or cancel it.
    ///
    /// ```ignore
    /// let pending = client.spawn_request(|c| async move { c.get_lusid_versions().await });
    /// ```
    pub fn spawn_request<F, Fut, T>(&self, request: F) -> AsyncResult<T, ClientError>
    where
        F: FnOnce(LusidClient) -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        AsyncResult::spawn(request(self.clone()))
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers
    }

    /// Builds `{base}/api/{segments...}` with each dynamic segment percent-encoded.
    fn url(&self, resource: &str, segments: &[&str]) -> String {
        let mut url = format!("{}/api/{}", self.base_url, resource);
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.headers(self.headers()).send().await?;
        let (status, body) = Self::read_body(response).await?;

        let value: T = serde_json::from_str(&body).map_err(|e| {
            error!(
                "Failed to deserialize response ({}). Body: {}, Error: {}",
                status, body, e
            );
            ClientError::Json(e)
        })?;
        Ok(value)
    }

    /// Delete endpoints may answer with an empty body.
    async fn send_delete(&self, url: String) -> Result<DeletedEntityResponse> {
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .headers(self.headers())
            .send()
            .await?;
        let (_, body) = Self::read_body(response).await?;

        if body.trim().is_empty() {
            return Ok(DeletedEntityResponse::default());
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn read_body(response: reqwest::Response) -> Result<(u16, String)> {
        let status = response.status();
        let body = response.text().await?;
        debug!("API response ({}): {}", status, body);

        if !status.is_success() {
            return Err(ClientError::api(status.as_u16(), body));
        }
        Ok((status.as_u16(), body))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata & Instruments
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ApplicationMetadataApi for LusidClient {
    async fn get_lusid_versions(&self) -> Result<VersionSummary> {
        let url = self.url("metadata/versions", &[]);
        debug!("GET {}", url);
        self.send(self.client.get(&url)).await
    }
}

#[async_trait]
impl InstrumentsApi for LusidClient {
    async fn get_instrument_identifier_types(
        &self,
    ) -> Result<ResourceList<InstrumentIdTypeDescriptor>> {
        let url = self.url("instruments/identifierTypes", &[]);
        debug!("GET {}", url);
        self.send(self.client.get(&url)).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Portfolios
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl TransactionPortfoliosApi for LusidClient {
    async fn create_portfolio(
        &self,
        scope: &str,
        request: &CreateTransactionPortfolioRequest,
    ) -> Result<Portfolio> {
        let url = self.url("transactionportfolios", &[scope]);
        debug!("POST {} ({})", url, request.code);
        self.send(self.client.post(&url).json(request)).await
    }
}

#[async_trait]
impl PortfoliosApi for LusidClient {
    async fn delete_portfolio(&self, scope: &str, code: &str) -> Result<DeletedEntityResponse> {
        self.send_delete(self.url("portfolios", &[scope, code]))
            .await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Property Definitions & Cut Labels
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PropertyDefinitionsApi for LusidClient {
    async fn create_property_definition(
        &self,
        request: &CreatePropertyDefinitionRequest,
    ) -> Result<PropertyDefinition> {
        let url = self.url("propertydefinitions", &[]);
        debug!(
            "POST {} ({}/{}/{})",
            url, request.domain, request.scope, request.code
        );
        self.send(self.client.post(&url).json(request)).await
    }

    async fn delete_property_definition(
        &self,
        domain: &str,
        scope: &str,
        code: &str,
    ) -> Result<DeletedEntityResponse> {
        self.send_delete(self.url("propertydefinitions", &[domain, scope, code]))
            .await
    }
}

#[async_trait]
impl CutLabelDefinitionsApi for LusidClient {
    async fn create_cut_label_definition(
        &self,
        request: &CutLabelDefinition,
    ) -> Result<CutLabelDefinition> {
        let url = self.url("systemconfiguration/cutlabels", &[]);
        debug!("POST {} ({})", url, request.code);
        self.send(self.client.post(&url).json(request)).await
    }

    async fn delete_cut_label_definition(&self, code: &str) -> Result<DeletedEntityResponse> {
        self.send_delete(self.url("systemconfiguration/cutlabels", &[code]))
            .await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Orders, Recipes & Corporate Action Sources
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl OrdersApi for LusidClient {
    async fn delete_order(&self, scope: &str, code: &str) -> Result<DeletedEntityResponse> {
        self.send_delete(self.url("orders", &[scope, code])).await
    }
}

#[async_trait]
impl ConfigurationRecipeApi for LusidClient {
    async fn delete_configuration_recipe(
        &self,
        scope: &str,
        code: &str,
    ) -> Result<DeletedEntityResponse> {
        self.send_delete(self.url("recipes", &[scope, code])).await
    }
}

#[async_trait]
impl CorporateActionSourcesApi for LusidClient {
    async fn delete_corporate_action_source(
        &self,
        scope: &str,
        code: &str,
    ) -> Result<DeletedEntityResponse> {
        self.send_delete(self.url("corporateactionsources", &[scope, code]))
            .await
    }
}
