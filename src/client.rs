use crate::{
    apis::{AsMapApi, CidrMapApi, DatacenterApi, DomainApi, GeoMapApi, PropertyApi, ResourceApi},
    auth::Authentication,
    config::{ClientConfig, SchemaVersion},
    error::{ApiProblem, EntityKind, GtmError, GtmResult},
};
use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

/// Path prefix of the GTM configuration API
pub const API_BASE: &str = "/config-gtm/v1";

/// Main GTM client
#[derive(Clone)]
pub struct GtmClient {
    client: Client,
    base_url: Url,
    schema_version: SchemaVersion,
    auth: Arc<dyn Authentication>,
}

impl GtmClient {
    /// Create a new GTM client for the given API host
    pub fn new(
        base_url: impl AsRef<str>,
        auth: impl Authentication + 'static,
    ) -> GtmResult<Self> {
        Self::from_config(ClientConfig::new(base_url.as_ref()), auth)
    }

    /// Create a new GTM client from a full configuration
    pub fn from_config(
        config: ClientConfig,
        auth: impl Authentication + 'static,
    ) -> GtmResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Self::with_client(client, config, auth)
    }

    /// Create a new GTM client with custom reqwest client
    pub fn with_client(
        client: Client,
        config: ClientConfig,
        auth: impl Authentication + 'static,
    ) -> GtmResult<Self> {
        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            client,
            base_url,
            schema_version: config.schema_version,
            auth: Arc::new(auth),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Schema version announced in request headers
    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    /// Get Domain API
    pub fn domains(&self) -> DomainApi<'_> {
        DomainApi::new(self)
    }

    /// Get Datacenter API
    pub fn datacenters(&self) -> DatacenterApi<'_> {
        DatacenterApi::new(self)
    }

    /// Get Property API
    pub fn properties(&self) -> PropertyApi<'_> {
        PropertyApi::new(self)
    }

    /// Get Resource API
    pub fn resources(&self) -> ResourceApi<'_> {
        ResourceApi::new(self)
    }

    /// Get CIDR map API
    pub fn cidr_maps(&self) -> CidrMapApi<'_> {
        CidrMapApi::new(self)
    }

    /// Get geographic map API
    pub fn geo_maps(&self) -> GeoMapApi<'_> {
        GeoMapApi::new(self)
    }

    /// Get AS map API
    pub fn as_maps(&self) -> AsMapApi<'_> {
        AsMapApi::new(self)
    }

    /// Build a request to a path below `/config-gtm/v1` with the schema
    /// version header set
    pub fn request(&self, method: Method, path: &str) -> GtmResult<RequestBuilder> {
        let url = self.base_url.join(&format!("{}{}", API_BASE, path))?;
        let request = self
            .client
            .request(method, url)
            .header(ACCEPT, self.schema_version.media_type());

        Ok(request)
    }

    /// Attach a JSON body using the versioned media type
    pub fn with_body<B: Serialize + ?Sized>(
        &self,
        request: RequestBuilder,
        body: &B,
    ) -> GtmResult<RequestBuilder> {
        let payload = serde_json::to_vec(body)?;
        Ok(request
            .header(CONTENT_TYPE, self.schema_version.media_type())
            .body(payload))
    }

    /// Sign, send and decode a request. A 404 is reported as `NotFound` for
    /// the given entity.
    pub async fn execute<T>(
        &self,
        request: RequestBuilder,
        kind: EntityKind,
        name: &str,
    ) -> GtmResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self.send(request).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GtmError::NotFound {
                kind,
                name: name.to_string(),
            });
        }
        self.handle_response(response).await
    }

    /// Like [`execute`](Self::execute) for calls that address no single
    /// entity; a 404 is an ordinary API error.
    pub async fn execute_list<T>(&self, request: RequestBuilder) -> GtmResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self.send(request).await?;
        self.handle_response(response).await
    }

    async fn send(&self, request: RequestBuilder) -> GtmResult<Response> {
        let mut request = request.build()?;
        self.auth.authenticate(&mut request).await?;
        debug!("HTTP {} {}", request.method(), request.url());

        let response = self.client.execute(request).await?;
        debug!("HTTP response {} from {}", response.status(), response.url());
        Ok(response)
    }

    /// Handle response and deserialize JSON
    async fn handle_response<T>(&self, response: Response) -> GtmResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            let value = serde_json::from_slice(&body)?;
            Ok(value)
        } else {
            self.handle_error_response(status, response).await
        }
    }

    /// Handle error responses
    async fn handle_error_response<T>(&self, status: StatusCode, response: Response) -> GtmResult<T> {
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!("Failed to read error body for HTTP {}: {}", status, e);
                String::new()
            }
        };
        let problem = serde_json::from_str::<ApiProblem>(&body).unwrap_or_else(|_| ApiProblem {
            title: Some(format!("HTTP {}", status)),
            detail: (!body.is_empty()).then_some(body),
            status: Some(status.as_u16()),
            ..ApiProblem::default()
        });
        debug!("API error {}: {:?}", status, problem);

        match status {
            StatusCode::UNAUTHORIZED => Err(GtmError::auth_error(
                problem.message().unwrap_or("unauthorized").to_string(),
            )),
            _ => Err(GtmError::api_error(status.as_u16(), problem)),
        }
    }

    /// Percent-encode a single path segment
    pub fn segment(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }
}
