use crate::{
    client::GtmClient,
    error::{EntityKind, GtmResult, Operation},
    models::{Domain, DomainItem, DomainResponse, EntityResponse, ItemList, ResponseStatus},
    null_fields::{NullFieldMap, NullFieldSchema},
};
use log::{debug, info};
use reqwest::{Method, RequestBuilder};

/// Optional query arguments for domain create and update
#[derive(Debug, Clone, Default)]
pub struct DomainQueryArgs {
    /// Contract, with or without the `ctr_` prefix
    pub contract_id: Option<String>,
    /// Group, with or without the `grp_` prefix
    pub group_id: Option<String>,
}

impl DomainQueryArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contract(mut self, contract_id: impl Into<String>) -> Self {
        self.contract_id = Some(contract_id.into());
        self
    }

    pub fn group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// The API expects bare IDs
    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        let mut req = request;

        if let Some(contract) = &self.contract_id {
            let contract = contract.strip_prefix("ctr_").unwrap_or(contract);
            req = req.query(&[("contractId", contract)]);
        }

        if let Some(group) = &self.group_id {
            let group = group.strip_prefix("grp_").unwrap_or(group);
            req = req.query(&[("gid", group)]);
        }

        req
    }
}

/// Domain API operations
pub struct DomainApi<'a> {
    client: &'a GtmClient,
}

impl<'a> DomainApi<'a> {
    pub fn new(client: &'a GtmClient) -> Self {
        Self { client }
    }

    fn path(name: &str) -> String {
        format!("/domains/{}", GtmClient::segment(name))
    }

    /// List all domains visible to the caller
    pub async fn list_domains(&self) -> GtmResult<Vec<DomainItem>> {
        info!("Listing domains");
        let req = self.client.request(Method::GET, "/domains")?;
        debug!("HTTP GET /domains");

        let list: ItemList<DomainItem> = self.client.execute_list(req).await?;
        Ok(list.items)
    }

    /// Get a domain with all of its children
    ///
    /// # Arguments
    /// * `name` - Domain name, e.g. "example.akadns.net"
    pub async fn get_domain(&self, name: &str) -> GtmResult<Domain> {
        info!("Getting domain: {}", name);
        let path = Self::path(name);
        let req = self.client.request(Method::GET, &path)?;
        debug!("HTTP GET {}", path);

        self.client.execute(req, EntityKind::Domain, name).await
    }

    /// Get a domain as an untyped JSON tree, keeping explicit nulls
    pub async fn get_domain_value(&self, name: &str) -> GtmResult<serde_json::Value> {
        info!("Getting raw domain: {}", name);
        let path = Self::path(name);
        let req = self.client.request(Method::GET, &path)?;
        debug!("HTTP GET {}", path);

        self.client.execute(req, EntityKind::Domain, name).await
    }

    /// Current propagation status of a domain
    pub async fn get_domain_status(&self, name: &str) -> GtmResult<ResponseStatus> {
        info!("Getting status of domain: {}", name);
        let path = format!("{}/status/current", Self::path(name));
        let req = self.client.request(Method::GET, &path)?;
        debug!("HTTP GET {}", path);

        self.client.execute(req, EntityKind::Domain, name).await
    }

    /// Create a new domain
    ///
    /// # Arguments
    /// * `domain` - Domain definition; `name` and `domain_type` are required
    /// * `args` - Contract and group to create the domain in
    pub async fn create_domain(
        &self,
        domain: &Domain,
        args: &DomainQueryArgs,
    ) -> GtmResult<DomainResponse> {
        info!("Creating domain: {}", domain.name);
        let req = self.client.request(Method::POST, "/domains")?;
        let req = args.apply(self.client.with_body(req, domain)?);
        debug!("HTTP POST /domains with {:?}", args);

        self.client
            .execute(req, EntityKind::Domain, &domain.name)
            .await
            .map_err(|e| e.in_entity(EntityKind::Domain, domain.name.as_str(), Operation::Create))
    }

    /// Replace a domain definition
    pub async fn update_domain(
        &self,
        domain: &Domain,
        args: &DomainQueryArgs,
    ) -> GtmResult<Option<ResponseStatus>> {
        info!("Updating domain: {}", domain.name);
        let path = Self::path(&domain.name);
        let req = self.client.request(Method::PUT, &path)?;
        let req = args.apply(self.client.with_body(req, domain)?);
        debug!("HTTP PUT {} with {:?}", path, args);

        let response: DomainResponse = self
            .client
            .execute(req, EntityKind::Domain, &domain.name)
            .await
            .map_err(|e| e.in_entity(EntityKind::Domain, domain.name.as_str(), Operation::Update))?;
        Ok(response.status)
    }

    /// Delete a domain
    pub async fn delete_domain(&self, name: &str) -> GtmResult<Option<ResponseStatus>> {
        info!("Deleting domain: {}", name);
        let path = Self::path(name);
        let req = self.client.request(Method::DELETE, &path)?;
        debug!("HTTP DELETE {}", path);

        let response: EntityResponse<serde_json::Value> = self
            .client
            .execute(req, EntityKind::Domain, name)
            .await
            .map_err(|e| e.in_entity(EntityKind::Domain, name, Operation::Delete))?;
        Ok(response.status)
    }

    /// Fetch a domain and report which of its fields are explicitly null
    pub async fn null_field_map(&self, name: &str) -> GtmResult<NullFieldMap> {
        self.null_field_map_with(name, &NullFieldSchema::default()).await
    }

    /// Same as [`null_field_map`](Self::null_field_map) with custom schema field names
    pub async fn null_field_map_with(
        &self,
        name: &str,
        schema: &NullFieldSchema,
    ) -> GtmResult<NullFieldMap> {
        let value = self.get_domain_value(name).await?;
        let map = NullFieldMap::with_schema(&value, schema)?;
        Ok(map)
    }
}
