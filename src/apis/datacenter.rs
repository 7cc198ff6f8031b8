use crate::{
    client::GtmClient,
    error::{EntityKind, GtmError, GtmResult, Operation},
    models::{Datacenter, DatacenterResponse, DefaultDatacenter, ItemList, ResponseStatus},
};
use log::{debug, info};
use reqwest::Method;

/// Datacenter API operations
pub struct DatacenterApi<'a> {
    client: &'a GtmClient,
}

impl<'a> DatacenterApi<'a> {
    pub fn new(client: &'a GtmClient) -> Self {
        Self { client }
    }

    fn list_path(domain: &str) -> String {
        format!("/domains/{}/datacenters", GtmClient::segment(domain))
    }

    fn item_path(domain: &str, datacenter_id: i64) -> String {
        format!("{}/{}", Self::list_path(domain), datacenter_id)
    }

    /// Datacenters are addressed by their server assigned ID
    fn require_id(datacenter: &Datacenter) -> GtmResult<i64> {
        datacenter
            .datacenter_id
            .ok_or_else(|| GtmError::invalid_param("datacenter has no datacenterId"))
    }

    /// List all datacenters in a domain
    pub async fn list_datacenters(&self, domain: &str) -> GtmResult<Vec<Datacenter>> {
        info!("Listing datacenters in domain: {}", domain);
        let path = Self::list_path(domain);
        let req = self.client.request(Method::GET, &path)?;
        debug!("HTTP GET {}", path);

        let list: ItemList<Datacenter> = self.client.execute(req, EntityKind::Domain, domain).await?;
        Ok(list.items)
    }

    /// Get a datacenter by ID
    ///
    /// # Arguments
    /// * `domain` - Domain name
    /// * `datacenter_id` - Numeric datacenter ID
    pub async fn get_datacenter(&self, domain: &str, datacenter_id: i64) -> GtmResult<Datacenter> {
        info!("Getting datacenter {} in domain: {}", datacenter_id, domain);
        let path = Self::item_path(domain, datacenter_id);
        let req = self.client.request(Method::GET, &path)?;
        debug!("HTTP GET {}", path);

        self.client
            .execute(req, EntityKind::Datacenter, &datacenter_id.to_string())
            .await
    }

    /// Create a datacenter; the server assigns its ID
    pub async fn create_datacenter(
        &self,
        domain: &str,
        datacenter: &Datacenter,
    ) -> GtmResult<DatacenterResponse> {
        info!("Creating datacenter {:?} in domain: {}", datacenter.nickname, domain);
        let path = Self::list_path(domain);
        let req = self.client.request(Method::POST, &path)?;
        let req = self.client.with_body(req, datacenter)?;
        debug!("HTTP POST {}", path);

        self.client
            .execute(req, EntityKind::Domain, domain)
            .await
            .map_err(|e| e.in_entity(EntityKind::Domain, domain, Operation::Create))
    }

    /// Create one of the server-managed default datacenters
    pub async fn create_default_datacenter(
        &self,
        domain: &str,
        which: DefaultDatacenter,
    ) -> GtmResult<Datacenter> {
        info!("Creating default datacenter {} in domain: {}", which.path(), domain);
        let path = format!("{}/{}", Self::list_path(domain), which.path());
        let req = self.client.request(Method::POST, &path)?;
        let req = self.client.with_body(req, &serde_json::json!({}))?;
        debug!("HTTP POST {}", path);

        let response: DatacenterResponse = self
            .client
            .execute(req, EntityKind::Domain, domain)
            .await
            .map_err(|e| e.in_entity(EntityKind::Datacenter, which.datacenter_id().to_string(), Operation::Create))?;
        response
            .resource
            .ok_or_else(|| GtmError::InvalidResponse("response carried no datacenter".to_string()))
    }

    /// Replace a datacenter definition
    pub async fn update_datacenter(
        &self,
        domain: &str,
        datacenter: &Datacenter,
    ) -> GtmResult<Option<ResponseStatus>> {
        let datacenter_id = Self::require_id(datacenter)?;
        info!("Updating datacenter {} in domain: {}", datacenter_id, domain);
        let path = Self::item_path(domain, datacenter_id);
        let req = self.client.request(Method::PUT, &path)?;
        let req = self.client.with_body(req, datacenter)?;
        debug!("HTTP PUT {}", path);

        let name = datacenter_id.to_string();
        let response: DatacenterResponse = self
            .client
            .execute(req, EntityKind::Datacenter, &name)
            .await
            .map_err(|e| e.in_entity(EntityKind::Datacenter, name.as_str(), Operation::Update))?;
        Ok(response.status)
    }

    /// Delete a datacenter
    pub async fn delete_datacenter(
        &self,
        domain: &str,
        datacenter: &Datacenter,
    ) -> GtmResult<Option<ResponseStatus>> {
        let datacenter_id = Self::require_id(datacenter)?;
        info!("Deleting datacenter {} in domain: {}", datacenter_id, domain);
        let path = Self::item_path(domain, datacenter_id);
        let req = self.client.request(Method::DELETE, &path)?;
        debug!("HTTP DELETE {}", path);

        let name = datacenter_id.to_string();
        let response: DatacenterResponse = self
            .client
            .execute(req, EntityKind::Datacenter, &name)
            .await
            .map_err(|e| e.in_entity(EntityKind::Datacenter, name.as_str(), Operation::Delete))?;
        Ok(response.status)
    }
}
