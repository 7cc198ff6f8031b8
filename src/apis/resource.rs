use crate::{
    apis::named::{self, Collection},
    client::GtmClient,
    error::{EntityKind, GtmResult, Operation},
    models::{Resource, ResourceResponse, ResponseStatus},
};

const RESOURCES: Collection = Collection {
    kind: EntityKind::Resource,
    segment: "resources",
};

/// Resource API operations
pub struct ResourceApi<'a> {
    client: &'a GtmClient,
}

impl<'a> ResourceApi<'a> {
    pub fn new(client: &'a GtmClient) -> Self {
        Self { client }
    }

    /// List all resources in a domain
    pub async fn list_resources(&self, domain: &str) -> GtmResult<Vec<Resource>> {
        named::list(self.client, RESOURCES, domain).await
    }

    /// Get a resource by name
    pub async fn get_resource(&self, domain: &str, name: &str) -> GtmResult<Resource> {
        named::get(self.client, RESOURCES, domain, name).await
    }

    /// Create a resource
    pub async fn create_resource(&self, domain: &str, resource: &Resource) -> GtmResult<ResourceResponse> {
        named::put(self.client, RESOURCES, domain, &resource.name, resource, Operation::Create).await
    }

    /// Replace a resource definition
    pub async fn update_resource(&self, domain: &str, resource: &Resource) -> GtmResult<Option<ResponseStatus>> {
        let response = named::put(self.client, RESOURCES, domain, &resource.name, resource, Operation::Update).await?;
        Ok(response.status)
    }

    /// Delete a resource
    pub async fn delete_resource(&self, domain: &str, resource: &Resource) -> GtmResult<Option<ResponseStatus>> {
        named::delete(self.client, RESOURCES, domain, &resource.name).await
    }
}
