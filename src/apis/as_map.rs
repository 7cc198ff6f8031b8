use crate::{
    apis::named::{self, Collection},
    client::GtmClient,
    error::{EntityKind, GtmResult, Operation},
    models::{AsMap, AsMapResponse, ResponseStatus},
};

const AS_MAPS: Collection = Collection {
    kind: EntityKind::AsMap,
    segment: "as-maps",
};

/// AS map API operations
pub struct AsMapApi<'a> {
    client: &'a GtmClient,
}

impl<'a> AsMapApi<'a> {
    pub fn new(client: &'a GtmClient) -> Self {
        Self { client }
    }

    /// List all as_maps in a domain
    pub async fn list_as_maps(&self, domain: &str) -> GtmResult<Vec<AsMap>> {
        named::list(self.client, AS_MAPS, domain).await
    }

    /// Get a AS map by name
    pub async fn get_as_map(&self, domain: &str, name: &str) -> GtmResult<AsMap> {
        named::get(self.client, AS_MAPS, domain, name).await
    }

    /// Create a AS map
    pub async fn create_as_map(&self, domain: &str, as_map: &AsMap) -> GtmResult<AsMapResponse> {
        named::put(self.client, AS_MAPS, domain, &as_map.name, as_map, Operation::Create).await
    }

    /// Replace a AS map definition
    pub async fn update_as_map(&self, domain: &str, as_map: &AsMap) -> GtmResult<Option<ResponseStatus>> {
        let response = named::put(self.client, AS_MAPS, domain, &as_map.name, as_map, Operation::Update).await?;
        Ok(response.status)
    }

    /// Delete a AS map
    pub async fn delete_as_map(&self, domain: &str, as_map: &AsMap) -> GtmResult<Option<ResponseStatus>> {
        named::delete(self.client, AS_MAPS, domain, &as_map.name).await
    }
}
