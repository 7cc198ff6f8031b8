use crate::{
    apis::named::{self, Collection},
    client::GtmClient,
    error::{EntityKind, GtmResult, Operation},
    models::{CidrMap, CidrMapResponse, ResponseStatus},
};

const CIDR_MAPS: Collection = Collection {
    kind: EntityKind::CidrMap,
    segment: "cidr-maps",
};

/// CIDR map API operations
pub struct CidrMapApi<'a> {
    client: &'a GtmClient,
}

impl<'a> CidrMapApi<'a> {
    pub fn new(client: &'a GtmClient) -> Self {
        Self { client }
    }

    /// List all cidr_maps in a domain
    pub async fn list_cidr_maps(&self, domain: &str) -> GtmResult<Vec<CidrMap>> {
        named::list(self.client, CIDR_MAPS, domain).await
    }

    /// Get a CIDR map by name
    pub async fn get_cidr_map(&self, domain: &str, name: &str) -> GtmResult<CidrMap> {
        named::get(self.client, CIDR_MAPS, domain, name).await
    }

    /// Create a CIDR map
    pub async fn create_cidr_map(&self, domain: &str, cidr_map: &CidrMap) -> GtmResult<CidrMapResponse> {
        named::put(self.client, CIDR_MAPS, domain, &cidr_map.name, cidr_map, Operation::Create).await
    }

    /// Replace a CIDR map definition
    pub async fn update_cidr_map(&self, domain: &str, cidr_map: &CidrMap) -> GtmResult<Option<ResponseStatus>> {
        let response = named::put(self.client, CIDR_MAPS, domain, &cidr_map.name, cidr_map, Operation::Update).await?;
        Ok(response.status)
    }

    /// Delete a CIDR map
    pub async fn delete_cidr_map(&self, domain: &str, cidr_map: &CidrMap) -> GtmResult<Option<ResponseStatus>> {
        named::delete(self.client, CIDR_MAPS, domain, &cidr_map.name).await
    }
}
