use crate::{
    apis::named::{self, Collection},
    client::GtmClient,
    error::{EntityKind, GtmResult, Operation},
    models::{GeoMap, GeoMapResponse, ResponseStatus},
};

const GEO_MAPS: Collection = Collection {
    kind: EntityKind::GeoMap,
    segment: "geographic-maps",
};

/// Geographic map API operations
pub struct GeoMapApi<'a> {
    client: &'a GtmClient,
}

impl<'a> GeoMapApi<'a> {
    pub fn new(client: &'a GtmClient) -> Self {
        Self { client }
    }

    /// List all geo_maps in a domain
    pub async fn list_geo_maps(&self, domain: &str) -> GtmResult<Vec<GeoMap>> {
        named::list(self.client, GEO_MAPS, domain).await
    }

    /// Get a geographic map by name
    pub async fn get_geo_map(&self, domain: &str, name: &str) -> GtmResult<GeoMap> {
        named::get(self.client, GEO_MAPS, domain, name).await
    }

    /// Create a geographic map
    pub async fn create_geo_map(&self, domain: &str, geo_map: &GeoMap) -> GtmResult<GeoMapResponse> {
        named::put(self.client, GEO_MAPS, domain, &geo_map.name, geo_map, Operation::Create).await
    }

    /// Replace a geographic map definition
    pub async fn update_geo_map(&self, domain: &str, geo_map: &GeoMap) -> GtmResult<Option<ResponseStatus>> {
        let response = named::put(self.client, GEO_MAPS, domain, &geo_map.name, geo_map, Operation::Update).await?;
        Ok(response.status)
    }

    /// Delete a geographic map
    pub async fn delete_geo_map(&self, domain: &str, geo_map: &GeoMap) -> GtmResult<Option<ResponseStatus>> {
        named::delete(self.client, GEO_MAPS, domain, &geo_map.name).await
    }
}
