use crate::{
    apis::named::{self, Collection},
    client::GtmClient,
    error::{EntityKind, GtmResult, Operation},
    models::{Property, PropertyResponse, ResponseStatus},
};

const PROPERTIES: Collection = Collection {
    kind: EntityKind::Property,
    segment: "properties",
};

/// Property API operations
pub struct PropertyApi<'a> {
    client: &'a GtmClient,
}

impl<'a> PropertyApi<'a> {
    pub fn new(client: &'a GtmClient) -> Self {
        Self { client }
    }

    /// List all properties in a domain
    pub async fn list_properties(&self, domain: &str) -> GtmResult<Vec<Property>> {
        named::list(self.client, PROPERTIES, domain).await
    }

    /// Get a property by name
    pub async fn get_property(&self, domain: &str, name: &str) -> GtmResult<Property> {
        named::get(self.client, PROPERTIES, domain, name).await
    }

    /// Create a property. Properties are upserted by name, so an existing
    /// property with the same name is replaced.
    pub async fn create_property(&self, domain: &str, property: &Property) -> GtmResult<PropertyResponse> {
        named::put(self.client, PROPERTIES, domain, &property.name, property, Operation::Create).await
    }

    /// Replace a property definition
    pub async fn update_property(&self, domain: &str, property: &Property) -> GtmResult<Option<ResponseStatus>> {
        let response = named::put(self.client, PROPERTIES, domain, &property.name, property, Operation::Update).await?;
        Ok(response.status)
    }

    /// Delete a property
    pub async fn delete_property(&self, domain: &str, property: &Property) -> GtmResult<Option<ResponseStatus>> {
        named::delete(self.client, PROPERTIES, domain, &property.name).await
    }
}
