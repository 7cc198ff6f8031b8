//! Shared calls for domain children addressed by name
//! (properties, resources and the three map kinds).

use crate::{
    client::GtmClient,
    error::{EntityKind, GtmResult, Operation},
    models::{EntityResponse, ItemList, ResponseStatus},
};
use log::{debug, info};
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// A named collection below `/domains/{domain}/`
#[derive(Debug, Clone, Copy)]
pub(crate) struct Collection {
    pub kind: EntityKind,
    pub segment: &'static str,
}

impl Collection {
    fn list_path(&self, domain: &str) -> String {
        format!("/domains/{}/{}", GtmClient::segment(domain), self.segment)
    }

    fn item_path(&self, domain: &str, name: &str) -> String {
        format!("{}/{}", self.list_path(domain), GtmClient::segment(name))
    }
}

pub(crate) async fn list<T>(client: &GtmClient, coll: Collection, domain: &str) -> GtmResult<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    info!("Listing {} entries in domain: {}", coll.kind, domain);
    let path = coll.list_path(domain);
    let req = client.request(Method::GET, &path)?;
    debug!("HTTP GET {}", path);

    let list: ItemList<T> = client.execute(req, EntityKind::Domain, domain).await?;
    Ok(list.items)
}

pub(crate) async fn get<T>(client: &GtmClient, coll: Collection, domain: &str, name: &str) -> GtmResult<T>
where
    T: for<'de> Deserialize<'de>,
{
    info!("Getting {} {} in domain: {}", coll.kind, name, domain);
    let path = coll.item_path(domain, name);
    let req = client.request(Method::GET, &path)?;
    debug!("HTTP GET {}", path);

    client.execute(req, coll.kind, name).await
}

/// Create and update are both a PUT on the named path
pub(crate) async fn put<T>(
    client: &GtmClient,
    coll: Collection,
    domain: &str,
    name: &str,
    body: &T,
    op: Operation,
) -> GtmResult<EntityResponse<T>>
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    info!("Saving ({}) {} {} in domain: {}", op, coll.kind, name, domain);
    let path = coll.item_path(domain, name);
    let req = client.request(Method::PUT, &path)?;
    let req = client.with_body(req, body)?;
    debug!("HTTP PUT {}", path);

    client
        .execute(req, coll.kind, name)
        .await
        .map_err(|e| e.in_entity(coll.kind, name, op))
}

pub(crate) async fn delete(
    client: &GtmClient,
    coll: Collection,
    domain: &str,
    name: &str,
) -> GtmResult<Option<ResponseStatus>> {
    info!("Deleting {} {} in domain: {}", coll.kind, name, domain);
    let path = coll.item_path(domain, name);
    let req = client.request(Method::DELETE, &path)?;
    debug!("HTTP DELETE {}", path);

    let response: EntityResponse<serde_json::Value> = client
        .execute(req, coll.kind, name)
        .await
        .map_err(|e| e.in_entity(coll.kind, name, Operation::Delete))?;
    Ok(response.status)
}

