//! Null field discovery over a decoded domain.
//!
//! The API distinguishes a field that is present with a `null` value from one
//! that is absent. Typed models lose that distinction, so this module walks the
//! raw JSON tree of a domain and records, per object, which fields were
//! explicitly null. Objects inside child collections are identified by their
//! `datacenterId`, else their `name`, else the literal `unknown`.

use crate::error::MalformedInput;
use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Reports for the objects of one child collection, keyed by object identifier
pub type ObjectReports = BTreeMap<String, NullFieldReport>;

/// Null fields found on a single object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NullFieldReport {
    /// Capitalized names of fields that were null, including the null fields
    /// of directly nested (non-array) objects
    pub core_fields: BTreeSet<String>,
    /// Nested child collections, keyed by capitalized field name
    pub child_fields: BTreeMap<String, ObjectReports>,
}

impl NullFieldReport {
    /// True when no null fields were found at this level or below
    pub fn is_empty(&self) -> bool {
        self.core_fields.is_empty() && self.child_fields.is_empty()
    }

    /// Whether the (capitalized) field was null on this object
    pub fn contains(&self, field: &str) -> bool {
        self.core_fields.contains(field)
    }

    /// Report of one object inside a nested collection
    pub fn child(&self, collection: &str, id: &str) -> Option<&NullFieldReport> {
        self.child_fields.get(collection)?.get(id)
    }
}

/// Field names the walker recognizes.
///
/// These are tied to a specific version of the domain schema; upgrading the
/// schema means reviewing this list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullFieldSchema {
    /// Root fields holding arrays of child objects
    pub child_collections: Vec<String>,
    /// Numeric identifier field, preferred when present
    pub id_field: String,
    /// Name field, used when the numeric identifier is absent
    pub name_field: String,
    /// Identifier used for objects carrying neither field
    pub fallback_id: String,
    /// Maximum nesting of object collections below the root
    pub max_depth: usize,
}

pub const PROPERTIES: &str = "properties";
pub const DATACENTERS: &str = "datacenters";
pub const RESOURCES: &str = "resources";
pub const CIDR_MAPS: &str = "cidrMaps";
pub const GEOGRAPHIC_MAPS: &str = "geographicMaps";
pub const AS_MAPS: &str = "asMaps";

impl NullFieldSchema {
    /// Recognized fields of the 1.4 domain schema
    pub fn v1_4() -> Self {
        Self {
            child_collections: [PROPERTIES, DATACENTERS, RESOURCES, CIDR_MAPS, GEOGRAPHIC_MAPS, AS_MAPS]
                .iter()
                .map(|field| field.to_string())
                .collect(),
            id_field: "datacenterId".to_string(),
            name_field: "name".to_string(),
            fallback_id: "unknown".to_string(),
            max_depth: 16,
        }
    }

    fn is_child_collection(&self, field: &str) -> bool {
        self.child_collections.iter().any(|c| c == field)
    }
}

impl Default for NullFieldSchema {
    fn default() -> Self {
        Self::v1_4()
    }
}

/// Null fields of a whole domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NullFieldMap {
    /// Null fields on the domain object itself
    pub domain: NullFieldReport,
    /// One entry per recognized child collection present on the domain,
    /// keyed by the API field name (e.g. `datacenters`)
    pub collections: BTreeMap<String, ObjectReports>,
    /// Number of objects whose identifier repeated an earlier sibling's.
    /// The later object replaces the earlier one in the report.
    pub collisions: usize,
}

impl NullFieldMap {
    /// Walk a decoded domain using the 1.4 schema field names
    pub fn from_value(domain: &Value) -> Result<Self, MalformedInput> {
        Self::with_schema(domain, &NullFieldSchema::default())
    }

    /// Walk a decoded domain using custom schema field names
    pub fn with_schema(domain: &Value, schema: &NullFieldSchema) -> Result<Self, MalformedInput> {
        let mut walker = Walker {
            schema,
            collisions: 0,
        };
        walker.walk_root(domain)
    }

    /// Reports for a child collection by API field name
    pub fn collection(&self, field: &str) -> Option<&ObjectReports> {
        self.collections.get(field)
    }

    pub fn properties(&self) -> Option<&ObjectReports> {
        self.collection(PROPERTIES)
    }

    pub fn datacenters(&self) -> Option<&ObjectReports> {
        self.collection(DATACENTERS)
    }

    pub fn resources(&self) -> Option<&ObjectReports> {
        self.collection(RESOURCES)
    }

    pub fn cidr_maps(&self) -> Option<&ObjectReports> {
        self.collection(CIDR_MAPS)
    }

    pub fn geo_maps(&self) -> Option<&ObjectReports> {
        self.collection(GEOGRAPHIC_MAPS)
    }

    pub fn as_maps(&self) -> Option<&ObjectReports> {
        self.collection(AS_MAPS)
    }
}

/// Uppercase the first character of a JSON field name to match the typed
/// model's naming. `cname` is special: the models spell it `CName`.
pub fn capitalize_field(field: &str) -> String {
    let mut chars = field.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out: String = first.to_uppercase().collect();
    if field == "cname" {
        out.extend(chars.next().into_iter().flat_map(char::to_uppercase));
    }
    out.push_str(chars.as_str());
    out
}

struct Walker<'s> {
    schema: &'s NullFieldSchema,
    collisions: usize,
}

impl Walker<'_> {
    fn walk_root(&mut self, root: &Value) -> Result<NullFieldMap, MalformedInput> {
        let fields = root.as_object().ok_or_else(|| MalformedInput::ExpectedObjectNode {
            path: "$".to_string(),
        })?;

        let mut map = NullFieldMap::default();
        for (field, value) in fields {
            if value.is_null() {
                map.domain.core_fields.insert(capitalize_field(field));
                continue;
            }
            if !self.schema.is_child_collection(field) {
                continue;
            }

            let path = format!("$.{}", field);
            let items = value
                .as_array()
                .ok_or_else(|| MalformedInput::ExpectedArrayNode { path: path.clone() })?;
            let reports = self.walk_object_list(items, &path, 1)?;
            map.collections.insert(field.clone(), reports);
        }

        map.collisions = self.collisions;
        debug!(
            "Null field walk: {} domain fields, {} collections, {} collisions",
            map.domain.core_fields.len(),
            map.collections.len(),
            map.collisions
        );
        Ok(map)
    }

    fn walk_object_list(
        &mut self,
        items: &[Value],
        path: &str,
        depth: usize,
    ) -> Result<ObjectReports, MalformedInput> {
        if depth > self.schema.max_depth {
            return Err(MalformedInput::DepthExceeded {
                path: path.to_string(),
            });
        }

        let mut reports = ObjectReports::new();
        for (index, item) in items.iter().enumerate() {
            let item_path = format!("{}[{}]", path, index);
            let fields = item
                .as_object()
                .ok_or_else(|| MalformedInput::ExpectedObjectNode {
                    path: item_path.clone(),
                })?;

            let (id, report) = self.walk_object(fields, &item_path, depth)?;
            if reports.insert(id.clone(), report).is_some() {
                self.collisions += 1;
                warn!(
                    "Identifier \"{}\" repeated at {}; earlier null field report replaced",
                    id, item_path
                );
            }
        }

        Ok(reports)
    }

    fn walk_object(
        &mut self,
        fields: &Map<String, Value>,
        path: &str,
        depth: usize,
    ) -> Result<(String, NullFieldReport), MalformedInput> {
        let mut report = NullFieldReport::default();
        let mut name = None;
        let mut object_id = None;

        for (field, value) in fields {
            match value {
                Value::Null => {
                    report.core_fields.insert(capitalize_field(field));
                }
                // Struct-valued fields are flattened one level into this object
                Value::Object(nested) => {
                    report.core_fields.extend(
                        nested
                            .iter()
                            .filter(|(_, v)| v.is_null())
                            .map(|(k, _)| capitalize_field(k)),
                    );
                }
                Value::Array(elements) => {
                    if is_leaf_array(elements) {
                        continue;
                    }
                    let child_path = format!("{}.{}", path, field);
                    let children = self.walk_object_list(elements, &child_path, depth + 1)?;
                    report.child_fields.insert(capitalize_field(field), children);
                }
                Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                    if *field == self.schema.id_field {
                        object_id = Some(scalar_string(value));
                    } else if *field == self.schema.name_field {
                        name = Some(scalar_string(value));
                    }
                }
            }
        }

        let id = object_id
            .filter(|id| !id.is_empty())
            .or_else(|| name.filter(|name| !name.is_empty()))
            .unwrap_or_else(|| self.schema.fallback_id.clone());

        Ok((id, report))
    }
}

/// Arrays of primitives carry no per-element null information. Null
/// elements are skipped when deciding what the array holds.
fn is_leaf_array(elements: &[Value]) -> bool {
    matches!(
        elements.iter().find(|v| !v.is_null()),
        None | Some(Value::String(_)) | Some(Value::Number(_)) | Some(Value::Bool(_))
    )
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            // Integral floats key the same as their integer form
            Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                (f as i64).to_string()
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn capitalizes_first_character() {
        assert_eq!(capitalize_field("city"), "City");
        assert_eq!(capitalize_field("loadObject"), "LoadObject");
        assert_eq!(capitalize_field("X"), "X");
        assert_eq!(capitalize_field(""), "");
    }

    #[test]
    fn capitalizes_cname_twice() {
        assert_eq!(capitalize_field("cname"), "CName");
        assert_eq!(capitalize_field("cnameCoalescingEnabled"), "CnameCoalescingEnabled");
    }

    #[test]
    fn plain_object_has_empty_report() {
        let map = NullFieldMap::from_value(&json!({
            "name": "example.akadns.net",
            "type": "basic",
            "pingInterval": 60,
            "loadFeedback": true
        }))
        .unwrap();

        assert!(map.domain.is_empty());
        assert!(map.collections.is_empty());
        assert_eq!(map.collisions, 0);
    }

    #[test]
    fn records_null_root_fields() {
        let map = NullFieldMap::from_value(&json!({"x": null, "cname": null, "y": 1})).unwrap();
        let expected: BTreeSet<String> = ["X", "CName"].iter().map(|s| s.to_string()).collect();
        assert_eq!(map.domain.core_fields, expected);
    }

    #[test]
    fn missing_collection_is_absent_not_empty() {
        let map = NullFieldMap::from_value(&json!({"datacenters": []})).unwrap();
        assert_eq!(map.datacenters(), Some(&ObjectReports::new()));
        assert!(map.properties().is_none());
    }

    #[test]
    fn datacenters_keyed_by_id() {
        let map = NullFieldMap::from_value(&json!({
            "name": null,
            "datacenters": [
                {"datacenterId": 1, "city": null},
                {"datacenterId": 2, "city": "NYC"}
            ]
        }))
        .unwrap();

        assert!(map.domain.contains("Name"));
        assert_eq!(map.domain.core_fields.len(), 1);

        let dcs = map.datacenters().unwrap();
        assert_eq!(dcs.len(), 2);
        assert!(dcs["1"].contains("City"));
        assert!(dcs["2"].core_fields.is_empty());
    }

    #[test]
    fn id_takes_priority_over_name() {
        let map = NullFieldMap::from_value(&json!({
            "datacenters": [{"datacenterId": 3131, "nickname": "dc", "name": "ignored"}]
        }))
        .unwrap();
        assert!(map.datacenters().unwrap().contains_key("3131"));
    }

    #[test]
    fn null_name_falls_back_to_unknown() {
        let map = NullFieldMap::from_value(&json!({
            "properties": [{"name": null, "ttl": 30}]
        }))
        .unwrap();
        let props = map.properties().unwrap();
        assert!(props["unknown"].contains("Name"));
    }

    #[test]
    fn nested_object_nulls_fold_into_parent() {
        let map = NullFieldMap::from_value(&json!({
            "datacenters": [{
                "datacenterId": 7,
                "defaultLoadObject": {
                    "loadObject": null,
                    "loadObjectPort": 0,
                    "loadServers": null,
                    "deeper": {"ignored": null}
                }
            }]
        }))
        .unwrap();

        let report = &map.datacenters().unwrap()["7"];
        let expected: BTreeSet<String> = ["LoadObject", "LoadServers"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(report.core_fields, expected);
        assert!(report.child_fields.is_empty());
    }

    #[test]
    fn primitive_arrays_are_leaves() {
        let map = NullFieldMap::from_value(&json!({
            "geographicMaps": [{
                "name": "geo",
                "countries": ["US", "CA"],
                "weights": [1.5, 2.5],
                "flags": [true, false],
                "empty": []
            }]
        }))
        .unwrap();

        let report = &map.geo_maps().unwrap()["geo"];
        assert!(report.is_empty());
    }

    #[test]
    fn nulls_inside_primitive_arrays_are_ignored() {
        let map = NullFieldMap::from_value(&json!({
            "resources": [{
                "name": "r",
                "servers": ["a", null],
                "ports": [1, null],
                "aliases": [null, "b"],
                "unset": [null]
            }]
        }))
        .unwrap();

        let report = &map.resources().unwrap()["r"];
        assert!(report.is_empty());
        assert!(!report.child_fields.contains_key("Servers"));
        assert!(!report.child_fields.contains_key("Aliases"));
    }

    #[test]
    fn integral_float_ids_key_like_integers() {
        let map = NullFieldMap::from_value(&json!({
            "datacenters": [
                {"datacenterId": 1.0, "city": null},
                {"datacenterId": 2.5, "city": null}
            ]
        }))
        .unwrap();

        let datacenters = map.datacenters().unwrap();
        assert!(datacenters["1"].contains("City"));
        assert!(datacenters.contains_key("2.5"));
        assert!(!datacenters.contains_key("1.0"));
    }

    #[test]
    fn object_arrays_recurse() {
        let map = NullFieldMap::from_value(&json!({
            "properties": [{
                "name": "www",
                "trafficTargets": [
                    {"datacenterId": 1, "handoutCName": null},
                    {"datacenterId": 2, "handoutCName": "edge.example.net"}
                ],
                "livenessTests": [
                    {"name": "http", "testObjectPassword": null},
                    {"name": "https", "testObjectPassword": null}
                ]
            }]
        }))
        .unwrap();

        let www = &map.properties().unwrap()["www"];
        assert!(www.core_fields.is_empty());
        assert!(www.child("TrafficTargets", "1").unwrap().contains("HandoutCName"));
        assert!(www.child("TrafficTargets", "2").unwrap().core_fields.is_empty());
        assert_eq!(www.child_fields["LivenessTests"].len(), 2);
        assert!(www.child("LivenessTests", "https").unwrap().contains("TestObjectPassword"));
    }

    #[test]
    fn unidentified_objects_collapse_to_last() {
        let map = NullFieldMap::from_value(&json!({
            "asMaps": [
                {"first": null},
                {"second": null}
            ]
        }))
        .unwrap();

        let maps = map.as_maps().unwrap();
        assert_eq!(maps.len(), 1);
        assert!(maps["unknown"].contains("Second"));
        assert!(!maps["unknown"].contains("First"));
        assert_eq!(map.collisions, 1);
    }

    #[test]
    fn collisions_counted_at_any_depth() {
        let map = NullFieldMap::from_value(&json!({
            "cidrMaps": [{
                "name": "cidr",
                "assignments": [
                    {"datacenterId": 5, "nickname": null},
                    {"datacenterId": 5, "nickname": "dup"}
                ]
            }]
        }))
        .unwrap();
        assert_eq!(map.collisions, 1);
    }

    #[test]
    fn rejects_non_object_root() {
        let err = NullFieldMap::from_value(&json!([1, 2])).unwrap_err();
        assert_eq!(
            err,
            MalformedInput::ExpectedObjectNode {
                path: "$".to_string()
            }
        );
    }

    #[test]
    fn rejects_non_array_collection() {
        let err = NullFieldMap::from_value(&json!({"datacenters": {"datacenterId": 1}})).unwrap_err();
        assert_eq!(
            err,
            MalformedInput::ExpectedArrayNode {
                path: "$.datacenters".to_string()
            }
        );
    }

    #[test]
    fn rejects_mixed_object_array() {
        let err = NullFieldMap::from_value(&json!({
            "resources": [{"name": "r", "resourceInstances": [{"datacenterId": 1}, "oops"]}]
        }))
        .unwrap_err();
        assert_eq!(err.path(), "$.resources[0].resourceInstances[1]");
    }

    #[test]
    fn rejects_excessive_nesting() {
        let schema = NullFieldSchema {
            max_depth: 1,
            ..NullFieldSchema::v1_4()
        };
        let domain = json!({
            "properties": [{"name": "p", "trafficTargets": [{"datacenterId": 1}]}]
        });
        let err = NullFieldMap::with_schema(&domain, &schema).unwrap_err();
        assert!(matches!(err, MalformedInput::DepthExceeded { .. }));
        assert_eq!(err.path(), "$.properties[0].trafficTargets");
    }

    #[test]
    fn custom_schema_collections() {
        let schema = NullFieldSchema {
            child_collections: vec!["links".to_string()],
            ..NullFieldSchema::v1_4()
        };
        let domain = json!({
            "links": [{"rel": "self", "href": null, "name": "self"}],
            "datacenters": "not walked"
        });
        let map = NullFieldMap::with_schema(&domain, &schema).unwrap();
        assert!(map.collection("links").unwrap()["self"].contains("Href"));
        assert!(map.datacenters().is_none());
    }
}
