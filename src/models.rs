use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Hypermedia link attached to most API objects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

/// Change status returned by every mutating call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStatus {
    pub change_id: Option<String>,
    pub links: Option<Vec<Link>>,
    pub message: Option<String>,
    pub passing_validation: Option<bool>,
    pub propagation_status: Option<String>,
    pub propagation_status_date: Option<String>,
}

impl ResponseStatus {
    /// Parsed `propagationStatusDate`
    pub fn propagation_status_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.propagation_status_date.as_deref())
    }

    /// True once the change has reached all name servers
    pub fn is_complete(&self) -> bool {
        self.propagation_status.as_deref() == Some("COMPLETE")
    }
}

/// Body of create/update/delete responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityResponse<T> {
    pub resource: Option<T>,
    pub status: Option<ResponseStatus>,
}

pub type DomainResponse = EntityResponse<Domain>;
pub type DatacenterResponse = EntityResponse<Datacenter>;
pub type PropertyResponse = EntityResponse<Property>;
pub type ResourceResponse = EntityResponse<Resource>;
pub type CidrMapResponse = EntityResponse<CidrMap>;
pub type GeoMapResponse = EntityResponse<GeoMap>;
pub type AsMapResponse = EntityResponse<AsMap>;

/// `{"items": [...]}` listing envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// A GTM domain (1.4 schema)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub name: String,
    #[serde(rename = "type")]
    pub domain_type: String,
    pub as_maps: Option<Vec<AsMap>>,
    pub resources: Option<Vec<Resource>>,
    pub default_unreachable_threshold: Option<f32>,
    pub email_notification_list: Option<Vec<String>>,
    pub min_pingable_region_fraction: Option<f32>,
    pub default_timeout_penalty: Option<i32>,
    pub datacenters: Option<Vec<Datacenter>>,
    pub servermonitor_liveness_count: Option<i32>,
    pub round_robin_prefix: Option<String>,
    pub servermonitor_load_count: Option<i32>,
    pub ping_interval: Option<i32>,
    #[serde(rename = "maxTTL")]
    pub max_ttl: Option<i64>,
    pub load_imbalance_percentage: Option<f64>,
    pub default_health_max: Option<i32>,
    pub last_modified: Option<String>,
    pub status: Option<ResponseStatus>,
    pub map_update_interval: Option<i32>,
    pub max_properties: Option<i32>,
    pub max_resources: Option<i32>,
    pub default_ssl_client_private_key: Option<String>,
    pub default_error_penalty: Option<i32>,
    pub links: Option<Vec<Link>>,
    pub properties: Option<Vec<Property>>,
    pub max_test_timeout: Option<f64>,
    pub cname_coalescing_enabled: Option<bool>,
    pub default_health_multiplier: Option<i32>,
    pub servermonitor_pool: Option<String>,
    pub load_feedback: Option<bool>,
    #[serde(rename = "minTTL")]
    pub min_ttl: Option<i64>,
    pub geographic_maps: Option<Vec<GeoMap>>,
    pub cidr_maps: Option<Vec<CidrMap>>,
    pub default_max_unreachable_penalty: Option<i32>,
    pub default_health_threshold: Option<i32>,
    pub last_modified_by: Option<String>,
    pub modification_comments: Option<String>,
    pub min_test_interval: Option<i32>,
    pub ping_packet_size: Option<i32>,
    pub default_ssl_client_certificate: Option<String>,
    pub end_user_mapping_enabled: Option<bool>,
}

impl Domain {
    /// New domain of the given type (`basic`, `failover-only`, `static`, `weighted`, `full`)
    pub fn new(name: impl Into<String>, domain_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain_type: domain_type.into(),
            ..Self::default()
        }
    }

    /// Parsed `lastModified`
    pub fn last_modified_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.last_modified.as_deref())
    }
}

/// Entry of the domain listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainItem {
    pub acg_id: Option<String>,
    pub last_modified: Option<String>,
    pub links: Option<Vec<Link>>,
    pub name: String,
    pub status: Option<String>,
}

/// Load reporting object served from a datacenter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadObject {
    pub load_object: Option<String>,
    pub load_object_port: Option<i32>,
    pub load_servers: Option<Vec<String>>,
}

/// A GTM datacenter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datacenter {
    pub city: Option<String>,
    pub clone_of: Option<i64>,
    pub cloud_server_targeting: Option<bool>,
    pub continent: Option<String>,
    pub country: Option<String>,
    pub default_load_object: Option<LoadObject>,
    pub latitude: Option<f64>,
    pub links: Option<Vec<Link>>,
    pub longitude: Option<f64>,
    pub nickname: Option<String>,
    pub ping_interval: Option<i32>,
    pub ping_packet_size: Option<i32>,
    /// Assigned by the server on create
    pub datacenter_id: Option<i64>,
    pub score_penalty: Option<i32>,
    pub servermonitor_liveness_count: Option<i32>,
    pub servermonitor_load_count: Option<i32>,
    pub servermonitor_pool: Option<String>,
    pub state_or_province: Option<String>,
    #[serde(rename = "virtual")]
    pub is_virtual: Option<bool>,
}

impl Datacenter {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: Some(nickname.into()),
            ..Self::default()
        }
    }
}

/// Which server-managed default datacenter to create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultDatacenter {
    /// Catch-all target for CIDR, geographic and AS maps
    ForMaps,
    /// IPv4 target of an ip-version selector
    Ipv4Selector,
    /// IPv6 target of an ip-version selector
    Ipv6Selector,
}

impl DefaultDatacenter {
    /// Path segment below `/datacenters/`
    pub fn path(&self) -> &'static str {
        match self {
            DefaultDatacenter::ForMaps => "default-datacenter-for-maps",
            DefaultDatacenter::Ipv4Selector => "datacenter-for-ip-version-selector-ipv4",
            DefaultDatacenter::Ipv6Selector => "datacenter-for-ip-version-selector-ipv6",
        }
    }

    /// Fixed ID the server gives this datacenter
    pub fn datacenter_id(&self) -> i64 {
        match self {
            DefaultDatacenter::ForMaps => 5400,
            DefaultDatacenter::Ipv4Selector => 5401,
            DefaultDatacenter::Ipv6Selector => 5402,
        }
    }
}

/// Weighted handout target of a property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficTarget {
    pub datacenter_id: Option<i64>,
    pub enabled: Option<bool>,
    pub weight: Option<f64>,
    #[serde(rename = "handoutCName")]
    pub handout_cname: Option<String>,
    pub name: Option<String>,
    pub servers: Option<Vec<String>>,
}

/// Health check run against property targets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivenessTest {
    pub name: String,
    pub disabled: Option<bool>,
    pub answers_required: Option<bool>,
    pub disable_nonstandard_port_warning: Option<bool>,
    pub error_penalty: Option<f64>,
    pub host_header: Option<String>,
    #[serde(rename = "httpError3xx")]
    pub http_error_3xx: Option<bool>,
    #[serde(rename = "httpError4xx")]
    pub http_error_4xx: Option<bool>,
    #[serde(rename = "httpError5xx")]
    pub http_error_5xx: Option<bool>,
    pub peer_certificate_verification: Option<bool>,
    pub recursion_requested: Option<bool>,
    pub request_string: Option<String>,
    pub resource_type: Option<String>,
    pub response_string: Option<String>,
    pub ssl_client_certificate: Option<String>,
    pub ssl_client_private_key: Option<String>,
    pub test_interval: Option<i32>,
    pub test_object: Option<String>,
    pub test_object_password: Option<String>,
    pub test_object_port: Option<i32>,
    pub test_object_protocol: Option<String>,
    pub test_object_username: Option<String>,
    pub test_timeout: Option<f32>,
    pub timeout_penalty: Option<f64>,
    pub links: Option<Vec<Link>>,
}

/// Static resource record set served by a property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticRrSet {
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: Option<i32>,
    pub rdata: Option<Vec<String>>,
}

/// A GTM property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub ipv6: Option<bool>,
    pub score_aggregation_type: Option<String>,
    pub stickiness_bonus_percentage: Option<i32>,
    pub stickiness_bonus_constant: Option<i32>,
    pub health_threshold: Option<f64>,
    pub use_computed_targets: Option<bool>,
    pub backup_ip: Option<String>,
    pub balance_by_download_score: Option<bool>,
    #[serde(rename = "staticTTL")]
    pub static_ttl: Option<i32>,
    pub static_rr_sets: Option<Vec<StaticRrSet>>,
    pub last_modified: Option<String>,
    pub unreachable_threshold: Option<f64>,
    pub min_live_fraction: Option<f64>,
    pub health_multiplier: Option<f64>,
    #[serde(rename = "dynamicTTL")]
    pub dynamic_ttl: Option<i32>,
    pub max_unreachable_penalty: Option<i32>,
    pub map_name: Option<String>,
    pub handout_limit: Option<i32>,
    pub handout_mode: Option<String>,
    pub load_imbalance_percentage: Option<f64>,
    pub failover_delay: Option<i32>,
    #[serde(rename = "backupCName")]
    pub backup_cname: Option<String>,
    pub failback_delay: Option<i32>,
    pub health_max: Option<f64>,
    pub ghost_demand_reporting: Option<bool>,
    pub comments: Option<String>,
    pub cname: Option<String>,
    #[serde(rename = "weightedHashBitsForIPv4")]
    pub weighted_hash_bits_for_ipv4: Option<i32>,
    #[serde(rename = "weightedHashBitsForIPv6")]
    pub weighted_hash_bits_for_ipv6: Option<i32>,
    pub traffic_targets: Option<Vec<TrafficTarget>>,
    pub links: Option<Vec<Link>>,
    pub liveness_tests: Option<Vec<LivenessTest>>,
}

impl Property {
    pub fn new(name: impl Into<String>, property_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            property_type: property_type.into(),
            ..Self::default()
        }
    }
}

/// Per-datacenter load reporting for a resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInstance {
    pub datacenter_id: Option<i64>,
    pub use_default_load_object: Option<bool>,
    #[serde(flatten)]
    pub load_object: LoadObject,
}

/// A GTM resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub host_header: Option<String>,
    pub least_squares_decay: Option<f64>,
    pub description: Option<String>,
    pub leader_string: Option<String>,
    pub constrained_property: Option<String>,
    pub resource_instances: Option<Vec<ResourceInstance>>,
    pub aggregation_type: Option<String>,
    pub links: Option<Vec<Link>>,
    pub load_imbalance_percentage: Option<f64>,
    pub upper_bound: Option<i32>,
    pub max_u_multiplicative_increment: Option<f64>,
    pub decay_rate: Option<f64>,
}

impl Resource {
    pub fn new(name: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: resource_type.into(),
            ..Self::default()
        }
    }
}

/// Datacenter reference used as a map's catch-all target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatacenterBase {
    pub nickname: Option<String>,
    pub datacenter_id: Option<i64>,
}

/// CIDR blocks routed to one datacenter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CidrAssignment {
    pub datacenter_id: Option<i64>,
    pub nickname: Option<String>,
    pub blocks: Option<Vec<String>>,
}

/// A GTM CIDR map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CidrMap {
    pub name: String,
    pub default_datacenter: Option<DatacenterBase>,
    pub assignments: Option<Vec<CidrAssignment>>,
    pub links: Option<Vec<Link>>,
}

/// Countries routed to one datacenter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoAssignment {
    pub datacenter_id: Option<i64>,
    pub nickname: Option<String>,
    pub countries: Option<Vec<String>>,
}

/// A GTM geographic map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoMap {
    pub name: String,
    pub default_datacenter: Option<DatacenterBase>,
    pub assignments: Option<Vec<GeoAssignment>>,
    pub links: Option<Vec<Link>>,
}

/// Autonomous systems routed to one datacenter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsAssignment {
    pub datacenter_id: Option<i64>,
    pub nickname: Option<String>,
    pub as_numbers: Option<Vec<i64>>,
}

/// A GTM AS map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsMap {
    pub name: String,
    pub default_datacenter: Option<DatacenterBase>,
    pub assignments: Option<Vec<AsAssignment>>,
    pub links: Option<Vec<Link>>,
}

macro_rules! named_map {
    ($($ty:ty),*) => {
        $(impl $ty {
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                    ..Self::default()
                }
            }
        })*
    };
}

named_map!(CidrMap, GeoMap, AsMap);

fn parse_timestamp(value: Option<&str>) -> Option<DateTime<FixedOffset>> {
    value.and_then(|v| DateTime::parse_from_rfc3339(v).ok())
}
