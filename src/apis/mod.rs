pub mod domain;
pub mod datacenter;
pub mod property;
pub mod resource;
pub mod cidr_map;
pub mod geo_map;
pub mod as_map;
mod named;

// Re-export all APIs
pub use domain::{DomainApi, DomainQueryArgs};
pub use datacenter::DatacenterApi;
pub use property::PropertyApi;
pub use resource::ResourceApi;
pub use cidr_map::CidrMapApi;
pub use geo_map::GeoMapApi;
pub use as_map::AsMapApi;
