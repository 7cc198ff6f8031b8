/*
 * GTM Client - Rust client for the Akamai Global Traffic Management configuration API
 */

// Internal modules
mod client;
pub mod models;  // Make models public
mod apis;
mod error;
mod auth;
mod config;
pub mod null_fields;

// Re-export public types and interfaces
pub use client::{GtmClient, API_BASE};
pub use models::*;
pub use apis::*;
pub use error::{ApiProblem, EntityKind, GtmError, GtmResult, MalformedInput, Operation};
pub use auth::{Authentication, BasicAuth, BearerAuth, NoAuth};
pub use config::{ClientConfig, SchemaVersion};
pub use null_fields::{NullFieldMap, NullFieldReport, NullFieldSchema, ObjectReports};

// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        GtmClient, ClientConfig, SchemaVersion,
        Authentication, BasicAuth, BearerAuth, NoAuth,
        GtmError, GtmResult, EntityKind, Operation,
        // Common model types
        Domain, Datacenter, Property, Resource,
        CidrMap, GeoMap, AsMap, ResponseStatus,
        DomainQueryArgs, NullFieldMap, NullFieldReport,
    };
}
