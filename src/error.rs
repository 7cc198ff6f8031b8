use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// GTM configuration entities that the client operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Domain,
    Datacenter,
    Property,
    Resource,
    CidrMap,
    GeoMap,
    AsMap,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Domain => "Domain",
            EntityKind::Datacenter => "Datacenter",
            EntityKind::Property => "Property",
            EntityKind::Resource => "Resource",
            EntityKind::CidrMap => "CidrMap",
            EntityKind::GeoMap => "GeographicMap",
            EntityKind::AsMap => "AsMap",
        };
        f.write_str(name)
    }
}

/// Operation being performed when an error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Get,
    List,
    Create,
    Update,
    Delete,
    Status,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Get => "get",
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Status => "status",
        };
        f.write_str(name)
    }
}

/// Problem details envelope returned by the API on failure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiProblem {
    #[serde(rename = "type", default)]
    pub problem_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub instance: Option<String>,
}

impl ApiProblem {
    /// Best human readable message in the envelope
    pub fn message(&self) -> Option<&str> {
        self.detail.as_deref().or(self.title.as_deref())
    }
}

/// Shape violations found while walking a decoded JSON tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    #[error("ExpectedObjectNode at {path}")]
    ExpectedObjectNode { path: String },

    #[error("ExpectedArrayNode at {path}")]
    ExpectedArrayNode { path: String },

    #[error("nesting too deep at {path}")]
    DepthExceeded { path: String },
}

impl MalformedInput {
    /// Path of the offending node, e.g. `$.datacenters[1]`
    pub fn path(&self) -> &str {
        match self {
            MalformedInput::ExpectedObjectNode { path }
            | MalformedInput::ExpectedArrayNode { path }
            | MalformedInput::DepthExceeded { path } => path,
        }
    }
}

/// GTM client error types
#[derive(Error, Debug)]
pub enum GtmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing failed: {0}")]
    Url(#[from] url::ParseError),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{kind} \"{name}\" not found")]
    NotFound { kind: EntityKind, name: String },

    #[error("API error: {status} - {}", .problem.message().unwrap_or("no detail"))]
    Api { status: u16, problem: ApiProblem },

    #[error("{kind} \"{name}\" {op} failed: {source}")]
    Entity {
        kind: EntityKind,
        name: String,
        op: Operation,
        #[source]
        source: Box<GtmError>,
    },

    #[error("Malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),
}

/// Result type for GTM operations
pub type GtmResult<T> = Result<T, GtmError>;

impl GtmError {
    /// Create an API error from a status code and decoded problem
    pub fn api_error(status: u16, problem: ApiProblem) -> Self {
        Self::Api { status, problem }
    }

    /// Create an authentication error
    pub fn auth_error(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create an invalid parameter error
    pub fn invalid_param(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Wrap an error with the entity and operation it happened in.
    /// `NotFound` is already specific and passes through untouched.
    pub fn in_entity(self, kind: EntityKind, name: impl Into<String>, op: Operation) -> Self {
        match self {
            err @ GtmError::NotFound { .. } => err,
            err @ GtmError::Entity { .. } => err,
            err => GtmError::Entity {
                kind,
                name: name.into(),
                op,
                source: Box::new(err),
            },
        }
    }

    /// HTTP status of the underlying API failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            GtmError::Api { status, .. } => Some(*status),
            GtmError::NotFound { .. } => Some(404),
            GtmError::Entity { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Whether this error means the entity does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            GtmError::NotFound { .. } => true,
            GtmError::Entity { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}
