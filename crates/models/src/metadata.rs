//! Application metadata and instrument identifier descriptors.

use serde::{Deserialize, Serialize};

use crate::resources::Link;

/// Versions of the running service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    pub api_version: String,
    pub build_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excel_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

/// Describes one instrument identifier type known to the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentIdTypeDescriptor {
    /// The name of the identifier type, e.g. `Figi` or `ClientInternal`
    pub identifier_type: String,
    /// The property key under which identifier values are stored
    pub property_key: String,
    /// Whether a value uniquely identifies a single instrument
    pub is_unique_identifier_type: bool,
}
