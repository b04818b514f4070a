//! Property definition shapes.

use serde::{Deserialize, Serialize};

use crate::resources::ResourceId;

/// Request to create a property definition in a domain/scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyDefinitionRequest {
    /// Entity domain the property attaches to, e.g. `Portfolio`, `Transaction`, `Order`
    pub domain: String,
    pub scope: String,
    pub code: String,
    pub display_name: String,
    /// Data type of the property, e.g. `system/string`
    pub data_type_id: ResourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_required: Option<bool>,
    /// `Perpetual` or `TimeVariant`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_time: Option<String>,
    /// `Property` or `Collection`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint_style: Option<String>,
}

impl CreatePropertyDefinitionRequest {
    pub fn new(
        domain: impl Into<String>,
        scope: impl Into<String>,
        code: impl Into<String>,
        data_type_id: ResourceId,
    ) -> Self {
        let code = code.into();
        Self {
            domain: domain.into(),
            scope: scope.into(),
            display_name: code.clone(),
            code,
            data_type_id,
            value_required: None,
            life_time: None,
            constraint_style: None,
        }
    }
}

/// A property definition as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    /// `{domain}/{scope}/{code}`
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}
