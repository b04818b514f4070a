//! Transaction portfolio shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resources::{Link, ResourceId};

/// Request to create a transaction portfolio within a scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionPortfolioRequest {
    pub display_name: String,
    /// Unique within the scope
    pub code: String,
    pub base_currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Effective date from which the portfolio exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl CreateTransactionPortfolioRequest {
    pub fn new(
        code: impl Into<String>,
        display_name: impl Into<String>,
        base_currency: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            code: code.into(),
            base_currency: base_currency.into(),
            description: None,
            created: None,
        }
    }
}

/// A portfolio as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: ResourceId,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub portfolio_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}
