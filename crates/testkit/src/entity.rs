use std::fmt;

use crate::errors::{Result, TestkitError};

pub const PROPERTY_DEFINITION: &str = "property_definition";
pub const PORTFOLIO: &str = "portfolio";
pub const CUT_LABEL: &str = "cut_label";
pub const ORDER: &str = "order";
pub const RECIPE: &str = "recipe";
pub const CA_SOURCE: &str = "ca_source";

/// An entity created during a test run that has to be deleted afterwards.
///
/// Each variant carries exactly what its delete endpoint needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackedEntity {
    PropertyDefinition {
        domain: String,
        scope: String,
        code: String,
    },
    Portfolio {
        scope: String,
        code: String,
    },
    /// Cut labels are global; the scope is kept for reporting only.
    CutLabel {
        scope: String,
        code: String,
    },
    Order {
        scope: String,
        code: String,
    },
    Recipe {
        scope: String,
        code: String,
    },
    CorporateActionSource {
        scope: String,
        code: String,
    },
    /// Recorded under a kind nothing knows how to delete.
    Unrecognised {
        kind: String,
        scope: String,
        code: String,
        annotations: Vec<String>,
    },
}

impl TrackedEntity {
    /// Builds a record from its kind string.
    ///
    /// `property_definition` takes its domain from the first annotation.
    /// Kinds outside the known set become [`TrackedEntity::Unrecognised`].
    pub fn from_parts(
        kind: &str,
        scope: impl Into<String>,
        code: impl Into<String>,
        annotations: &[String],
    ) -> Result<Self> {
        let scope = scope.into();
        let code = code.into();

        let entity = match kind {
            PROPERTY_DEFINITION => {
                let domain = annotations
                    .first()
                    .ok_or(TestkitError::MissingAnnotation {
                        kind: PROPERTY_DEFINITION,
                        annotation: "domain",
                    })?
                    .clone();
                Self::PropertyDefinition {
                    domain,
                    scope,
                    code,
                }
            }
            PORTFOLIO => Self::Portfolio { scope, code },
            CUT_LABEL => Self::CutLabel { scope, code },
            ORDER => Self::Order { scope, code },
            RECIPE => Self::Recipe { scope, code },
            CA_SOURCE => Self::CorporateActionSource { scope, code },
            other => Self::Unrecognised {
                kind: other.to_string(),
                scope,
                code,
                annotations: annotations.to_vec(),
            },
        };
        Ok(entity)
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::PropertyDefinition { .. } => PROPERTY_DEFINITION,
            Self::Portfolio { .. } => PORTFOLIO,
            Self::CutLabel { .. } => CUT_LABEL,
            Self::Order { .. } => ORDER,
            Self::Recipe { .. } => RECIPE,
            Self::CorporateActionSource { .. } => CA_SOURCE,
            Self::Unrecognised { kind, .. } => kind,
        }
    }

    pub fn scope(&self) -> &str {
        match self {
            Self::PropertyDefinition { scope, .. }
            | Self::Portfolio { scope, .. }
            | Self::CutLabel { scope, .. }
            | Self::Order { scope, .. }
            | Self::Recipe { scope, .. }
            | Self::CorporateActionSource { scope, .. }
            | Self::Unrecognised { scope, .. } => scope,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::PropertyDefinition { code, .. }
            | Self::Portfolio { code, .. }
            | Self::CutLabel { code, .. }
            | Self::Order { code, .. }
            | Self::Recipe { code, .. }
            | Self::CorporateActionSource { code, .. }
            | Self::Unrecognised { code, .. } => code,
        }
    }
}

impl fmt::Display for TrackedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PropertyDefinition {
                domain,
                scope,
                code,
            } => write!(f, "{} {}/{}/{}", PROPERTY_DEFINITION, domain, scope, code),
            other => write!(f, "{} {}/{}", other.kind(), other.scope(), other.code()),
        }
    }
}
