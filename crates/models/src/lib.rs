//! LUSID models - request/response shapes and client-side validation.
//!
//! Every model that validates its fields does so against an explicit
//! [`Configuration`] supplied at construction time, so callers decide whether
//! client-side validation runs instead of relying on process-wide state.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lusid_models::{Configuration, DataDefinition};
//!
//! let definition = DataDefinition::new(Configuration::default())
//!     .with_name("instrument-id")?
//!     .with_data_type("string")?;
//! let wire = definition.to_dict(true);
//! ```

pub mod configuration;
pub mod cut_labels;
pub mod data_definition;
pub mod errors;
pub mod metadata;
pub mod portfolios;
pub mod problem_details;
pub mod property_definitions;
pub mod resources;
mod validation;

pub use configuration::Configuration;
pub use cut_labels::{CutLabelDefinition, CutLocalTime};
pub use data_definition::{DataDefinition, DataDefinitionField};
pub use errors::{ModelError, Result, ValidationError};
pub use metadata::{InstrumentIdTypeDescriptor, VersionSummary};
pub use portfolios::{CreateTransactionPortfolioRequest, Portfolio};
pub use problem_details::ProblemDetails;
pub use property_definitions::{CreatePropertyDefinitionRequest, PropertyDefinition};
pub use resources::{DeletedEntityResponse, Link, ResourceId, ResourceList};
