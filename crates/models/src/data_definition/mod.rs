//! Data definition - one column/field mapping descriptor of a tabular import schema.

mod data_definition_model;


pub use data_definition_model::{DataDefinition, DataDefinitionField, NAME_PATTERN};
