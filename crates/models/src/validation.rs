//! Field validation predicates shared by the models.
//!
//! Lengths are counted in characters, not bytes.

use regex::Regex;

use crate::configuration::Configuration;
use crate::errors::ValidationError;

pub(crate) fn check_max_length(
    configuration: &Configuration,
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) if configuration.client_side_validation && v.chars().count() > max => {
            Err(ValidationError::MaxLength { field, max })
        }
        _ => Ok(()),
    }
}

pub(crate) fn check_min_length(
    configuration: &Configuration,
    field: &'static str,
    value: Option<&str>,
    min: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) if configuration.client_side_validation && v.chars().count() < min => {
            Err(ValidationError::MinLength { field, min })
        }
        _ => Ok(()),
    }
}

pub(crate) fn check_pattern(
    configuration: &Configuration,
    field: &'static str,
    value: Option<&str>,
    regex: &Regex,
    pattern: &'static str,
) -> Result<(), ValidationError> {
    match value {
        Some(v) if configuration.client_side_validation && !regex.is_match(v) => {
            Err(ValidationError::Pattern { field, pattern })
        }
        _ => Ok(()),
    }
}
