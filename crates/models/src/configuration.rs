//! Model configuration.

/// Settings that influence how models behave locally.
///
/// A copy is stored in each validating model when it is built, so two models
/// in the same process can run with different validation policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    /// Reject out-of-range field values on assignment.
    pub client_side_validation: bool,
}

impl Configuration {
    /// Configuration with client-side validation switched off.
    pub fn without_validation() -> Self {
        Self {
            client_side_validation: false,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            client_side_validation: true,
        }
    }
}
