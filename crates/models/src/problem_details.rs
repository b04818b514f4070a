//! Structured error body returned by the service.

use serde::{Deserialize, Serialize};

/// Problem details describing a failed request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    /// Machine readable error name, e.g. `PropertyAlreadyExists`
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub error_details: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(rename = "type", default)]
    pub problem_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub instance: Option<String>,
}

impl ProblemDetails {
    /// Whether the problem reports that the entity already exists.
    pub fn is_already_exists(&self) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| name.ends_with("AlreadyExists"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_service_problem_body() {
        let body = r#"{
            "name": "PropertyAlreadyExists",
            "errorDetails": [],
            "code": 124,
            "type": "https://docs.lusid.com/#section/Error-Codes/124",
            "title": "A property definition with the key Portfolio/s/c already exists.",
            "status": 409,
            "detail": "",
            "instance": "https://example.lusid.com/app/insights/logs/0HM"
        }"#;
        let problem: ProblemDetails = serde_json::from_str(body).unwrap();
        assert_eq!(problem.status, Some(409));
        assert_eq!(problem.code, Some(124));
        assert!(problem.is_already_exists());
    }

    #[test]
    fn test_other_problems_are_not_already_exists() {
        let problem = ProblemDetails {
            name: Some("PortfolioNotFound".to_string()),
            ..Default::default()
        };
        assert!(!problem.is_already_exists());
        assert!(!ProblemDetails::default().is_already_exists());
    }
}
