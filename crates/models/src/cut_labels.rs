//! Cut label definitions.

use serde::{Deserialize, Serialize};

/// Local time of day a cut label refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutLocalTime {
    pub hours: u8,
    pub minutes: u8,
}

/// A named time-of-day marker, interpreted in `time_zone`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutLabelDefinition {
    pub code: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cut_local_time: CutLocalTime,
    /// IANA time zone name, e.g. `Europe/London`
    pub time_zone: String,
}

impl CutLabelDefinition {
    /// Formats an effective-at value qualified by this cut label, e.g.
    /// `2019-01-01NLondonClose`.
    pub fn label_for(&self, date: chrono::NaiveDate) -> String {
        format!("{}N{}", date, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_wire_shape() {
        let label = CutLabelDefinition {
            code: "LondonClose".to_string(),
            display_name: "LondonClose".to_string(),
            description: None,
            cut_local_time: CutLocalTime {
                hours: 16,
                minutes: 30,
            },
            time_zone: "GB".to_string(),
        };
        let value = serde_json::to_value(&label).unwrap();
        assert_eq!(value["cutLocalTime"]["hours"], 16);
        assert_eq!(value["timeZone"], "GB");
        assert!(value.get("description").is_none());

        let date = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        assert_eq!(label.label_for(date), "2019-01-01NLondonClose");
    }
}
