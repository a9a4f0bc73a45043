use serde::{Deserialize, Serialize};

use crate::domain::common::{PickOption, REQUIRED_FIELDS_MESSAGE};

/// Storage location (warehouse, office, site).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    pub location_name: String,
    pub location_code: String,
    pub country: String,
    pub city: String,
    pub location_description: String,
}

impl Location {
    /// Name, code and description are required; country and city are not.
    pub fn validate(&self) -> Result<(), String> {
        let complete = !self.location_name.trim().is_empty()
            && !self.location_code.trim().is_empty()
            && !self.location_description.trim().is_empty();
        if complete {
            Ok(())
        } else {
            Err(REQUIRED_FIELDS_MESSAGE.to_string())
        }
    }
}

impl PickOption for Location {
    fn option_id(&self) -> i64 {
        self.location_id.unwrap_or(0)
    }

    fn option_label(&self) -> &str {
        &self.location_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_and_city_are_optional() {
        let location = Location {
            location_id: None,
            location_name: "Main Warehouse".into(),
            location_code: "WH-001".into(),
            country: String::new(),
            city: String::new(),
            location_description: "Primary storage".into(),
        };
        assert!(location.validate().is_ok());
    }

    #[test]
    fn name_code_description_are_required() {
        let base = Location {
            location_name: "Main Warehouse".into(),
            location_code: "WH-001".into(),
            location_description: "Primary storage".into(),
            ..Location::default()
        };

        let mut missing_name = base.clone();
        missing_name.location_name.clear();
        assert!(missing_name.validate().is_err());

        let mut missing_code = base.clone();
        missing_code.location_code.clear();
        assert!(missing_code.validate().is_err());

        let mut missing_description = base;
        missing_description.location_description.clear();
        assert!(missing_description.validate().is_err());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let mut location = Location::default();
        location.location_id = Some(3);
        let value = serde_json::to_value(&location).unwrap();
        for key in ["locationId", "locationName", "locationCode", "locationDescription"] {
            assert!(value.get(key).is_some(), "missing wire field {key}");
        }
    }
}
