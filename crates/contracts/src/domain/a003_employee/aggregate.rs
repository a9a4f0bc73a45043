use serde::{Deserialize, Serialize};

use crate::domain::common::REQUIRED_FIELDS_MESSAGE;

/// Location fields the backend denormalizes onto each employee. The front
/// end never joins; it renders this as delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationSummary {
    pub location_id: i64,
    pub location_name: String,
    pub location_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    pub employee_name: String,
    pub location_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_details: Option<LocationSummary>,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
}

impl Employee {
    pub fn validate(&self) -> Result<(), String> {
        let complete = !self.employee_name.trim().is_empty()
            && self.location_id > 0
            && !self.contact_email.trim().is_empty()
            && !self.contact_phone.trim().is_empty()
            && !self.address.trim().is_empty();
        if complete {
            Ok(())
        } else {
            Err(REQUIRED_FIELDS_MESSAGE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Employee {
        Employee {
            employee_id: None,
            employee_name: "Sam Park".into(),
            location_id: 3,
            location_details: None,
            contact_email: "sam@corp.example".into(),
            contact_phone: "+1 512 555 0199".into(),
            address: "42 Elm St".into(),
        }
    }

    #[test]
    fn complete_employee_passes() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn unassigned_location_fails() {
        let mut employee = filled();
        employee.location_id = 0;
        assert_eq!(employee.validate().unwrap_err(), REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn denormalized_details_deserialize() {
        let employee: Employee = serde_json::from_str(
            r#"{
                "employeeId": 9,
                "employeeName": "Sam Park",
                "locationId": 3,
                "locationDetails": {
                    "locationId": 3,
                    "locationName": "Main Warehouse",
                    "locationCode": "WH-001"
                },
                "contactEmail": "sam@corp.example",
                "contactPhone": "+1 512 555 0199",
                "address": "42 Elm St"
            }"#,
        )
        .unwrap();
        assert_eq!(
            employee.location_details.unwrap().location_code,
            "WH-001"
        );
    }
}
