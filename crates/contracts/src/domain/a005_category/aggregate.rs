use serde::{Deserialize, Serialize};

use crate::domain::common::{PickOption, REQUIRED_FIELDS_MESSAGE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub category_name: String,
    pub category_code: String,
    pub category_description: String,
}

impl Category {
    pub fn validate(&self) -> Result<(), String> {
        let complete = !self.category_name.trim().is_empty()
            && !self.category_code.trim().is_empty()
            && !self.category_description.trim().is_empty();
        if complete {
            Ok(())
        } else {
            Err(REQUIRED_FIELDS_MESSAGE.to_string())
        }
    }
}

impl PickOption for Category {
    fn option_id(&self) -> i64 {
        self.category_id.unwrap_or(0)
    }

    fn option_label(&self) -> &str {
        &self.category_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_three_fields_are_required() {
        let category = Category {
            category_id: None,
            category_name: "Vehicles".into(),
            category_code: "VEH".into(),
            category_description: "Powered equipment".into(),
        };
        assert!(category.validate().is_ok());

        let mut blank = category;
        blank.category_code = "  ".into();
        assert_eq!(blank.validate().unwrap_err(), REQUIRED_FIELDS_MESSAGE);
    }
}
