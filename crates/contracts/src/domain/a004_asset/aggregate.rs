use serde::{Deserialize, Serialize};

use crate::domain::common::{PickOption, REQUIRED_FIELDS_MESSAGE};

/// Category fields the backend denormalizes onto each asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CategorySummary {
    pub category_id: i64,
    pub category_name: String,
    pub category_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Asset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<i64>,
    pub asset_name: String,
    pub description: String,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_details: Option<CategorySummary>,
    pub cost: f64,
}

impl Asset {
    pub fn validate(&self) -> Result<(), String> {
        let complete = !self.asset_name.trim().is_empty()
            && self.category_id > 0
            && self.cost > 0.0;
        if complete {
            Ok(())
        } else {
            Err(REQUIRED_FIELDS_MESSAGE.to_string())
        }
    }
}

/// Drop-list projection (id + name only) served by `/assetDrop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDropItem {
    pub asset_id: i64,
    pub asset_name: String,
}

impl PickOption for AssetDropItem {
    fn option_id(&self) -> i64 {
        self.asset_id
    }

    fn option_label(&self) -> &str {
        &self.asset_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_requires_name_category_and_positive_cost() {
        let asset = Asset {
            asset_name: "Forklift".into(),
            category_id: 2,
            cost: 18_500.0,
            ..Asset::default()
        };
        assert!(asset.validate().is_ok());

        let mut no_category = asset.clone();
        no_category.category_id = 0;
        assert!(no_category.validate().is_err());

        let mut free_asset = asset;
        free_asset.cost = 0.0;
        assert!(free_asset.validate().is_err());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let asset: Asset = serde_json::from_str(
            r#"{
                "assetId": 4,
                "assetName": "Forklift",
                "description": "3t electric",
                "categoryId": 2,
                "categoryDetails": {
                    "categoryId": 2,
                    "categoryName": "Vehicles",
                    "categoryDescription": "Powered equipment"
                },
                "cost": 18500.0
            }"#,
        )
        .unwrap();
        assert_eq!(asset.category_details.unwrap().category_name, "Vehicles");
        assert_eq!(asset.asset_id, Some(4));
    }
}
