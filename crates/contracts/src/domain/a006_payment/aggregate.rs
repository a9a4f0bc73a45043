use serde::{Deserialize, Serialize};

use crate::domain::common::REQUIRED_FIELDS_MESSAGE;

/// Payment as submitted from the Add Payment form. Asset and supplier are
/// referenced by id; the backend resolves names for the list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<i64>,
    pub asset_id: i64,
    pub supplier_id: i64,
    pub payment_mode: String,
    pub cheque_number: String,
    /// ISO date string (`YYYY-MM-DD`), as produced by a date input.
    pub payment_date: String,
    pub amount: f64,
    pub amount_to_return: f64,
}

impl Payment {
    /// Both foreign keys must point at a real row, mode and date must be
    /// chosen, and the amount must be positive. The cheque number and the
    /// amount to return are optional.
    pub fn validate(&self) -> Result<(), String> {
        let complete = self.asset_id > 0
            && self.supplier_id > 0
            && !self.payment_mode.trim().is_empty()
            && !self.payment_date.trim().is_empty()
            && self.amount > 0.0;
        if complete {
            Ok(())
        } else {
            Err(REQUIRED_FIELDS_MESSAGE.to_string())
        }
    }
}

/// Row of the payment list as served by `/payment/list`: identifiers are
/// already resolved to display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentListRow {
    pub payment_id: i64,
    pub asset_name: String,
    pub supplier_name: String,
    pub cheque_number: String,
    pub payment_date: String,
    pub amount: f64,
    pub amount_to_return: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Payment {
        Payment {
            payment_id: None,
            asset_id: 4,
            supplier_id: 5,
            payment_mode: "Cheque".into(),
            cheque_number: "000321".into(),
            payment_date: "2025-11-03".into(),
            amount: 1200.0,
            amount_to_return: 0.0,
        }
    }

    #[test]
    fn complete_payment_passes() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn unresolved_asset_reference_fails() {
        // The form defaults the asset id to 0 until the pick-list arrives;
        // submitting in that window must be rejected.
        let mut payment = filled();
        payment.asset_id = 0;
        assert_eq!(payment.validate().unwrap_err(), REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn amount_must_be_positive() {
        let mut payment = filled();
        payment.amount = 0.0;
        assert!(payment.validate().is_err());
    }

    #[test]
    fn cheque_number_is_optional() {
        let mut payment = filled();
        payment.cheque_number.clear();
        assert!(payment.validate().is_ok());
    }

    #[test]
    fn list_row_uses_denormalized_names() {
        let row: PaymentListRow = serde_json::from_str(
            r#"{
                "paymentId": 11,
                "assetName": "Forklift",
                "supplierName": "Acme",
                "chequeNumber": "000321",
                "paymentDate": "2025-11-03",
                "amount": 1200.0,
                "amountToReturn": 0.0
            }"#,
        )
        .unwrap();
        assert_eq!(row.supplier_name, "Acme");
    }
}
