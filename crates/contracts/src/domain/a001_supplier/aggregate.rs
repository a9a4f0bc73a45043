use serde::{Deserialize, Serialize};

use crate::domain::common::{PickOption, REQUIRED_FIELDS_MESSAGE};

/// Supplier master record as exchanged with the backend.
///
/// `supplier_id` is backend-assigned: absent in create requests, present in
/// list responses and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
    pub supplier_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub registration_no: String,
    pub country: String,
    pub city: String,
    pub status: String,
}

impl Supplier {
    /// Presence gate run before submit. Every field of the supplier form is
    /// required.
    pub fn validate(&self) -> Result<(), String> {
        let complete = !self.supplier_name.trim().is_empty()
            && !self.contact_name.trim().is_empty()
            && !self.contact_email.trim().is_empty()
            && !self.contact_phone.trim().is_empty()
            && !self.address.trim().is_empty()
            && !self.registration_no.trim().is_empty()
            && !self.country.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.status.trim().is_empty();
        if complete {
            Ok(())
        } else {
            Err(REQUIRED_FIELDS_MESSAGE.to_string())
        }
    }
}

/// Drop-list projection (id + name only) served by `/suppliers/dropList`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDropItem {
    pub supplier_id: i64,
    pub supplier_name: String,
}

impl PickOption for SupplierDropItem {
    fn option_id(&self) -> i64 {
        self.supplier_id
    }

    fn option_label(&self) -> &str {
        &self.supplier_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Supplier {
        Supplier {
            supplier_id: None,
            supplier_name: "Acme".into(),
            contact_name: "Jane Roe".into(),
            contact_email: "jane@acme.example".into(),
            contact_phone: "+1 512 555 0100".into(),
            address: "1 Congress Ave".into(),
            registration_no: "REG-1001".into(),
            country: "USA".into(),
            city: "Austin".into(),
            status: "Active".into(),
        }
    }

    #[test]
    fn complete_supplier_passes() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn every_field_is_required() {
        let blank_one: [fn(&mut Supplier); 9] = [
            |s: &mut Supplier| s.supplier_name.clear(),
            |s: &mut Supplier| s.contact_name.clear(),
            |s: &mut Supplier| s.contact_email.clear(),
            |s: &mut Supplier| s.contact_phone.clear(),
            |s: &mut Supplier| s.address.clear(),
            |s: &mut Supplier| s.registration_no.clear(),
            |s: &mut Supplier| s.country.clear(),
            |s: &mut Supplier| s.city.clear(),
            |s: &mut Supplier| s.status.clear(),
        ];
        for blank in blank_one {
            let mut supplier = filled();
            blank(&mut supplier);
            assert_eq!(
                supplier.validate().unwrap_err(),
                REQUIRED_FIELDS_MESSAGE
            );
        }
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let mut supplier = filled();
        supplier.city = "   ".into();
        assert!(supplier.validate().is_err());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let mut supplier = filled();
        supplier.supplier_id = Some(7);
        let value = serde_json::to_value(&supplier).unwrap();
        for key in [
            "supplierId",
            "supplierName",
            "contactName",
            "contactEmail",
            "contactPhone",
            "registrationNo",
        ] {
            assert!(value.get(key).is_some(), "missing wire field {key}");
        }
    }

    #[test]
    fn create_request_omits_the_id() {
        let value = serde_json::to_value(filled()).unwrap();
        assert!(value.get("supplierId").is_none());
    }
}
