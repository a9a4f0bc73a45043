use contracts::domain::a001_supplier::aggregate::SupplierDropItem;
use contracts::domain::a004_asset::aggregate::AssetDropItem;
use contracts::domain::a006_payment::aggregate::Payment;
use leptos::prelude::*;

use crate::domain::a001_supplier::api as supplier_api;
use crate::domain::a004_asset::api as asset_api;
use crate::domain::a006_payment::api;

/// State and commands of the payment form.
///
/// The two pick-lists load concurrently at construction; each one, on
/// arrival, defaults its foreign key to the first entry so the selects
/// start on a valid row. Until then the key stays 0 and validation blocks
/// the submit.
#[derive(Clone, Copy)]
pub struct PaymentFormViewModel {
    pub form: RwSignal<Payment>,
    pub assets: RwSignal<Vec<AssetDropItem>>,
    pub suppliers: RwSignal<Vec<SupplierDropItem>>,
    pub loading: RwSignal<bool>,
    pub success: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl PaymentFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(Payment::default()),
            assets: RwSignal::new(Vec::new()),
            suppliers: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            success: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    /// Two independent one-shot loads; a failure of either only logs and
    /// leaves its select empty.
    pub fn load_pick_lists(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match asset_api::fetch_asset_drop().await {
                Ok(list) => {
                    let first = list.first().map(|a| a.asset_id).unwrap_or(0);
                    let _ = vm.assets.try_set(list);
                    let _ = vm.form.try_update(|f| f.asset_id = first);
                }
                Err(err) => log::error!("Error fetching assets: {err}"),
            }
        });

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match supplier_api::fetch_supplier_drop().await {
                Ok(list) => {
                    let first = list.first().map(|s| s.supplier_id).unwrap_or(0);
                    let _ = vm.suppliers.try_set(list);
                    let _ = vm.form.try_update(|f| f.supplier_id = first);
                }
                Err(err) => log::error!("Error fetching suppliers: {err}"),
            }
        });
    }

    pub fn submit(&self) {
        if self.loading.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        if let Err(message) = current.validate() {
            self.error.set(Some(message));
            return;
        }
        self.loading.set(true);
        self.success.set(None);
        self.error.set(None);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::add_payment(&current).await {
                Ok(message) => {
                    let _ = vm.success.try_set(Some(message));
                    vm.reset_after_create();
                }
                Err(err) => {
                    log::error!("Error adding payment: {err}");
                    let _ = vm.error.try_set(Some(
                        "Failed to add payment. Please try again.".to_string(),
                    ));
                }
            }
            let _ = vm.loading.try_set(false);
        });
    }

    /// Fresh working copy with both foreign keys re-defaulted from the
    /// already-loaded pick-lists. No refetch.
    fn reset_after_create(&self) {
        let asset_id = self
            .assets
            .try_with(|list| list.first().map(|a| a.asset_id).unwrap_or(0))
            .unwrap_or(0);
        let supplier_id = self
            .suppliers
            .try_with(|list| list.first().map(|s| s.supplier_id).unwrap_or(0))
            .unwrap_or(0);
        let _ = self.form.try_set(Payment {
            asset_id,
            supplier_id,
            ..Payment::default()
        });
    }
}
