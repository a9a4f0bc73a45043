use contracts::domain::a001_supplier::aggregate::Supplier;
use leptos::prelude::*;

use crate::domain::a001_supplier::api;
use crate::shared::geo;

/// State and commands of the supplier form.
///
/// Starts in Create state with an empty record unless a record arrived
/// through the edit buffer, in which case the form enters Edit state with a
/// working copy of that record.
#[derive(Clone, Copy)]
pub struct SupplierFormViewModel {
    pub form: RwSignal<Supplier>,
    pub edit_mode: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub success: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub filtered_cities: RwSignal<Vec<String>>,
}

impl SupplierFormViewModel {
    pub fn new(carried: Option<Supplier>) -> Self {
        let edit_mode = carried.is_some();
        let vm = Self {
            form: RwSignal::new(carried.unwrap_or_default()),
            edit_mode: RwSignal::new(edit_mode),
            loading: RwSignal::new(false),
            success: RwSignal::new(None),
            error: RwSignal::new(None),
            filtered_cities: RwSignal::new(Vec::new()),
        };
        // An edit entry with a stored country gets its city options up
        // front, so the stored city stays visible if still offered.
        if edit_mode && vm.form.with_untracked(|f| !f.country.is_empty()) {
            vm.on_country_change();
        }
        vm
    }

    /// Cascading selector: recompute the city options for the chosen
    /// country and drop a city the new country does not offer.
    pub fn on_country_change(&self) {
        let (country, city) = self
            .form
            .with_untracked(|f| (f.country.clone(), f.city.clone()));
        let (options, keep) = geo::refilter(geo::index(), &country, &city);
        if !keep {
            self.form.update(|f| f.city.clear());
        }
        self.filtered_cities.set(options);
    }

    pub fn submit(&self) {
        if self.loading.get_untracked() {
            // One in-flight request per form.
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
        let editing = self.edit_mode.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            if editing {
                match api::update_supplier(&current).await {
                    Ok(_) => {
                        let _ = vm
                            .success
                            .try_set(Some("Supplier updated successfully!".to_string()));
                    }
                    Err(err) => {
                        log::error!("Error updating supplier: {err}");
                        let _ = vm.error.try_set(Some(
                            "Failed to update supplier. Please try again.".to_string(),
                        ));
                    }
                }
            } else {
                match api::add_supplier(&current).await {
                    Ok(message) => {
                        let _ = vm.success.try_set(Some(message));
                        vm.reset_to_create();
                    }
                    Err(err) => {
                        log::error!("Error adding supplier: {err}");
                        let _ = vm.error.try_set(Some(
                            "Failed to add supplier. Please try again.".to_string(),
                        ));
                    }
                }
            }
            let _ = vm.loading.try_set(false);
        });
    }

    fn reset_to_create(&self) {
        let _ = self.form.try_set(Supplier::default());
        let _ = self.filtered_cities.try_set(Vec::new());
        let _ = self.edit_mode.try_set(false);
    }

    /// Discard the working copy and every message.
    pub fn cancel_edit(&self) {
        self.reset_to_create();
        self.success.set(None);
        self.error.set(None);
    }
}
