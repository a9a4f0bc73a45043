use contracts::domain::a002_location::aggregate::Location;
use leptos::prelude::*;

use crate::domain::a002_location::api;
use crate::shared::geo;

/// State and commands of the location form. Same Create/Edit machine as the
/// supplier form; country and city are optional here, but the cascade rule
/// between them is the same.
#[derive(Clone, Copy)]
pub struct LocationFormViewModel {
    pub form: RwSignal<Location>,
    pub edit_mode: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub success: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub filtered_cities: RwSignal<Vec<String>>,
}

impl LocationFormViewModel {
    pub fn new(carried: Option<Location>) -> Self {
        let edit_mode = carried.is_some();
        let vm = Self {
            form: RwSignal::new(carried.unwrap_or_default()),
            edit_mode: RwSignal::new(edit_mode),
            loading: RwSignal::new(false),
            success: RwSignal::new(None),
            error: RwSignal::new(None),
            filtered_cities: RwSignal::new(Vec::new()),
        };
        if edit_mode && vm.form.with_untracked(|f| !f.country.is_empty()) {
            vm.on_country_change();
        }
        vm
    }

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
                match api::update_location(&current).await {
                    Ok(_) => {
                        let _ = vm
                            .success
                            .try_set(Some("Location updated successfully!".to_string()));
                    }
                    Err(err) => {
                        log::error!("Error updating location: {err}");
                        let _ = vm.error.try_set(Some(
                            "Failed to update location. Please try again.".to_string(),
                        ));
                    }
                }
            } else {
                match api::add_location(&current).await {
                    Ok(_) => {
                        let _ = vm
                            .success
                            .try_set(Some("Location added successfully!".to_string()));
                        vm.reset_to_create();
                    }
                    Err(err) => {
                        log::error!("Error adding location: {err}");
                        let _ = vm.error.try_set(Some(
                            "Failed to add location. Please try again.".to_string(),
                        ));
                    }
                }
            }
            let _ = vm.loading.try_set(false);
        });
    }

    fn reset_to_create(&self) {
        let _ = self.form.try_set(Location::default());
        let _ = self.filtered_cities.try_set(Vec::new());
        let _ = self.edit_mode.try_set(false);
    }

    pub fn cancel_edit(&self) {
        self.reset_to_create();
        self.success.set(None);
        self.error.set(None);
    }
}
