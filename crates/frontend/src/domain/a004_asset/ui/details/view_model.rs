use contracts::domain::a004_asset::aggregate::Asset;
use contracts::domain::a005_category::aggregate::Category;
use leptos::prelude::*;

use crate::domain::a004_asset::api;
use crate::domain::a005_category::api as category_api;

/// State and commands of the asset form. The category selector is
/// populated from the full category list.
#[derive(Clone, Copy)]
pub struct AssetFormViewModel {
    pub form: RwSignal<Asset>,
    pub categories: RwSignal<Vec<Category>>,
    pub edit_mode: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub success: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl AssetFormViewModel {
    pub fn new(carried: Option<Asset>) -> Self {
        let edit_mode = carried.is_some();
        Self {
            form: RwSignal::new(carried.unwrap_or_default()),
            categories: RwSignal::new(Vec::new()),
            edit_mode: RwSignal::new(edit_mode),
            loading: RwSignal::new(false),
            success: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    pub fn load_categories(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match category_api::fetch_categories().await {
                Ok(list) => {
                    let _ = vm.categories.try_set(list);
                }
                Err(err) => log::error!("Error fetching categories: {err}"),
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
        let editing = self.edit_mode.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            if editing {
                match api::update_asset(&current).await {
                    Ok(_) => {
                        let _ = vm
                            .success
                            .try_set(Some("Asset updated successfully!".to_string()));
                    }
                    Err(err) => {
                        log::error!("Error updating asset: {err}");
                        let _ = vm.error.try_set(Some(
                            "Failed to update asset. Please try again.".to_string(),
                        ));
                    }
                }
            } else {
                match api::add_asset(&current).await {
                    Ok(_) => {
                        let _ = vm
                            .success
                            .try_set(Some("Asset added successfully!".to_string()));
                        vm.reset_to_create();
                    }
                    Err(err) => {
                        log::error!("Error adding asset: {err}");
                        let _ = vm.error.try_set(Some(
                            "Failed to add asset. Please try again.".to_string(),
                        ));
                    }
                }
            }
            let _ = vm.loading.try_set(false);
        });
    }

    fn reset_to_create(&self) {
        let _ = self.form.try_set(Asset::default());
        let _ = self.edit_mode.try_set(false);
    }

    pub fn cancel_edit(&self) {
        self.reset_to_create();
        self.success.set(None);
        self.error.set(None);
    }
}
