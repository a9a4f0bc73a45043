use contracts::domain::a005_category::aggregate::Category;
use leptos::prelude::*;

use crate::domain::a005_category::api;

/// State and commands of the category form.
#[derive(Clone, Copy)]
pub struct CategoryFormViewModel {
    pub form: RwSignal<Category>,
    pub edit_mode: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub success: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl CategoryFormViewModel {
    pub fn new(carried: Option<Category>) -> Self {
        let edit_mode = carried.is_some();
        Self {
            form: RwSignal::new(carried.unwrap_or_default()),
            edit_mode: RwSignal::new(edit_mode),
            loading: RwSignal::new(false),
            success: RwSignal::new(None),
            error: RwSignal::new(None),
        }
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
                match api::update_category(&current).await {
                    Ok(_) => {
                        let _ = vm
                            .success
                            .try_set(Some("Category updated successfully!".to_string()));
                    }
                    Err(err) => {
                        log::error!("Error updating category: {err}");
                        let _ = vm.error.try_set(Some(
                            "Failed to update category. Please try again.".to_string(),
                        ));
                    }
                }
            } else {
                match api::add_category(&current).await {
                    Ok(_) => {
                        let _ = vm
                            .success
                            .try_set(Some("Category added successfully!".to_string()));
                        vm.reset_to_create();
                    }
                    Err(err) => {
                        log::error!("Error adding category: {err}");
                        let _ = vm.error.try_set(Some(
                            "Failed to add category. Please try again.".to_string(),
                        ));
                    }
                }
            }
            let _ = vm.loading.try_set(false);
        });
    }

    fn reset_to_create(&self) {
        let _ = self.form.try_set(Category::default());
        let _ = self.edit_mode.try_set(false);
    }

    pub fn cancel_edit(&self) {
        self.reset_to_create();
        self.success.set(None);
        self.error.set(None);
    }
}
