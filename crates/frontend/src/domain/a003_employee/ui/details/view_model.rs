use contracts::domain::a002_location::aggregate::Location;
use contracts::domain::a003_employee::aggregate::Employee;
use leptos::prelude::*;

use crate::domain::a002_location::api as location_api;
use crate::domain::a003_employee::api;

/// State and commands of the employee form. The location selector is
/// populated from the full location list; the employee references the
/// chosen location by id only.
#[derive(Clone, Copy)]
pub struct EmployeeFormViewModel {
    pub form: RwSignal<Employee>,
    pub locations: RwSignal<Vec<Location>>,
    pub edit_mode: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub success: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl EmployeeFormViewModel {
    pub fn new(carried: Option<Employee>) -> Self {
        let edit_mode = carried.is_some();
        Self {
            form: RwSignal::new(carried.unwrap_or_default()),
            locations: RwSignal::new(Vec::new()),
            edit_mode: RwSignal::new(edit_mode),
            loading: RwSignal::new(false),
            success: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    /// Fetch the location pick-list once at construction. A failure only
    /// logs; the form stays usable and validation will refuse an
    /// unassigned location.
    pub fn load_locations(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match location_api::fetch_locations().await {
                Ok(list) => {
                    let _ = vm.locations.try_set(list);
                }
                Err(err) => log::error!("Error fetching locations: {err}"),
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
                match api::update_employee(&current).await {
                    Ok(_) => {
                        let _ = vm
                            .success
                            .try_set(Some("Employee updated successfully!".to_string()));
                    }
                    Err(err) => {
                        log::error!("Error updating employee: {err}");
                        let _ = vm.error.try_set(Some(
                            "Failed to update employee. Please try again.".to_string(),
                        ));
                    }
                }
            } else {
                match api::add_employee(&current).await {
                    Ok(_) => {
                        let _ = vm
                            .success
                            .try_set(Some("Employee added successfully!".to_string()));
                        vm.reset_to_create();
                    }
                    Err(err) => {
                        log::error!("Error adding employee: {err}");
                        let _ = vm.error.try_set(Some(
                            "Failed to add employee. Please try again.".to_string(),
                        ));
                    }
                }
            }
            let _ = vm.loading.try_set(false);
        });
    }

    fn reset_to_create(&self) {
        let _ = self.form.try_set(Employee::default());
        let _ = self.edit_mode.try_set(false);
    }

    pub fn cancel_edit(&self) {
        self.reset_to_create();
        self.success.set(None);
        self.error.set(None);
    }
}
