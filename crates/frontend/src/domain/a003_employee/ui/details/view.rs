use contracts::domain::a003_employee::aggregate::Employee;
use contracts::domain::common::PickOption;
use leptos::prelude::*;

use super::view_model::EmployeeFormViewModel;
use crate::shared::components::{SelectField, TextField};
use crate::shared::icons::icon;
use crate::shared::nav_state::use_edit_buffer;

#[component]
#[allow(non_snake_case)]
pub fn EmployeeForm() -> impl IntoView {
    let carried = use_edit_buffer::<Employee>().take();
    let vm = EmployeeFormViewModel::new(carried);
    vm.load_locations();

    view! {
        <div class="details-container employee-form">
            <div class="details-header">
                <h3>
                    {move || if vm.edit_mode.get() { "Edit Employee" } else { "Add Employee" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="message message--error">{e}</div> })}
            {move || vm.success.get().map(|m| view! { <div class="message message--success">{m}</div> })}

            <div class="details-form">
                <TextField
                    label="Employee name"
                    required=true
                    value=Signal::derive(move || vm.form.get().employee_name)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.employee_name = v))
                />
                <SelectField
                    label="Location"
                    required=true
                    value=Signal::derive(move || {
                        let id = vm.form.get().location_id;
                        if id > 0 { id.to_string() } else { String::new() }
                    })
                    options=Signal::derive(move || {
                        vm.locations
                            .get()
                            .iter()
                            .map(|l| (l.option_id().to_string(), l.option_label().to_string()))
                            .collect()
                    })
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.location_id = v.parse().unwrap_or(0));
                    })
                    placeholder="Select a location"
                />
                <TextField
                    label="Contact email"
                    required=true
                    input_type="email"
                    value=Signal::derive(move || vm.form.get().contact_email)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.contact_email = v))
                />
                <TextField
                    label="Contact phone"
                    required=true
                    input_type="tel"
                    value=Signal::derive(move || vm.form.get().contact_phone)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.contact_phone = v))
                />
                <TextField
                    label="Address"
                    required=true
                    value=Signal::derive(move || vm.form.get().address)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.address = v))
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.submit()
                    disabled=move || vm.loading.get()
                >
                    {icon("save")}
                    {move || if vm.edit_mode.get() { "Update employee" } else { "Add employee" }}
                </button>
                <Show when=move || vm.edit_mode.get()>
                    <button class="button button--secondary" on:click=move |_| vm.cancel_edit()>
                        {icon("cancel")}
                        "Cancel edit"
                    </button>
                </Show>
            </div>
        </div>
    }
}
