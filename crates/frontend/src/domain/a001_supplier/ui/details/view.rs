use contracts::domain::a001_supplier::aggregate::Supplier;
use leptos::prelude::*;

use super::view_model::SupplierFormViewModel;
use crate::shared::components::{SelectField, TextField};
use crate::shared::geo;
use crate::shared::icons::icon;
use crate::shared::nav_state::use_edit_buffer;

#[component]
#[allow(non_snake_case)]
pub fn SupplierForm() -> impl IntoView {
    // One-shot read of the navigation payload; absent means Create mode.
    let carried = use_edit_buffer::<Supplier>().take();
    let vm = SupplierFormViewModel::new(carried);

    view! {
        <div class="details-container supplier-form">
            <div class="details-header">
                <h3>
                    {move || if vm.edit_mode.get() { "Edit Supplier" } else { "Add Supplier" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="message message--error">{e}</div> })}
            {move || vm.success.get().map(|m| view! { <div class="message message--success">{m}</div> })}

            <div class="details-form">
                <TextField
                    label="Supplier name"
                    required=true
                    value=Signal::derive(move || vm.form.get().supplier_name)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.supplier_name = v))
                    placeholder="Company name"
                />
                <TextField
                    label="Contact name"
                    required=true
                    value=Signal::derive(move || vm.form.get().contact_name)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.contact_name = v))
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
                <TextField
                    label="Registration no."
                    required=true
                    value=Signal::derive(move || vm.form.get().registration_no)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.registration_no = v))
                />
                <SelectField
                    label="Country"
                    required=true
                    value=Signal::derive(move || vm.form.get().country)
                    options=Signal::derive(|| {
                        geo::index()
                            .countries()
                            .iter()
                            .map(|c| (c.clone(), c.clone()))
                            .collect()
                    })
                    on_change=Callback::new(move |v| {
                        vm.form.update(|f| f.country = v);
                        vm.on_country_change();
                    })
                    placeholder="Select a country"
                />
                <SelectField
                    label="City"
                    required=true
                    value=Signal::derive(move || vm.form.get().city)
                    options=Signal::derive(move || {
                        vm.filtered_cities
                            .get()
                            .into_iter()
                            .map(|c| (c.clone(), c))
                            .collect()
                    })
                    on_change=Callback::new(move |v| vm.form.update(|f| f.city = v))
                    placeholder="Select a city"
                />
                <TextField
                    label="Status"
                    required=true
                    value=Signal::derive(move || vm.form.get().status)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.status = v))
                    placeholder="e.g. Active"
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.submit()
                    disabled=move || vm.loading.get()
                >
                    {icon("save")}
                    {move || if vm.edit_mode.get() { "Update supplier" } else { "Add supplier" }}
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
