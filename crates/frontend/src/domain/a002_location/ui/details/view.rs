use contracts::domain::a002_location::aggregate::Location;
use leptos::prelude::*;

use super::view_model::LocationFormViewModel;
use crate::shared::components::{SelectField, TextAreaField, TextField};
use crate::shared::geo;
use crate::shared::icons::icon;
use crate::shared::nav_state::use_edit_buffer;

#[component]
#[allow(non_snake_case)]
pub fn LocationForm() -> impl IntoView {
    let carried = use_edit_buffer::<Location>().take();
    let vm = LocationFormViewModel::new(carried);

    view! {
        <div class="details-container location-form">
            <div class="details-header">
                <h3>
                    {move || if vm.edit_mode.get() { "Edit Location" } else { "Add Location" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="message message--error">{e}</div> })}
            {move || vm.success.get().map(|m| view! { <div class="message message--success">{m}</div> })}

            <div class="details-form">
                <TextField
                    label="Location name"
                    required=true
                    value=Signal::derive(move || vm.form.get().location_name)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.location_name = v))
                    placeholder="e.g. Main Warehouse"
                />
                <TextField
                    label="Location code"
                    required=true
                    value=Signal::derive(move || vm.form.get().location_code)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.location_code = v))
                    placeholder="e.g. WH-001"
                />
                <SelectField
                    label="Country"
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
                <TextAreaField
                    label="Description"
                    required=true
                    value=Signal::derive(move || vm.form.get().location_description)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.location_description = v))
                    placeholder="What is stored or done here"
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.submit()
                    disabled=move || vm.loading.get()
                >
                    {icon("save")}
                    {move || if vm.edit_mode.get() { "Update location" } else { "Add location" }}
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
