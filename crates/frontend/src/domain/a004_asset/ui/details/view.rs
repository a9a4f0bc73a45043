use contracts::domain::a004_asset::aggregate::Asset;
use contracts::domain::common::PickOption;
use leptos::prelude::*;

use super::view_model::AssetFormViewModel;
use crate::shared::components::{NumberField, SelectField, TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::nav_state::use_edit_buffer;

#[component]
#[allow(non_snake_case)]
pub fn AssetForm() -> impl IntoView {
    let carried = use_edit_buffer::<Asset>().take();
    let vm = AssetFormViewModel::new(carried);
    vm.load_categories();

    view! {
        <div class="details-container asset-form">
            <div class="details-header">
                <h3>
                    {move || if vm.edit_mode.get() { "Edit Asset" } else { "Add Asset" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="message message--error">{e}</div> })}
            {move || vm.success.get().map(|m| view! { <div class="message message--success">{m}</div> })}

            <div class="details-form">
                <TextField
                    label="Asset name"
                    required=true
                    value=Signal::derive(move || vm.form.get().asset_name)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.asset_name = v))
                />
                <TextAreaField
                    label="Description"
                    value=Signal::derive(move || vm.form.get().description)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.description = v))
                />
                <SelectField
                    label="Category"
                    required=true
                    value=Signal::derive(move || {
                        let id = vm.form.get().category_id;
                        if id > 0 { id.to_string() } else { String::new() }
                    })
                    options=Signal::derive(move || {
                        vm.categories
                            .get()
                            .iter()
                            .map(|c| (c.option_id().to_string(), c.option_label().to_string()))
                            .collect()
                    })
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.category_id = v.parse().unwrap_or(0));
                    })
                    placeholder="Select a category"
                />
                <NumberField
                    label="Cost"
                    required=true
                    value=Signal::derive(move || vm.form.get().cost)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.cost = v))
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.submit()
                    disabled=move || vm.loading.get()
                >
                    {icon("save")}
                    {move || if vm.edit_mode.get() { "Update asset" } else { "Add asset" }}
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
