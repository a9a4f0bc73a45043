use contracts::domain::a005_category::aggregate::Category;
use leptos::prelude::*;

use super::view_model::CategoryFormViewModel;
use crate::shared::components::{TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::nav_state::use_edit_buffer;

#[component]
#[allow(non_snake_case)]
pub fn CategoryForm() -> impl IntoView {
    let carried = use_edit_buffer::<Category>().take();
    let vm = CategoryFormViewModel::new(carried);

    view! {
        <div class="details-container category-form">
            <div class="details-header">
                <h3>
                    {move || if vm.edit_mode.get() { "Edit Category" } else { "Add Category" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="message message--error">{e}</div> })}
            {move || vm.success.get().map(|m| view! { <div class="message message--success">{m}</div> })}

            <div class="details-form">
                <TextField
                    label="Category name"
                    required=true
                    value=Signal::derive(move || vm.form.get().category_name)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.category_name = v))
                />
                <TextField
                    label="Category code"
                    required=true
                    value=Signal::derive(move || vm.form.get().category_code)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.category_code = v))
                    placeholder="e.g. VEH"
                />
                <TextAreaField
                    label="Description"
                    required=true
                    value=Signal::derive(move || vm.form.get().category_description)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.category_description = v))
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.submit()
                    disabled=move || vm.loading.get()
                >
                    {icon("save")}
                    {move || if vm.edit_mode.get() { "Update category" } else { "Add category" }}
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
