use contracts::domain::a005_category::aggregate::Category;
use contracts::system::auth::can_edit;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::domain::a005_category::api;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::nav_state::use_edit_buffer;
use crate::system::auth::context::use_role;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let role = use_role();
    let edit_buffer = use_edit_buffer::<Category>();
    let navigate = StoredValue::new_local(use_navigate());

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_categories().await {
                Ok(list) => {
                    let _ = set_categories.try_set(list);
                }
                Err(err) => log::error!("Error fetching categories: {err}"),
            }
            let _ = set_loading.try_set(false);
        });
    };
    fetch();

    let edit_category = move |category: Category| {
        if can_edit(role.get_untracked()) {
            edit_buffer.put(category);
            navigate.with_value(|nav| nav("/addCategory", Default::default()));
        } else {
            crate::shared::alert("You do not have permission to edit categories.");
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Categories">
                <button
                    class="button button--primary"
                    on:click=move |_| navigate.with_value(|nav| nav("/addCategory", Default::default()))
                >
                    {icon("plus")}
                    "New category"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <Show when=move || loading.get()>
                <div class="loading-indicator">"Loading categories..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Code"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || categories.get().into_iter().map(|category| {
                            let edit = edit_category.clone();
                            let record = category.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{category.category_name}</td>
                                    <td class="table__cell">{category.category_code}</td>
                                    <td class="table__cell">{category.category_description}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--small"
                                            on:click=move |_| edit(record.clone())
                                        >
                                            {icon("edit")}
                                            "Edit"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
