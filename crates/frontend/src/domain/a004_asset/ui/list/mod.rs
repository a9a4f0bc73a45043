use contracts::domain::a004_asset::aggregate::Asset;
use contracts::system::auth::can_edit;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::domain::a004_asset::api;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::nav_state::use_edit_buffer;
use crate::system::auth::context::use_role;

#[component]
#[allow(non_snake_case)]
pub fn AssetList() -> impl IntoView {
    let (assets, set_assets) = signal::<Vec<Asset>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let role = use_role();
    let edit_buffer = use_edit_buffer::<Asset>();
    let navigate = StoredValue::new_local(use_navigate());

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_assets().await {
                Ok(list) => {
                    let _ = set_assets.try_set(list);
                }
                Err(err) => log::error!("Error fetching assets: {err}"),
            }
            let _ = set_loading.try_set(false);
        });
    };
    fetch();

    let edit_asset = move |asset: Asset| {
        if can_edit(role.get_untracked()) {
            edit_buffer.put(asset);
            navigate.with_value(|nav| nav("/addAsset", Default::default()));
        } else {
            crate::shared::alert("You do not have permission to edit assets.");
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Assets">
                <button
                    class="button button--primary"
                    on:click=move |_| navigate.with_value(|nav| nav("/addAsset", Default::default()))
                >
                    {icon("plus")}
                    "New asset"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <Show when=move || loading.get()>
                <div class="loading-indicator">"Loading assets..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell table__header-cell--number">"Cost"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || assets.get().into_iter().map(|asset| {
                            let edit = edit_asset.clone();
                            let record = asset.clone();
                            let category = asset
                                .category_details
                                .as_ref()
                                .map(|d| d.category_name.clone())
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{asset.asset_name}</td>
                                    <td class="table__cell">{asset.description}</td>
                                    <td class="table__cell">{category}</td>
                                    <td class="table__cell table__cell--number">
                                        {format!("{:.2}", asset.cost)}
                                    </td>
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
