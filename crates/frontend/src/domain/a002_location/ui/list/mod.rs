use contracts::domain::a002_location::aggregate::Location;
use contracts::system::auth::can_edit;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::domain::a002_location::api;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::nav_state::use_edit_buffer;
use crate::system::auth::context::use_role;

#[component]
#[allow(non_snake_case)]
pub fn LocationList() -> impl IntoView {
    let (locations, set_locations) = signal::<Vec<Location>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let role = use_role();
    let edit_buffer = use_edit_buffer::<Location>();
    let navigate = StoredValue::new_local(use_navigate());

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_locations().await {
                Ok(list) => {
                    let _ = set_locations.try_set(list);
                }
                Err(err) => log::error!("Error fetching locations: {err}"),
            }
            let _ = set_loading.try_set(false);
        });
    };
    fetch();

    let edit_location = move |location: Location| {
        if can_edit(role.get_untracked()) {
            edit_buffer.put(location);
            navigate.with_value(|nav| nav("/addLocation", Default::default()));
        } else {
            crate::shared::alert("You do not have permission to edit locations.");
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Locations">
                <button
                    class="button button--primary"
                    on:click=move |_| navigate.with_value(|nav| nav("/addLocation", Default::default()))
                >
                    {icon("plus")}
                    "New location"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <Show when=move || loading.get()>
                <div class="loading-indicator">"Loading locations..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Code"</th>
                            <th class="table__header-cell">"Country"</th>
                            <th class="table__header-cell">"City"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || locations.get().into_iter().map(|location| {
                            let edit = edit_location.clone();
                            let record = location.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{location.location_name}</td>
                                    <td class="table__cell">{location.location_code}</td>
                                    <td class="table__cell">{location.country}</td>
                                    <td class="table__cell">{location.city}</td>
                                    <td class="table__cell">{location.location_description}</td>
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
