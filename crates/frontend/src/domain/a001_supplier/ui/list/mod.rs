use contracts::domain::a001_supplier::aggregate::Supplier;
use contracts::system::auth::can_edit;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::domain::a001_supplier::api;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::nav_state::use_edit_buffer;
use crate::system::auth::context::use_role;

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let (suppliers, set_suppliers) = signal::<Vec<Supplier>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let role = use_role();
    let edit_buffer = use_edit_buffer::<Supplier>();
    let navigate = StoredValue::new_local(use_navigate());

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_suppliers().await {
                // The collection is only ever replaced wholesale.
                Ok(list) => {
                    let _ = set_suppliers.try_set(list);
                }
                Err(err) => log::error!("Error fetching suppliers: {err}"),
            }
            let _ = set_loading.try_set(false);
        });
    };
    fetch();

    let edit_supplier = move |supplier: Supplier| {
        if can_edit(role.get_untracked()) {
            edit_buffer.put(supplier);
            navigate.with_value(|nav| nav("/addSupplier", Default::default()));
        } else {
            crate::shared::alert("You do not have permission to edit suppliers.");
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Suppliers">
                <button
                    class="button button--primary"
                    on:click=move |_| navigate.with_value(|nav| nav("/addSupplier", Default::default()))
                >
                    {icon("plus")}
                    "New supplier"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <Show when=move || loading.get()>
                <div class="loading-indicator">"Loading suppliers..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Contact"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Phone"</th>
                            <th class="table__header-cell">"Registration no."</th>
                            <th class="table__header-cell">"Country"</th>
                            <th class="table__header-cell">"City"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || suppliers.get().into_iter().map(|supplier| {
                            let edit = edit_supplier.clone();
                            let record = supplier.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{supplier.supplier_name}</td>
                                    <td class="table__cell">{supplier.contact_name}</td>
                                    <td class="table__cell">{supplier.contact_email}</td>
                                    <td class="table__cell">{supplier.contact_phone}</td>
                                    <td class="table__cell">{supplier.registration_no}</td>
                                    <td class="table__cell">{supplier.country}</td>
                                    <td class="table__cell">{supplier.city}</td>
                                    <td class="table__cell">{supplier.status}</td>
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
