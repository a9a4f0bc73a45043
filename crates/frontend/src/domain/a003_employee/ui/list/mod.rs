use contracts::domain::a003_employee::aggregate::Employee;
use contracts::system::auth::can_edit;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::domain::a003_employee::api;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::nav_state::use_edit_buffer;
use crate::system::auth::context::use_role;

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let (employees, set_employees) = signal::<Vec<Employee>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let role = use_role();
    let edit_buffer = use_edit_buffer::<Employee>();
    let navigate = StoredValue::new_local(use_navigate());

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_employees().await {
                Ok(list) => {
                    let _ = set_employees.try_set(list);
                }
                Err(err) => log::error!("Error fetching employees: {err}"),
            }
            let _ = set_loading.try_set(false);
        });
    };
    fetch();

    let edit_employee = move |employee: Employee| {
        if can_edit(role.get_untracked()) {
            edit_buffer.put(employee);
            navigate.with_value(|nav| nav("/addEmployee", Default::default()));
        } else {
            crate::shared::alert("You do not have permission to edit employees.");
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Employees">
                <button
                    class="button button--primary"
                    on:click=move |_| navigate.with_value(|nav| nav("/addEmployee", Default::default()))
                >
                    {icon("plus")}
                    "New employee"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <Show when=move || loading.get()>
                <div class="loading-indicator">"Loading employees..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Location"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Phone"</th>
                            <th class="table__header-cell">"Address"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || employees.get().into_iter().map(|employee| {
                            let edit = edit_employee.clone();
                            let record = employee.clone();
                            // Location name and code come denormalized from
                            // the backend; no client-side join.
                            let location = employee
                                .location_details
                                .as_ref()
                                .map(|d| format!("{} ({})", d.location_name, d.location_code))
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{employee.employee_name}</td>
                                    <td class="table__cell">{location}</td>
                                    <td class="table__cell">{employee.contact_email}</td>
                                    <td class="table__cell">{employee.contact_phone}</td>
                                    <td class="table__cell">{employee.address}</td>
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
