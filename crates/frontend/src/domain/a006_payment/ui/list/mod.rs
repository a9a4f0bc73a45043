use contracts::domain::a006_payment::aggregate::PaymentListRow;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::domain::a006_payment::api;
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;

/// Read-only register of recorded payments. Unlike the other lists there
/// is no edit action, so no role subscription either.
#[component]
#[allow(non_snake_case)]
pub fn PaymentList() -> impl IntoView {
    let (payments, set_payments) = signal::<Vec<PaymentListRow>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let navigate = StoredValue::new_local(use_navigate());

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_payments().await {
                Ok(list) => {
                    let _ = set_payments.try_set(list);
                }
                Err(err) => log::error!("Error fetching payments: {err}"),
            }
            let _ = set_loading.try_set(false);
        });
    };
    fetch();

    view! {
        <div class="page">
            <PageHeader title="Payments">
                <button
                    class="button button--primary"
                    on:click=move |_| navigate.with_value(|nav| nav("/addPayment", Default::default()))
                >
                    {icon("plus")}
                    "New payment"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <Show when=move || loading.get()>
                <div class="loading-indicator">"Loading payments..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Asset"</th>
                            <th class="table__header-cell">"Supplier"</th>
                            <th class="table__header-cell">"Cheque no."</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell table__header-cell--number">"Amount"</th>
                            <th class="table__header-cell table__header-cell--number">"To return"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || payments.get().into_iter().map(|payment| view! {
                            <tr class="table__row">
                                <td class="table__cell">{payment.asset_name}</td>
                                <td class="table__cell">{payment.supplier_name}</td>
                                <td class="table__cell">{payment.cheque_number}</td>
                                <td class="table__cell">{format_date(&payment.payment_date)}</td>
                                <td class="table__cell table__cell--number">
                                    {format!("{:.2}", payment.amount)}
                                </td>
                                <td class="table__cell table__cell--number">
                                    {format!("{:.2}", payment.amount_to_return)}
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
