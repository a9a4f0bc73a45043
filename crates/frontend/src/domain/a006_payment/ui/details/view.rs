use contracts::domain::common::PickOption;
use leptos::prelude::*;

use super::view_model::PaymentFormViewModel;
use crate::shared::components::{NumberField, SelectField, TextField};
use crate::shared::icons::icon;

const PAYMENT_MODES: [&str; 3] = ["Cash", "Cheque", "Online"];

#[component]
#[allow(non_snake_case)]
pub fn PaymentForm() -> impl IntoView {
    let vm = PaymentFormViewModel::new();
    vm.load_pick_lists();

    view! {
        <div class="details-container payment-form">
            <div class="details-header">
                <h3>"Add Payment"</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="message message--error">{e}</div> })}
            {move || vm.success.get().map(|m| view! { <div class="message message--success">{m}</div> })}

            <div class="details-form">
                <SelectField
                    label="Asset"
                    required=true
                    value=Signal::derive(move || {
                        let id = vm.form.get().asset_id;
                        if id > 0 { id.to_string() } else { String::new() }
                    })
                    options=Signal::derive(move || {
                        vm.assets
                            .get()
                            .iter()
                            .map(|a| (a.option_id().to_string(), a.option_label().to_string()))
                            .collect()
                    })
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.asset_id = v.parse().unwrap_or(0));
                    })
                    placeholder="Select an asset"
                />
                <SelectField
                    label="Supplier"
                    required=true
                    value=Signal::derive(move || {
                        let id = vm.form.get().supplier_id;
                        if id > 0 { id.to_string() } else { String::new() }
                    })
                    options=Signal::derive(move || {
                        vm.suppliers
                            .get()
                            .iter()
                            .map(|s| (s.option_id().to_string(), s.option_label().to_string()))
                            .collect()
                    })
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.supplier_id = v.parse().unwrap_or(0));
                    })
                    placeholder="Select a supplier"
                />
                <SelectField
                    label="Payment mode"
                    required=true
                    value=Signal::derive(move || vm.form.get().payment_mode)
                    options=Signal::derive(|| {
                        PAYMENT_MODES
                            .iter()
                            .map(|m| (m.to_string(), m.to_string()))
                            .collect()
                    })
                    on_change=Callback::new(move |v| vm.form.update(|f| f.payment_mode = v))
                    placeholder="Select a mode"
                />
                <TextField
                    label="Cheque number"
                    value=Signal::derive(move || vm.form.get().cheque_number)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.cheque_number = v))
                    placeholder="Only for cheque payments"
                />
                <TextField
                    label="Payment date"
                    required=true
                    input_type="date"
                    value=Signal::derive(move || vm.form.get().payment_date)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.payment_date = v))
                />
                <NumberField
                    label="Amount"
                    required=true
                    value=Signal::derive(move || vm.form.get().amount)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.amount = v))
                />
                <NumberField
                    label="Amount to return"
                    value=Signal::derive(move || vm.form.get().amount_to_return)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.amount_to_return = v))
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.submit()
                    disabled=move || vm.loading.get()
                >
                    {icon("save")}
                    "Add payment"
                </button>
            </div>
        </div>
    }
}
