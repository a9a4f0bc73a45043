//! Labeled form controls the entity forms are composed from.
//!
//! Each control renders a `form__group` with a label and forwards edits
//! through a callback; the owning view-model holds the actual state.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" unless given; use "date", "email", "tel" where it helps.
    #[prop(optional, into)] input_type: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            <input
                class="form__input"
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            <textarea
                class="form__textarea"
                rows="3"
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Numeric input bound to an `f64`. Unparsable text reads as zero, which
/// the presence validation then rejects.
#[component]
pub fn NumberField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<f64>,
    on_input: Callback<f64>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            <input
                class="form__input"
                type="number"
                step="0.01"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    let parsed = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                    on_input.run(parsed);
                }
            />
        </div>
    }
}

/// Select over `(value, label)` pairs. An empty `value` is the "nothing
/// chosen" state; the optional placeholder names it.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {move || placeholder.get().map(|p| view! {
                    <option value="" selected=move || value.get().is_empty()>{p}</option>
                })}
                <For
                    each=move || options.get()
                    key=|(option_value, _)| option_value.clone()
                    children=move |(option_value, option_label)| {
                        let this = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == this
                            >
                                {option_label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
