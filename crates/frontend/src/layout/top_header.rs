use contracts::system::auth::UserRole;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, use_role};

/// Top bar: application title and the session role.
///
/// The switcher stands in for the login flow, which lives outside this
/// application; it only feeds the role channel the way a real sign-in
/// would. Role checks stay a presentation convenience either way.
#[component]
pub fn TopHeader() -> impl IntoView {
    let auth = use_auth();
    let role = use_role();

    view! {
        <header class="top-header">
            <div class="top-header__brand">"Inventory Admin"</div>
            <div class="top-header__session">
                {icon("user")}
                <span class="top-header__role">
                    {move || role.get().map(|r| r.as_str()).unwrap_or("Not signed in")}
                </span>
                <select
                    class="top-header__switch"
                    prop:value=move || {
                        role.get().map(|r| r.as_str()).unwrap_or("").to_string()
                    }
                    on:change=move |ev| {
                        match UserRole::parse(&event_target_value(&ev)) {
                            Some(picked) => auth.sign_in(picked),
                            None => auth.sign_out(),
                        }
                    }
                >
                    <option value="">"Signed out"</option>
                    <option value="ADMIN">"ADMIN"</option>
                    <option value="USER">"USER"</option>
                </select>
            </div>
        </header>
    }
}
