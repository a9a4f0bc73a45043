use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::nav_state;
use crate::system::auth;

#[component]
pub fn App() -> impl IntoView {
    // Root services: the role channel and the per-entity edit buffers that
    // carry a selected record across a list -> form navigation.
    auth::context::provide_auth();
    nav_state::provide_edit_buffers();

    view! { <AppRoutes /> }
}
