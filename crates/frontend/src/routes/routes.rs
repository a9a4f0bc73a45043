use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_supplier::ui::details::SupplierForm;
use crate::domain::a001_supplier::ui::list::SupplierList;
use crate::domain::a002_location::ui::details::LocationForm;
use crate::domain::a002_location::ui::list::LocationList;
use crate::domain::a003_employee::ui::details::EmployeeForm;
use crate::domain::a003_employee::ui::list::EmployeeList;
use crate::domain::a004_asset::ui::details::AssetForm;
use crate::domain::a004_asset::ui::list::AssetList;
use crate::domain::a005_category::ui::details::CategoryForm;
use crate::domain::a005_category::ui::list::CategoryList;
use crate::domain::a006_payment::ui::details::PaymentForm;
use crate::domain::a006_payment::ui::list::PaymentList;
use crate::layout::Shell;

/// Route table. Each form route serves both Create and Edit: an edit entry
/// arrives with a payload in the entity's edit buffer, a plain visit does
/// not and the form starts in Create mode.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="empty-state">"Page not found."</p> }>
                    <Route path=path!("/") view=AssetList />
                    <Route path=path!("/assets") view=AssetList />
                    <Route path=path!("/categories") view=CategoryList />
                    <Route path=path!("/employees") view=EmployeeList />
                    <Route path=path!("/locations") view=LocationList />
                    <Route path=path!("/suppliers") view=SupplierList />
                    <Route path=path!("/payments") view=PaymentList />
                    <Route path=path!("/addAsset") view=AssetForm />
                    <Route path=path!("/addCategory") view=CategoryForm />
                    <Route path=path!("/addEmployee") view=EmployeeForm />
                    <Route path=path!("/addLocation") view=LocationForm />
                    <Route path=path!("/addSupplier") view=SupplierForm />
                    <Route path=path!("/addPayment") view=PaymentForm />
                </Routes>
            </Shell>
        </Router>
    }
}
