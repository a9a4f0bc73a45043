use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

struct MenuGroup {
    label: &'static str,
    // (path, label, icon)
    items: &'static [(&'static str, &'static str, &'static str)],
}

const MENU: &[MenuGroup] = &[
    MenuGroup {
        label: "Inventory",
        items: &[
            ("/assets", "Assets", "assets"),
            ("/categories", "Categories", "categories"),
            ("/locations", "Locations", "locations"),
        ],
    },
    MenuGroup {
        label: "Partners",
        items: &[
            ("/suppliers", "Suppliers", "suppliers"),
            ("/employees", "Employees", "employees"),
        ],
    },
    MenuGroup {
        label: "Finance",
        items: &[("/payments", "Payments", "payments")],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            {MENU.iter().map(|group| view! {
                <div class="sidebar__group">
                    <div class="sidebar__group-label">{group.label}</div>
                    <ul class="sidebar__items">
                        {group.items.iter().map(|(path, label, icon_name)| view! {
                            <li class="sidebar__item">
                                <A href=*path>
                                    {icon(icon_name)}
                                    <span>{*label}</span>
                                </A>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            }).collect_view()}
        </nav>
    }
}
