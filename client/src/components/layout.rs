//! Signed-in page chrome: sidebar, navbar, and the page body.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::session::Role;

#[component]
pub fn Layout(role: Role, children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar role=role />
            <div class="layout__column">
                <Navbar />
                <main class="layout__main">{children()}</main>
            </div>
        </div>
    }
}
