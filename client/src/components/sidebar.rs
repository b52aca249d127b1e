//! Role-specific navigation menu.
//!
//! The highlighted entry is derived from the resolved view, so labels that
//! fall back to the dashboard highlight "Dashboard" rather than the entry
//! that was clicked.

use leptos::prelude::*;

use crate::state::nav::{self, NavLink};
use crate::state::session::{Role, Session};

#[component]
pub fn Sidebar(role: Role) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let resolution = Memo::new(move |_| session.with(Session::resolve));

    let links = nav::sidebar_links(role)
        .iter()
        .map(|link: &'static NavLink| {
            let class = move || {
                if nav::is_active_link(link, resolution.get()) {
                    "sidebar__link sidebar__link--active"
                } else {
                    "sidebar__link"
                }
            };
            view! {
                <li>
                    <button class=class on:click=move |_| session.update(|s| s.navigate(link.page))>
                        <span class="sidebar__icon">{link.icon}</span>
                        <span>{link.label}</span>
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <h1>"MonitorAI"</h1>
                <p>{role.portal_label()}</p>
            </div>
            <nav class="sidebar__nav">
                <ul>{links}</ul>
            </nav>
            <div class="sidebar__footer">
                <p class="sidebar__footer-label">"System Status"</p>
                <div class="sidebar__footer-status">
                    <span class="pulse-dot"></span>
                    <span>"All Systems Active"</span>
                </div>
            </div>
        </aside>
    }
}
