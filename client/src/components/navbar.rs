//! Top bar with greeting, date, theme toggle, notifications, and logout.

use leptos::prelude::*;

use crate::components::notification_bell::NotificationBell;
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::{clock, dark_mode};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Filled after hydration; the server has no local date to render.
    let today = RwSignal::new(String::new());
    Effect::new(move |_| today.set(clock::long_date_label()));

    let on_theme = move |_| {
        let next = dark_mode::toggle(ui.with_untracked(|u| u.dark_mode));
        ui.update(|u| u.dark_mode = next);
    };
    let on_logout = move |_| {
        leptos::logging::log!("session: logout");
        session.update(Session::logout);
    };

    view! {
        <header class="navbar">
            <div class="navbar__greeting">
                <h2>"Welcome back, " {move || session.with(|s| s.display_name.clone())}</h2>
                <p class="navbar__date">{move || today.get()}</p>
            </div>
            <div class="navbar__actions">
                <button class="navbar__theme" title="Toggle theme" on:click=on_theme>
                    {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
                </button>
                <NotificationBell />
                <div class="navbar__divider"></div>
                <div class="navbar__user">
                    <span class="navbar__avatar">"👤"</span>
                    <button class="navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}
