//! Employee settings. Only the theme choice is persisted; the rest of the
//! form is local to the page.

use leptos::prelude::*;

use crate::model::NotificationKind;
use crate::state::ui::UiState;
use crate::util::dark_mode;

const PROFILE: [(&str, &str, &str); 4] = [
    ("Full Name", "text", "Srinivas Kumar"),
    ("Email", "email", "srinivas@company.com"),
    ("Department", "text", "Engineering"),
    ("Employee ID", "text", "EMP-001"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NotificationPrefs {
    attendance: bool,
    late_arrival: bool,
    system_updates: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self { attendance: true, late_arrival: true, system_updates: false }
    }
}

#[component]
pub fn UserSettingsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let prefs = RwSignal::new(NotificationPrefs::default());

    let set_theme = move |dark: bool| {
        dark_mode::set(dark);
        ui.update(|u| u.dark_mode = dark);
    };
    let theme_class = move |dark: bool| {
        if ui.with(|u| u.dark_mode) == dark { "button button--primary" } else { "button" }
    };

    let profile = PROFILE
        .iter()
        .map(|(label, kind, value)| {
            view! {
                <label class="field">
                    <span>{*label}</span>
                    <input class="input" type=*kind value=*value />
                </label>
            }
        })
        .collect_view();

    let pref_row = move |label: &'static str, get: fn(&NotificationPrefs) -> bool, flip: fn(&mut NotificationPrefs)| {
        view! {
            <label class="summary-row">
                <span>{label}</span>
                <input
                    type="checkbox"
                    prop:checked=move || prefs.with(get)
                    on:change=move |_| prefs.update(flip)
                />
            </label>
        }
    };

    let on_save = move |_| {
        leptos::logging::log!("user settings saved");
        ui.update(|u| {
            u.push_toast(NotificationKind::Success, "Settings saved");
        });
    };

    view! {
        <div class="page settings">
            <div class="page__header">
                <h1>"Settings"</h1>
                <p class="muted">"Manage your account preferences"</p>
            </div>
            <section class="card">
                <h2 class="card__title">"Profile Information"</h2>
                <div class="field-grid">{profile}</div>
            </section>
            <section class="card">
                <h2 class="card__title">"Notifications"</h2>
                {pref_row("Attendance reminders", |p| p.attendance, |p| p.attendance = !p.attendance)}
                {pref_row("Late arrival alerts", |p| p.late_arrival, |p| p.late_arrival = !p.late_arrival)}
                {pref_row("System updates", |p| p.system_updates, |p| p.system_updates = !p.system_updates)}
            </section>
            <section class="card">
                <h2 class="card__title">"Preferences"</h2>
                <div class="summary-row">
                    <span>"Theme"</span>
                    <div class="filter-bar">
                        <button class=move || theme_class(false) on:click=move |_| set_theme(false)>"Light"</button>
                        <button class=move || theme_class(true) on:click=move |_| set_theme(true)>"Dark"</button>
                    </div>
                </div>
            </section>
            <section class="card">
                <h2 class="card__title">"Security"</h2>
                <button class="button button--primary">"Change Password"</button>
            </section>
            <div class="page__footer">
                <button class="button">"Cancel"</button>
                <button class="button button--primary" on:click=on_save>"Save Changes"</button>
            </div>
        </div>
    }
}
