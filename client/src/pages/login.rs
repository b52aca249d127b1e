//! Sign-in page. The username alone picks the portal; the password is
//! collected but never checked.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::session::Session;

/// Require a non-blank username. The value is returned untouched; role
/// selection compares the raw identifier.
fn validate_username(raw: &str) -> Result<&str, &'static str> {
    if raw.trim().is_empty() { Err("Enter your username.") } else { Ok(raw) }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let remember_me = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = username.get_untracked();
        match validate_username(&raw) {
            Ok(name) => {
                info.set(String::new());
                let role = session.try_update(|s| s.login(name));
                leptos::logging::log!("session: login as {role:?}");
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-brand">
                <div class="login-brand__logo">"🧠"</div>
                <h1>"MonitorAI"</h1>
                <p>"✨ Advanced AI-Powered Attendance System"</p>
            </div>
            <div class="login-card">
                <h2>"Sign In"</h2>
                <form class="login-form" on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <div class="login-password">
                        <input
                            id="password"
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="login-password__toggle"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <div class="login-form__row">
                        <label class="login-remember">
                            <input
                                type="checkbox"
                                prop:checked=move || remember_me.get()
                                on:change=move |ev| remember_me.set(event_target_checked(&ev))
                            />
                            <span>"Remember me"</span>
                        </label>
                        <button type="button" class="link-button">
                            "Forgot password?"
                        </button>
                    </div>
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__hint">"Demo: Use \"admin\" for Admin Portal or any other name for User Portal"</p>
            </div>
            <p class="login-footer">"© 2024 MonitorAI. All rights reserved."</p>
        </div>
    }
}
