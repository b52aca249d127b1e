//! Corner stack of dismissible toasts.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::classify::notification_style;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-stack" role="status">
            <For
                each=move || ui.with(|u| u.toasts.clone())
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", notification_style(toast.kind))>
                            <span>{toast.message}</span>
                            <button class="toast__close" on:click=move |_| ui.update(|u| u.dismiss_toast(id))>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
