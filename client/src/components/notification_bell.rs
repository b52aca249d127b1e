//! Navbar bell with unread badge and a notification popover.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::classify::notification_style;

#[component]
pub fn NotificationBell() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let unread = move || ui.with(UiState::unread_count);
    let open = move || ui.with(|u| u.bell_open);

    view! {
        <div class="bell">
            <button class="bell__button" title="Notifications" on:click=move |_| ui.update(UiState::toggle_bell)>
                "🔔"
                <Show when=move || (unread() > 0)>
                    <span class="bell__badge">{unread}</span>
                </Show>
            </button>
            <Show when=open>
                <div class="bell__popover">
                    <div class="bell__popover-head">
                        <span>"Notifications"</span>
                        <button class="bell__mark-read" on:click=move |_| ui.update(UiState::mark_all_read)>
                            "Mark all read"
                        </button>
                    </div>
                    <ul class="bell__list">
                        {move || {
                            ui.with(|u| {
                                u.notifications
                                    .iter()
                                    .map(|n| {
                                        let class = format!(
                                            "{}{}",
                                            notification_style(n.kind),
                                            if n.read { "" } else { " notice--unread" },
                                        );
                                        view! {
                                            <li class=class>
                                                <p>{n.message.clone()}</p>
                                                <span class="notice__time">{n.timestamp.clone()}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
