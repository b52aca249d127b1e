//! Root application component with context providers and view resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is a single route. Which screen renders is decided by the session
//! signal: no role shows the login page, otherwise the resolved `PageView`
//! renders inside the signed-in layout.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::toast_stack::ToastStack;
use crate::demo;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_settings::AdminSettingsPage, analytics::AnalyticsPage,
    attendance::AttendancePage, camera_monitoring::CameraMonitoringPage, live_camera::LiveCameraPage,
    login::LoginPage, user_dashboard::UserDashboardPage, user_settings::UserSettingsPage, wellness::WellnessPage,
};
use crate::state::nav::PageView;
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let ui = RwSignal::new(UiState::with_notifications(demo::notifications()));
    provide_context(session);
    provide_context(ui);

    // Storage is only readable after hydration.
    Effect::new(move |_| {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/monitorai.css"/>
        <Title text="MonitorAI - AI Employee Monitoring"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PageHost/>
            </Routes>
        </Router>
        <ToastStack/>
    }
}

/// Login page or signed-in layout, depending on the session role.
#[component]
fn PageHost() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let role = Memo::new(move |_| session.with(|s| s.role));

    move || match role.get() {
        None => view! { <LoginPage/> }.into_any(),
        Some(role) => view! {
            <Layout role=role>
                <PageBody/>
            </Layout>
        }
        .into_any(),
    }
}

/// Body of the signed-in layout for the resolved page.
#[component]
fn PageBody() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let resolution = Memo::new(move |_| session.with(Session::resolve));

    Effect::new(move |_| {
        let r = resolution.get();
        if r.fell_back {
            let requested = session.with_untracked(|s| s.current_page.clone());
            leptos::logging::warn!("router: unknown page '{requested}', showing {:?}", r.view);
        }
    });

    move || match resolution.get().view {
        PageView::Login => view! { <LoginPage/> }.into_any(),
        PageView::UserDashboard => view! { <UserDashboardPage/> }.into_any(),
        PageView::AdminDashboard => view! { <AdminDashboardPage/> }.into_any(),
        PageView::Attendance(role) => view! { <AttendancePage role=role/> }.into_any(),
        PageView::Analytics => view! { <AnalyticsPage/> }.into_any(),
        PageView::Wellness => view! { <WellnessPage/> }.into_any(),
        PageView::LiveCamera => view! { <LiveCameraPage/> }.into_any(),
        PageView::CameraMonitoring => view! { <CameraMonitoringPage/> }.into_any(),
        PageView::UserSettings => view! { <UserSettingsPage/> }.into_any(),
        PageView::AdminSettings => view! { <AdminSettingsPage/> }.into_any(),
    }
}
