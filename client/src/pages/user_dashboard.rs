//! Employee overview: personal KPIs, wellness hub, recent attendance, and
//! AI insights.

use leptos::prelude::*;

use crate::components::ai_insights::AiInsights;
use crate::components::data_table::{DataTable, table_cells};
use crate::components::kpi_card::KpiCard;
use crate::components::wellness_check::WellnessCheck;
use crate::demo;

const RECENT_COLUMNS: &[&str] = &["timestamp", "status", "checkInTime", "checkOutTime"];

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let kpis = demo::user_kpis().into_iter().map(|kpi| view! { <KpiCard kpi=kpi /> }).collect_view();
    let recent = table_cells(&demo::recent_attendance(), RECENT_COLUMNS);

    view! {
        <div class="page user-dashboard">
            <div class="kpi-grid">{kpis}</div>
            <div class="split">
                <section class="card split__main">
                    <h2 class="card__title">"My Recent Attendance"</h2>
                    <DataTable columns=RECENT_COLUMNS.to_vec() rows=Signal::stored(recent) />
                </section>
                <WellnessCheck />
            </div>
            <AiInsights insights=demo::insights() />
        </div>
    }
}
