//! Admin overview: KPIs, system health, employees, today's attendance, and
//! AI insights.
//!
//! The AI accuracy tile is the only live value. It starts at 97.8% and
//! random-walks within its bounds every five seconds while the page is
//! mounted.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::ai_insights::AiInsights;
use crate::components::data_table::{DataTable, TableRow, table_cells};
use crate::components::kpi_card::KpiCard;
use crate::components::system_status_bar::SystemStatusBar;
use crate::demo;
use crate::model::{Employee, Kpi, KpiVariant};
use crate::util::random_walk::{self, AI_ACCURACY};
use crate::util::ticker::use_ticker;

const AI_ACCURACY_START: f64 = 97.8;
const AI_ACCURACY_PERIOD: Duration = Duration::from_secs(5);

/// Position of the live AI accuracy tile among the static KPIs.
const AI_ACCURACY_SLOT: usize = 2;

const TODAY_COLUMNS: &[&str] = &["employeeName", "timestamp", "status", "checkInTime"];

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let accuracy = RwSignal::new(AI_ACCURACY_START);
    let mut rng = random_walk::view_rng();
    use_ticker(AI_ACCURACY_PERIOD, move || {
        accuracy.update(|v| *v = random_walk::random_walk(*v, AI_ACCURACY, &mut rng));
    });
    let accuracy_label = Signal::derive(move || random_walk::format_percent(accuracy.get()));

    let mut kpis = demo::admin_kpis()
        .into_iter()
        .map(|kpi| view! { <KpiCard kpi=kpi /> }.into_any())
        .collect::<Vec<_>>();
    let live = Kpi::new("AI Accuracy", "", "🧠").variant(KpiVariant::Warning);
    kpis.insert(
        AI_ACCURACY_SLOT.min(kpis.len()),
        view! { <KpiCard kpi=live live_value=accuracy_label /> }.into_any(),
    );

    let employees = table_cells(&demo::employees(), Employee::COLUMNS);
    let today = table_cells(&demo::today_attendance(), TODAY_COLUMNS);

    view! {
        <div class="page admin-dashboard">
            <div class="kpi-grid kpi-grid--five">{kpis}</div>
            <SystemStatusBar metrics=demo::system_metrics() />
            <section class="card">
                <div class="card__head">
                    <h2 class="card__title">"Employee Management"</h2>
                    <button class="button button--primary">"Add Employee"</button>
                </div>
                <DataTable columns=Employee::COLUMNS.to_vec() rows=Signal::stored(employees) />
            </section>
            <section class="card">
                <h2 class="card__title">"Today's Attendance Overview"</h2>
                <DataTable columns=TODAY_COLUMNS.to_vec() rows=Signal::stored(today) />
            </section>
            <AiInsights insights=demo::insights() />
        </div>
    }
}
