//! Attendance records with search, status filter, summary tiles, and a
//! JSON export of the filtered rows.

use leptos::prelude::*;

use crate::components::data_table::{DataTable, table_cells};
use crate::demo;
use crate::model::{AttendanceStatus, NotificationKind};
use crate::state::session::Role;
use crate::state::ui::UiState;
use crate::util::attendance_filter::{AttendanceStats, STATUS_FILTER_ALL, export_json, filter_records};
use crate::util::download::download_text;

const COLUMNS: &[&str] = &["employeeName", "timestamp", "status", "checkInTime", "checkOutTime"];
const EXPORT_FILENAME: &str = "attendance-records.json";

#[component]
pub fn AttendancePage(role: Role) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let records = StoredValue::new(demo::attendance_records());
    let search = RwSignal::new(String::new());
    let status_filter = RwSignal::new(STATUS_FILTER_ALL.to_owned());

    let stats = records.with_value(|r| AttendanceStats::from_records(r));
    let filtered = Memo::new(move |_| {
        records.with_value(|r| filter_records(r, &search.get(), &status_filter.get()))
    });
    let rows = Signal::derive(move || filtered.with(|f| table_cells(f, COLUMNS)));

    let on_export = move |_| {
        let outcome = filtered.with_untracked(|f| export_json(f).map_err(|e| e.to_string()).map(|json| (f.len(), json)));
        let outcome = outcome.and_then(|(count, json)| {
            download_text(EXPORT_FILENAME, "application/json", &json).map(|()| count)
        });
        match outcome {
            Ok(count) => ui.update(|u| {
                u.push_toast(NotificationKind::Success, format!("Exported {count} records"));
            }),
            Err(err) => {
                leptos::logging::warn!("attendance export failed: {err}");
                ui.update(|u| {
                    u.push_toast(NotificationKind::Error, "Export failed");
                });
            }
        }
    };

    let subtitle = match role {
        Role::Admin => "All employee attendance records",
        Role::User => "Your attendance history",
    };
    let status_options = AttendanceStatus::ALL
        .into_iter()
        .map(|s| view! { <option value=s.label()>{s.label()}</option> })
        .collect_view();

    view! {
        <div class="page attendance">
            <div class="page__header page__header--split">
                <div>
                    <h1>"Attendance Records"</h1>
                    <p class="muted">{subtitle}</p>
                </div>
                <button class="button button--primary" on:click=on_export>
                    "Export"
                </button>
            </div>
            <div class="stat-grid">
                <div class="stat-card">
                    <p class="stat-card__label">"Total Records"</p>
                    <p class="stat-card__value">{stats.total}</p>
                </div>
                <div class="stat-card stat-card--success">
                    <p class="stat-card__label">"Present"</p>
                    <p class="stat-card__value">{stats.present}</p>
                </div>
                <div class="stat-card stat-card--warning">
                    <p class="stat-card__label">"Late"</p>
                    <p class="stat-card__value">{stats.late}</p>
                </div>
                <div class="stat-card stat-card--danger">
                    <p class="stat-card__label">"Absent"</p>
                    <p class="stat-card__value">{stats.absent}</p>
                </div>
            </div>
            <div class="card filter-bar">
                <input
                    class="input"
                    type="search"
                    placeholder="Search by employee name..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="input"
                    prop:value=move || status_filter.get()
                    on:change=move |ev| status_filter.set(event_target_value(&ev))
                >
                    <option value=STATUS_FILTER_ALL>"All Status"</option>
                    {status_options}
                </select>
                <button class="button">"Date Range"</button>
            </div>
            <section class="card">
                <h2 class="card__title">{move || format!("Records ({})", filtered.with(Vec::len))}</h2>
                <DataTable columns=COLUMNS.to_vec() rows=rows />
            </section>
        </div>
    }
}
