//! Generic record table with status badges and an empty placeholder.
//!
//! DESIGN
//! ======
//! Rows are flattened to strings before rendering, keyed by camelCase
//! column names. Headers are derived from the keys, and any column whose key
//! contains "status" renders its cell as a badge styled by
//! `classify::status_style`.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use leptos::prelude::*;

use crate::model::{AttendanceRecord, Employee};
use crate::util::classify::status_style;

/// Cell text for records missing a value.
pub const EMPTY_CELL: &str = "-";

/// A record that can render as one table row.
pub trait TableRow {
    /// Column keys shown when the caller does not pick its own.
    const COLUMNS: &'static [&'static str];

    /// Cell text for `column`. Unknown columns render as `EMPTY_CELL`.
    fn cell(&self, column: &str) -> String;
}

impl TableRow for Employee {
    const COLUMNS: &'static [&'static str] = &["name", "email", "department", "status"];

    fn cell(&self, column: &str) -> String {
        match column {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "email" => self.email.clone(),
            "department" => self.department.clone(),
            "status" => self.status.label().to_owned(),
            _ => EMPTY_CELL.to_owned(),
        }
    }
}

impl TableRow for AttendanceRecord {
    const COLUMNS: &'static [&'static str] = &["employeeName", "timestamp", "status"];

    fn cell(&self, column: &str) -> String {
        let or_empty = |v: &Option<String>| v.clone().unwrap_or_else(|| EMPTY_CELL.to_owned());
        match column {
            "id" => self.id.to_string(),
            "employeeName" => self.employee_name.clone(),
            "timestamp" => self.timestamp.clone(),
            "status" => self.status.label().to_owned(),
            "checkInTime" => or_empty(&self.check_in_time),
            "checkOutTime" => or_empty(&self.check_out_time),
            _ => EMPTY_CELL.to_owned(),
        }
    }
}

/// Flatten records into rows of cell text for `columns`.
pub fn table_cells<T: TableRow>(items: &[T], columns: &[&str]) -> Vec<Vec<String>> {
    items.iter().map(|item| columns.iter().map(|c| item.cell(c)).collect()).collect()
}

/// `employeeName` -> `Employee Name`.
pub fn format_header(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn is_status_column(key: &str) -> bool {
    key.to_lowercase().contains("status")
}

#[component]
pub fn DataTable(#[prop(into)] columns: Vec<&'static str>, #[prop(into)] rows: Signal<Vec<Vec<String>>>) -> impl IntoView {
    move || {
        let body = rows.get();
        if body.is_empty() {
            return view! { <div class="data-table__empty">"No data available"</div> }.into_any();
        }
        let headers = columns.iter().map(|c| view! { <th>{format_header(c)}</th> }).collect_view();
        let status_cols: Vec<bool> = columns.iter().map(|c| is_status_column(c)).collect();
        let body_rows = body
            .into_iter()
            .map(|row| {
                let cells = row
                    .into_iter()
                    .zip(status_cols.iter().copied())
                    .map(|(text, is_status)| {
                        if is_status {
                            let class = status_style(&text);
                            view! { <td><span class=class>{text}</span></td> }.into_any()
                        } else {
                            view! { <td>{text}</td> }.into_any()
                        }
                    })
                    .collect_view();
                view! { <tr>{cells}</tr> }
            })
            .collect_view();
        view! {
            <div class="data-table">
                <table>
                    <thead>
                        <tr>{headers}</tr>
                    </thead>
                    <tbody>{body_rows}</tbody>
                </table>
            </div>
        }
        .into_any()
    }
}
