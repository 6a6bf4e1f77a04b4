//! Weekly agenda page.

use chrono::{Datelike, NaiveDate};
use leptos::*;

use super::components::{Alert, AlertKind};
use super::layout::render_document;
use crate::schedule::{hour_slot, GridCell, HourRow, ProjectedWeek, SlotConflict};

/// Fixed label of an occupied cell
pub const APPOINTMENT_LABEL: &str = "Control Rutinario";

const MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// `Semana del 15 de Diciembre, 2025`
pub fn week_caption(start: NaiveDate) -> String {
    format!(
        "Semana del {} de {}, {}",
        start.day(),
        MONTHS[start.month0() as usize],
        start.year()
    )
}

pub struct DashboardView {
    pub week: ProjectedWeek,
    pub week_start: NaiveDate,
    pub previous_href: String,
    pub next_href: String,
    /// Non-blocking fetch failure
    pub notice: Option<String>,
}

pub fn render(dashboard: DashboardView) -> String {
    render_document(
        "OdontoBuild | Agenda",
        "bg-gray-50 font-sans text-gray-800",
        move || view! { <DashboardPage dashboard=dashboard /> },
    )
}

#[component]
fn DashboardPage(dashboard: DashboardView) -> impl IntoView {
    let DashboardView {
        week,
        week_start,
        previous_href,
        next_href,
        notice,
    } = dashboard;
    let ProjectedWeek {
        columns,
        rows,
        conflicts,
        outside_hours,
    } = week;

    let template = format!(
        "grid-template-columns: 6rem repeat({}, minmax(0, 1fr))",
        columns.len()
    );
    let row_template = template.clone();

    view! {
        <div class="min-h-screen flex">
            <Sidebar />

            <main class="flex-1 p-8 overflow-y-auto">
                <header class="flex justify-between items-center mb-8 bg-white p-4 rounded-xl shadow-sm border border-gray-100">
                    <div>
                        <h1 class="text-2xl font-bold text-gray-800">"Agenda Clínica"</h1>
                        <p class="text-sm text-gray-500">{week_caption(week_start)}</p>
                    </div>
                    <nav class="flex items-center gap-2 text-sm">
                        <a href=previous_href class="px-3 py-1 rounded border border-gray-200 hover:bg-gray-50">
                            "← Semana anterior"
                        </a>
                        <a href=next_href class="px-3 py-1 rounded border border-gray-200 hover:bg-gray-50">
                            "Semana siguiente →"
                        </a>
                    </nav>
                </header>

                <div class="space-y-3 mb-6">
                    {notice.map(|message| view! { <Alert kind=AlertKind::Warning message=message /> })}
                    <ConflictNotice conflicts=conflicts />
                    {(outside_hours > 0).then(|| {
                        let message = format!(
                            "{} cita(s) de esta semana quedan fuera del horario mostrado.",
                            outside_hours
                        );
                        view! { <Alert kind=AlertKind::Info message=message /> }
                    })}
                </div>

                <div class="bg-white rounded-xl shadow-lg border border-gray-200 overflow-hidden">
                    <div class="grid gap-0 bg-gray-50 border-b border-gray-200" style=template>
                        <div class="py-4 text-center text-xs font-bold text-gray-400 uppercase tracking-wider border-r">
                            "Hora"
                        </div>
                        {columns
                            .into_iter()
                            .map(|column| view! {
                                <div class="py-4 text-center text-sm font-semibold text-gray-700 border-r">
                                    {column.label}
                                </div>
                            })
                            .collect_view()}
                    </div>

                    <div class="divide-y divide-gray-100">
                        {rows
                            .into_iter()
                            .map(|row| view! { <AgendaRow row=row template=row_template.clone() /> })
                            .collect_view()}
                    </div>
                </div>
            </main>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-64 bg-slate-900 text-white p-6 flex flex-col shadow-xl z-10">
            <h2 class="text-2xl font-bold mb-10 flex items-center gap-2 tracking-tight">"🦷 OdontoBuild"</h2>
            <nav class="space-y-3 flex-grow">
                <a href="/dashboard" class="flex items-center gap-3 py-3 px-4 bg-blue-600 rounded-lg shadow-md font-medium">
                    "📅 Agenda Semanal"
                </a>
                <span aria-disabled="true" class="flex items-center gap-3 py-3 px-4 text-slate-400 rounded-lg cursor-not-allowed">
                    "👤 Pacientes"
                </span>
                <span aria-disabled="true" class="flex items-center gap-3 py-3 px-4 text-slate-400 rounded-lg cursor-not-allowed">
                    "🛡️ Auditoría Legal"
                </span>
            </nav>
            <form method="post" action="/logout" class="mt-8">
                <button type="submit" class="text-sm text-red-400 text-left hover:text-red-300 transition font-semibold">
                    "← Cerrar Sesión"
                </button>
            </form>
        </aside>
    }
}

#[component]
fn AgendaRow(row: HourRow, template: String) -> impl IntoView {
    view! {
        <div class="grid gap-0 h-24" style=template>
            <div class="text-gray-400 text-xs font-bold flex items-center justify-center border-r bg-gray-50/50">
                {row.label}
            </div>
            {row.cells.into_iter().map(|cell| view! { <AgendaCell cell=cell /> }).collect_view()}
        </div>
    }
}

#[component]
fn AgendaCell(cell: GridCell) -> impl IntoView {
    match cell.appointment {
        Some(appointment) => view! {
            <div class="border-r p-1">
                <div class="bg-blue-100 p-2 rounded border-l-4 border-blue-500 text-blue-800 text-xs shadow-sm">
                    <strong class="block text-blue-900">{appointment.patient_name}</strong>
                    <span class="text-blue-600">{APPOINTMENT_LABEL}</span>
                </div>
            </div>
        }
        .into_view(),
        None => view! {
            <div class="border-r p-1">
                <div class="hover:bg-gray-50 transition h-full rounded"></div>
            </div>
        }
        .into_view(),
    }
}

#[component]
fn ConflictNotice(conflicts: Vec<SlotConflict>) -> impl IntoView {
    if conflicts.is_empty() {
        return view! {}.into_view();
    }

    view! {
        <div class="bg-amber-50 border-l-4 border-amber-500 text-amber-800 p-3 rounded text-sm" role="status">
            <p class="font-semibold">"Citas superpuestas no mostradas en la grilla:"</p>
            <ul class="list-disc ml-5 mt-1">
                {conflicts
                    .into_iter()
                    .map(|conflict| {
                        let detail = format!(
                            "{} ({} {}:00), mismo bloque que {}",
                            conflict.dropped.patient_name,
                            conflict.date.format("%d/%m"),
                            hour_slot(conflict.hour),
                            conflict.kept.patient_name
                        );
                        view! { <li>{detail}</li> }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_caption() {
        let start = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
        assert_eq!(week_caption(start), "Semana del 15 de Diciembre, 2025");
    }
}
