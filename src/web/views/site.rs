//! Public tenant site page.

use chrono::NaiveDate;
use leptos::*;

use super::components::{Alert, AlertKind, CenteredMessage};
use super::layout::render_document;
use crate::models::{DoctorProfile, TenantSiteConfig};
use crate::site::{BookingError, BookingIntent, BookingQuery, DOCTOR_SUBTITLE};

pub struct SiteView {
    pub site: TenantSiteConfig,
    /// Form action, already percent-encoded
    pub action: String,
    pub hero_image: String,
    pub today: NaiveDate,
    /// Values of the last widget submit
    pub query: BookingQuery,
    pub booking: Option<Result<BookingIntent, BookingError>>,
}

pub fn render(page: SiteView) -> String {
    render_document("OdontoBuild | Sitio", "bg-gray-50 font-sans", move || {
        view! { <SitePage page=page /> }
    })
}

/// Terminal error screen of a visit
pub fn render_error(message: &'static str) -> String {
    render_document("OdontoBuild | Sitio", "bg-gray-50 font-sans", move || {
        view! { <CenteredMessage message=format!("Error: {}", message) error=true /> }
    })
}

#[component]
fn SitePage(page: SiteView) -> impl IntoView {
    let SiteView {
        site,
        action,
        hero_image,
        today,
        query,
        booking,
    } = page;
    let TenantSiteConfig {
        clinic_name,
        welcome_text,
        primary_color,
        logo_url,
        address,
        phone,
        doctors,
    } = site;
    let color = primary_color.as_str().to_string();

    let logo_alt = clinic_name.clone();
    let hero_style = format!("background-image: url({})", hero_image);
    let bar_style = format!("height: 8px; background-color: {}", color);
    let staff_style = format!("border-color: {}", color);
    let contact_style = staff_style.clone();
    let address_icon = format!("color: {}", color);
    let phone_icon = address_icon.clone();
    let address_label = address.unwrap_or_else(|| "Dirección no informada".to_string());
    let phone_label = phone
        .clone()
        .unwrap_or_else(|| "Teléfono no informado".to_string());
    let cards = doctors
        .iter()
        .cloned()
        .map(|doctor| view! { <DoctorCard doctor=doctor /> })
        .collect_view();

    view! {
        <header class="relative h-80 flex items-center justify-center text-center text-white">
            <div
                class="absolute inset-0 bg-cover bg-center z-0"
                style=hero_style
            />
            <div class="absolute inset-0 bg-black/50 z-10" />
            <div class="relative z-20 container mx-auto px-6">
                {logo_url.map(|src| view! {
                    <img src=src alt=logo_alt class="h-16 mx-auto mb-4 rounded bg-white/80 p-1" />
                })}
                <h1 class="text-5xl font-extrabold drop-shadow-lg mb-2">{clinic_name}</h1>
                <p class="text-xl font-light opacity-90">{welcome_text}</p>
            </div>
        </header>

        <div style=bar_style />

        <main class="container mx-auto px-6 py-12 grid grid-cols-1 lg:grid-cols-3 gap-12">
            <div class="lg:col-span-2 space-y-12">
                <section>
                    <h2 class="text-2xl font-bold text-gray-800 border-b-2 pb-2 mb-6" style=staff_style>
                        "Nuestros Especialistas"
                    </h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {cards}
                    </div>
                </section>

                <section>
                    <h2 class="text-2xl font-bold text-gray-800 border-b-2 pb-2 mb-6" style=contact_style>
                        "Contacto"
                    </h2>
                    <div class="bg-white p-6 rounded-xl shadow-sm border border-gray-100 space-y-4">
                        <p class="flex items-center text-gray-700">
                            <span class="mr-3" style=address_icon>"📍"</span>
                            {address_label}
                        </p>
                        <p class="flex items-center text-gray-700">
                            <span class="mr-3" style=phone_icon>"📞"</span>
                            {phone_label}
                        </p>
                    </div>
                </section>
            </div>

            <div class="lg:col-span-1">
                <div class="sticky top-8">
                    <BookingWidget
                        doctors=doctors
                        color=color
                        action=action
                        today=today
                        query=query
                        booking=booking
                        phone=phone
                    />
                    <p class="text-center text-gray-400 text-xs mt-4">"Powered by OdontoBuild SaaS"</p>
                </div>
            </div>
        </main>
    }
}

#[component]
fn DoctorCard(doctor: DoctorProfile) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-xl shadow-sm border border-gray-100 flex items-center gap-4">
            <div class="h-12 w-12 rounded-full bg-gray-200 flex items-center justify-center text-xl">"👨‍⚕️"</div>
            <div>
                <p class="font-bold text-gray-800">{doctor.full_name}</p>
                <p class="text-sm text-gray-500">{DOCTOR_SUBTITLE}</p>
            </div>
        </div>
    }
}

/// Capture-only booking form; submits back to the same page
#[component]
fn BookingWidget(
    doctors: Vec<DoctorProfile>,
    color: String,
    action: String,
    today: NaiveDate,
    query: BookingQuery,
    booking: Option<Result<BookingIntent, BookingError>>,
    phone: Option<String>,
) -> impl IntoView {
    let selected = query.doctor.unwrap_or_default();
    let chosen_date = query.date.unwrap_or_default();

    let outcome = booking.map(|result| match result {
        Ok(intent) => {
            let contact = phone
                .map(|p| format!(" Para confirmar, llama a la clínica al {}.", p))
                .unwrap_or_else(|| " Para confirmar, contacta directamente a la clínica.".to_string());
            let message = format!(
                "Recibimos tu interés por una hora con {} el {}. La confirmación en línea aún no está disponible.{}",
                intent.doctor,
                intent.date.format("%d-%m-%Y"),
                contact
            );
            view! { <Alert kind=AlertKind::Info message=message /> }.into_view()
        }
        Err(e) => {
            view! { <Alert kind=AlertKind::Error message=e.user_message().to_string() /> }.into_view()
        }
    });

    view! {
        <div class="bg-white p-6 rounded-lg shadow-lg border border-gray-200">
            <h3 class="text-xl font-bold text-gray-800 mb-4 flex items-center">
                <span class="mr-2" style=format!("color: {}", color)>"📅"</span>
                "Agenda tu Cita Online"
            </h3>
            <form method="get" action=action class="space-y-4">
                <label class="block">
                    <span class="block text-sm font-medium text-gray-700">"Selecciona Profesional"</span>
                    <select name="doctor" class="mt-1 block w-full p-2 border border-gray-300 rounded-md">
                        {doctors
                            .into_iter()
                            .map(|doctor| {
                                let is_selected = doctor.full_name == selected;
                                let label = doctor.full_name.clone();
                                view! {
                                    <option value=doctor.full_name selected=is_selected>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="block">
                    <span class="block text-sm font-medium text-gray-700">"Fecha Preferida"</span>
                    <input
                        type="date"
                        name="date"
                        value=chosen_date
                        min=today.format("%Y-%m-%d").to_string()
                        class="mt-1 block w-full p-2 border border-gray-300 rounded-md"
                    />
                </label>
                <button
                    type="submit"
                    style=format!("background-color: {}", color)
                    class="w-full text-white font-bold py-3 px-4 rounded-lg hover:opacity-90 transition-opacity"
                >
                    "Buscar Horas"
                </button>
            </form>
            <div class="mt-4">{outcome}</div>
        </div>
    }
}
