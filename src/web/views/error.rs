//! Generic error page.

use leptos::*;

use super::layout::render_document;

pub fn render(status: u16, message: &'static str, request_id: String) -> String {
    render_document("OdontoBuild | Error", "bg-gray-100 font-sans", move || {
        view! {
            <div class="min-h-screen flex items-center justify-center">
                <div class="bg-white p-8 rounded-xl shadow-lg w-96 text-center">
                    <p class="text-5xl font-extrabold text-gray-300 mb-4">{status}</p>
                    <p class="text-gray-700 mb-6">{message}</p>
                    <a href="/" class="text-blue-600 hover:underline text-sm">"Volver al inicio"</a>
                    <p class="text-xs text-gray-400 mt-6">"Referencia: " {request_id}</p>
                </div>
            </div>
        }
    })
}
