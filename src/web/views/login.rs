//! Login page.

use leptos::*;

use super::components::{Alert, AlertKind};
use super::layout::render_document;

/// Values and messages shown on the login form
#[derive(Debug, Clone, Default)]
pub struct LoginView {
    pub username: String,
    pub password: String,
    /// Blocking failure of the last submit
    pub alert: Option<String>,
    /// Informational notice, e.g. an expired session
    pub notice: Option<String>,
}

pub fn render(login: LoginView) -> String {
    render_document("OdontoBuild | Acceso", "bg-gray-100 font-sans", move || {
        view! { <LoginPage login=login /> }
    })
}

#[component]
fn LoginPage(login: LoginView) -> impl IntoView {
    let LoginView {
        username,
        password,
        alert,
        notice,
    } = login;

    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="bg-white p-8 rounded-xl shadow-lg w-96 border-t-4 border-blue-600">
                <div class="flex justify-center mb-6">
                    <span class="text-4xl">"🦷"</span>
                </div>
                <h1 class="text-2xl font-bold text-center text-gray-800 mb-2">"OdontoBuild"</h1>
                <p class="text-center text-gray-500 mb-6 text-sm">"Sistema Operativo Dental Seguro"</p>

                <div class="space-y-3 mb-4">
                    {notice.map(|message| view! { <Alert kind=AlertKind::Info message=message /> })}
                    {alert.map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}
                </div>

                <form method="post" action="/" class="space-y-4">
                    <label class="block">
                        <span class="block text-sm font-medium text-gray-700">"Email Corporativo"</span>
                        <input
                            type="email"
                            name="username"
                            value=username
                            placeholder="admin@dental.cl"
                            required=true
                            class="mt-1 block w-full border border-gray-300 rounded-md p-2"
                        />
                    </label>
                    <label class="block">
                        <span class="block text-sm font-medium text-gray-700">"Contraseña"</span>
                        <input
                            type="password"
                            name="password"
                            value=password
                            required=true
                            class="mt-1 block w-full border border-gray-300 rounded-md p-2"
                        />
                    </label>
                    <button
                        type="submit"
                        class="w-full bg-blue-600 text-white py-2 rounded-md hover:bg-blue-700 transition"
                    >
                        "Ingresar al Sistema"
                    </button>
                </form>

                <div class="mt-4 text-center text-xs text-gray-400 border-t pt-4">
                    "Protegido por Ley 21.663"
                </div>
            </div>
        </div>
    }
}
