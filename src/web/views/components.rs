//! Shared view components.

use leptos::*;

/// Visual weight of an [`Alert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Blocking failure the user must act on
    Error,
    /// Non-blocking problem; the page still works
    Warning,
    Info,
}

impl AlertKind {
    fn classes(self) -> &'static str {
        match self {
            AlertKind::Error => "bg-red-50 border-l-4 border-red-500 text-red-800 p-3 rounded text-sm",
            AlertKind::Warning => {
                "bg-amber-50 border-l-4 border-amber-500 text-amber-800 p-3 rounded text-sm"
            }
            AlertKind::Info => "bg-blue-50 border-l-4 border-blue-500 text-blue-800 p-3 rounded text-sm",
        }
    }
}

/// Inline message box
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let role = if kind == AlertKind::Error { "alert" } else { "status" };
    view! {
        <div class=kind.classes() role=role>
            {message}
        </div>
    }
}

/// Centered full-page message
#[component]
pub fn CenteredMessage(message: String, #[prop(default = false)] error: bool) -> impl IntoView {
    let class = if error {
        "min-h-screen flex items-center justify-center text-red-500 font-bold"
    } else {
        "min-h-screen flex items-center justify-center text-gray-500"
    };
    view! { <div class=class>{message}</div> }
}
