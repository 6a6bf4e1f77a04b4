//! HTML document shell around server-rendered views.

use leptos::*;

/// Render `view` to HTML and wrap it in a full document
pub fn render_document<F, N>(title: &'static str, body_class: &'static str, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let body = leptos::ssr::render_to_string(view);
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="{body_class}">{body}</body>
</html>"#
    )
}
