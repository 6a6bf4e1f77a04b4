//! Server-rendered pages
//!
//! Leptos components rendered to HTML strings per request.

pub mod components;
pub mod dashboard;
pub mod error;
pub mod layout;
pub mod login;
pub mod site;
