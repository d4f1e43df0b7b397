//! Alert banners for error and informational messages. Messages must be safe
//! to render and should never include secrets or tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "p-3 bg-red-50 border border-red-200 rounded-lg text-sm text-red-600 text-center font-medium"
        }
        AlertKind::Info => {
            "p-3 bg-amber-50 border border-amber-200 rounded-lg text-sm text-amber-700 text-center font-medium"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
