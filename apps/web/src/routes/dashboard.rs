//! Session-gated landing page. All content comes from the hydrated session;
//! anonymous visitors never get past the guard.

use crate::components::LogoutButton;
use crate::features::auth::guards::RequireAuth;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardContent />
        </RequireAuth>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = use_auth();
    let name = move || {
        auth.session
            .get()
            .map(|session| session.name)
            .unwrap_or_default()
    };
    let email = move || {
        auth.session
            .get()
            .map(|session| session.email)
            .unwrap_or_default()
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen bg-gradient-to-br from-amber-50 to-orange-100">
            <h1 class="text-3xl font-bold text-amber-700">"Welcome, " {name}</h1>
            <p class="text-gray-600 mt-2">{email}</p>
            <div class="mt-6">
                <LogoutButton />
            </div>
        </div>
    }
}
