use crate::features::auth::{client, state::use_auth};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;

#[component]
pub fn LogoutButton() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let on_click = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            // Clear local state even if the call fails; the guard re-checks
            // against the API on the next navigation anyway.
            let _ = client::logout().await;
            auth.clear_session();
            navigate("/login", Default::default());
        });
    };

    view! {
        <button
            type="button"
            class="mt-4 bg-gradient-to-r from-amber-600 to-orange-600 hover:from-amber-700 hover:to-orange-700 text-white font-semibold py-2 px-6 rounded-lg shadow-md transition-all duration-200"
            on:click=on_click
        >
            "Logout"
        </button>
    }
}
