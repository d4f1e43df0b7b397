use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen bg-gradient-to-br from-amber-50 to-orange-100">
            <h1 class="text-3xl font-bold text-amber-700">"Page not found"</h1>
            <p class="text-gray-600 mt-2">"The page you are looking for does not exist."</p>
            <A
                href="/"
                {..}
                class="mt-6 font-semibold text-amber-700 hover:text-amber-800 underline"
            >
                "Back to the app"
            </A>
        </div>
    }
}
