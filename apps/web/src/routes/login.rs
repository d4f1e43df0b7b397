use crate::components::{AuthForm, AuthMode};
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::Login /> }
}
