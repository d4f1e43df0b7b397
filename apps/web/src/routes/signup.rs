use crate::components::{AuthForm, AuthMode};
use leptos::prelude::*;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::Signup /> }
}
