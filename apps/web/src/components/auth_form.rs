//! Mode-parameterized auth form shared by the login and signup pages.
//!
//! Submission is an explicit state machine: `Idle`, `Submitting`, or
//! `Failed(message)`. At most one submission is in flight; all inputs and
//! buttons stay disabled while `Submitting`. A server-provided error is shown
//! verbatim, transport failures collapse into a generic retry message. The
//! provider button leaves the form entirely and navigates the browser through
//! the API's OAuth entry point.

use crate::components::{Alert, AlertKind, Button};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::Credentials;
use crate::features::auth::client;
use leptos::ev::SubmitEvent;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Signup => "Create Account",
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in to your account to continue",
            AuthMode::Signup => "Join us today and get started",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Signup => "Create Account",
        }
    }

    fn pending_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Signing in...",
            AuthMode::Signup => "Creating account...",
        }
    }

    fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account?",
            AuthMode::Signup => "Already have an account?",
        }
    }

    fn switch_href(self) -> &'static str {
        match self {
            AuthMode::Login => "/signup",
            AuthMode::Signup => "/login",
        }
    }

    fn switch_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign up",
            AuthMode::Signup => "Sign in",
        }
    }
}

/// Submission states of the form.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Submitting,
    Failed(String),
}

#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    // A failed provider sign-in comes back as `/login?error=oauth`.
    let state = RwSignal::new(
        if location.search.get_untracked().contains("error=oauth") {
            SubmitState::Failed("Provider sign-in failed. Please try again.".to_string())
        } else {
            SubmitState::Idle
        },
    );

    let submitting = move || state.get() == SubmitState::Submitting;
    let error_message = move || match state.get() {
        SubmitState::Failed(message) => Some(message),
        _ => None,
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        // One outstanding call per form; inputs are disabled too.
        if state.get_untracked() == SubmitState::Submitting {
            return;
        }

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            state.set(SubmitState::Failed(
                "Email and password are required.".to_string(),
            ));
            return;
        }

        state.set(SubmitState::Submitting);
        let navigate = navigate.clone();
        spawn_local(async move {
            let request = Credentials {
                email: email_value,
                password: password_value,
            };
            let result = match mode {
                AuthMode::Login => client::login(&request).await,
                AuthMode::Signup => client::signup(&request).await,
            };

            match result {
                Ok(response) if response.success => {
                    if mode == AuthMode::Login {
                        // Hydrate the context before the dashboard reads it.
                        if let Ok(Some(session)) = client::fetch_session().await {
                            auth.set_session(session);
                        }
                    }
                    navigate("/dashboard", Default::default());
                }
                Ok(response) => {
                    state.set(SubmitState::Failed(
                        response
                            .error
                            .unwrap_or_else(|| "Something went wrong".to_string()),
                    ));
                }
                Err(err) => {
                    state.set(SubmitState::Failed(err.user_message()));
                }
            }
        });
    };

    let on_google = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&client::oauth_authorize_url());
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-amber-50 via-orange-50 to-amber-100 flex items-center justify-center p-4">
            <div class="w-full max-w-md mx-auto rounded-2xl shadow-2xl bg-white/80 backdrop-blur-sm p-8">
                <h1 class="text-center text-3xl font-bold text-amber-800 mb-2">
                    {mode.title()}
                </h1>
                <p class="text-center text-gray-600 text-sm mb-8">{mode.subtitle()}</p>

                <form class="space-y-6" on:submit=on_submit>
                    <div class="space-y-4">
                        <input
                            id="email"
                            type="email"
                            placeholder="Enter your email"
                            autocomplete="email"
                            required
                            class="w-full px-4 py-3 border-2 border-amber-200 focus:border-amber-500 focus:ring-2 focus:ring-amber-200 rounded-lg transition-all duration-200 bg-white/50 text-black"
                            disabled=submitting
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                        <div class="relative">
                            <input
                                id="password"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Enter your password"
                                autocomplete="current-password"
                                required
                                class="w-full px-4 py-3 pr-16 border-2 border-amber-200 focus:border-amber-500 focus:ring-2 focus:ring-amber-200 rounded-lg transition-all duration-200 bg-white/50 text-black"
                                disabled=submitting
                                on:input=move |event| set_password.set(event_target_value(&event))
                            />
                            <button
                                type="button"
                                class="absolute inset-y-0 right-0 pr-3 flex items-center text-sm text-amber-600 hover:text-amber-700 transition-colors"
                                aria-label="Toggle password visibility"
                                on:click=move |_| set_show_password.update(|shown| *shown = !*shown)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    {move || {
                        error_message()
                            .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                    }}

                    <Button button_type="submit" disabled=Signal::derive(submitting)>
                        {move || {
                            if submitting() { mode.pending_label() } else { mode.submit_label() }
                        }}
                    </Button>
                </form>

                <div class="relative my-6">
                    <div class="absolute inset-0 flex items-center">
                        <div class="w-full border-t border-gray-300"></div>
                    </div>
                    <div class="relative flex justify-center text-sm">
                        <span class="px-2 bg-white/80 text-gray-500">"Or continue with"</span>
                    </div>
                </div>

                <button
                    type="button"
                    class="w-full py-3 border-2 border-gray-300 hover:border-amber-300 hover:bg-amber-50 rounded-lg font-medium text-gray-700 transition-colors"
                    class:opacity-70=submitting
                    disabled=submitting
                    on:click=on_google
                >
                    "Google"
                </button>

                <p class="text-center text-sm text-gray-600 mt-6">
                    {mode.switch_prompt()}
                    " "
                    <A
                        href=mode.switch_href()
                        {..}
                        class="font-semibold text-amber-700 hover:text-amber-800 transition-colors underline"
                    >
                        {mode.switch_label()}
                    </A>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_swap_labels_and_targets() {
        assert_eq!(AuthMode::Login.submit_label(), "Sign In");
        assert_eq!(AuthMode::Login.pending_label(), "Signing in...");
        assert_eq!(AuthMode::Login.switch_href(), "/signup");

        assert_eq!(AuthMode::Signup.submit_label(), "Create Account");
        assert_eq!(AuthMode::Signup.pending_label(), "Creating account...");
        assert_eq!(AuthMode::Signup.switch_href(), "/login");
    }

    #[test]
    fn failed_state_carries_the_message() {
        let state = SubmitState::Failed("Invalid credentials".to_string());
        assert_ne!(state, SubmitState::Idle);
        match state {
            SubmitState::Failed(message) => assert_eq!(message, "Invalid credentials"),
            _ => unreachable!(),
        }
    }
}
