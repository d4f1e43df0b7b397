//! Client-side route guarding.
//!
//! The decision itself is a pure function so it can be tested without a DOM;
//! the component translates a `Redirect` into navigation and never renders
//! protected children for it. This is a UX guard only: real access control
//! lives on the API, which refuses to serve session data without a valid
//! cookie.

use crate::components::Spinner;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// What a protected route should do for the current auth state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RouteDecision {
    /// Session still hydrating; show a neutral placeholder.
    Pending,
    Render,
    Redirect(&'static str),
}

/// Decide whether a protected view may render.
pub(crate) fn decide(is_loading: bool, is_authenticated: bool) -> RouteDecision {
    if is_loading {
        RouteDecision::Pending
    } else if is_authenticated {
        RouteDecision::Render
    } else {
        RouteDecision::Redirect("/login")
    }
}

/// Gates children behind a live session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let RouteDecision::Redirect(path) = decide(
            auth.is_loading.get(),
            auth.is_authenticated.get(),
        ) {
            navigate(path, Default::default());
        }
    });

    view! {
        {move || match decide(auth.is_loading.get(), auth.is_authenticated.get()) {
            RouteDecision::Pending => view! {
                <div class="flex justify-center items-center min-h-screen">
                    <Spinner />
                </div>
            }
            .into_any(),
            RouteDecision::Render => children().into_any(),
            RouteDecision::Redirect(_) => view! { <div></div> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hydrating_state_is_pending() {
        assert_eq!(decide(true, false), RouteDecision::Pending);
        // A stale authenticated flag does not short-circuit hydration.
        assert_eq!(decide(true, true), RouteDecision::Pending);
    }

    #[test]
    fn authenticated_state_renders() {
        assert_eq!(decide(false, true), RouteDecision::Render);
    }

    #[test]
    fn anonymous_state_redirects_to_login() {
        assert_eq!(decide(false, false), RouteDecision::Redirect("/login"));
    }
}
