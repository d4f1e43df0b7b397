//! Shared UI components exported for routes and features.

mod auth_form;
mod logout_button;
pub(crate) mod ui;

pub(crate) use auth_form::{AuthForm, AuthMode};
pub(crate) use logout_button::LogoutButton;
pub(crate) use ui::{Alert, AlertKind, Button, Spinner};
