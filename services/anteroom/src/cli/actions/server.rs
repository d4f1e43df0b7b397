use crate::api;
use crate::api::handlers::auth::{AuthConfig, OauthConfig};
use crate::cli::actions::Action;
use anyhow::Result;
use secrecy::SecretString;
use tracing::warn;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            frontend_url,
            session_ttl_seconds,
            oauth_client_id,
            oauth_client_secret,
            oauth_redirect_url,
        } => {
            let mut config =
                AuthConfig::new(frontend_url).with_session_ttl_seconds(session_ttl_seconds);

            match (oauth_client_id, oauth_client_secret, oauth_redirect_url) {
                (Some(client_id), Some(client_secret), Some(redirect_url)) => {
                    config = config.with_oauth(OauthConfig::new(
                        client_id,
                        SecretString::from(client_secret),
                        redirect_url,
                    ));
                }
                (None, None, None) => {}
                _ => {
                    warn!(
                        "Partial OAuth configuration ignored; set client id, client secret and redirect URL together"
                    );
                }
            }

            api::new(port, config).await?;
        }
    }

    Ok(())
}
