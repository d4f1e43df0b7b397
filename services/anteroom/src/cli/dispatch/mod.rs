use crate::cli::actions::Action;
use anyhow::Result;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        frontend_url: matches
            .get_one("frontend-url")
            .map(|s: &String| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --frontend-url"))?,
        session_ttl_seconds: matches
            .get_one::<i64>("session-ttl")
            .copied()
            .unwrap_or(43200),
        oauth_client_id: matches.get_one::<String>("oauth-client-id").cloned(),
        oauth_client_secret: matches.get_one::<String>("oauth-client-secret").cloned(),
        oauth_redirect_url: matches.get_one::<String>("oauth-redirect-url").cloned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn handler_builds_server_action_from_defaults() -> Result<()> {
        let matches = commands::new().get_matches_from(vec!["anteroom"]);
        let action = handler(&matches)?;

        let Action::Server {
            port,
            frontend_url,
            session_ttl_seconds,
            oauth_client_id,
            ..
        } = action;
        assert_eq!(port, 8080);
        assert_eq!(frontend_url, "http://localhost:8080");
        assert_eq!(session_ttl_seconds, 43200);
        assert!(oauth_client_id.is_none());
        Ok(())
    }

    #[test]
    fn handler_passes_oauth_arguments_through() -> Result<()> {
        let matches = commands::new().get_matches_from(vec![
            "anteroom",
            "--oauth-client-id",
            "client",
            "--oauth-client-secret",
            "secret",
            "--oauth-redirect-url",
            "https://api.anteroom.dev/api/oauth/google/callback",
        ]);
        let action = handler(&matches)?;

        let Action::Server {
            oauth_client_id,
            oauth_client_secret,
            oauth_redirect_url,
            ..
        } = action;
        assert_eq!(oauth_client_id.as_deref(), Some("client"));
        assert_eq!(oauth_client_secret.as_deref(), Some("secret"));
        assert_eq!(
            oauth_redirect_url.as_deref(),
            Some("https://api.anteroom.dev/api/oauth/google/callback")
        );
        Ok(())
    }
}
