use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("anteroom")
        .about("Session-gated authentication portal")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("ANTEROOM_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("frontend-url")
                .short('f')
                .long("frontend-url")
                .help("Base URL of the web frontend, used for CORS and redirects")
                .default_value("http://localhost:8080")
                .env("ANTEROOM_FRONTEND_URL"),
        )
        .arg(
            Arg::new("session-ttl")
                .long("session-ttl")
                .help("Session lifetime in seconds")
                .default_value("43200")
                .env("ANTEROOM_SESSION_TTL")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("oauth-client-id")
                .long("oauth-client-id")
                .help("OAuth client id issued by the identity provider")
                .env("ANTEROOM_OAUTH_CLIENT_ID"),
        )
        .arg(
            Arg::new("oauth-client-secret")
                .long("oauth-client-secret")
                .help("OAuth client secret issued by the identity provider")
                .env("ANTEROOM_OAUTH_CLIENT_SECRET"),
        )
        .arg(
            Arg::new("oauth-redirect-url")
                .long("oauth-redirect-url")
                .help("Callback URL registered with the identity provider")
                .env("ANTEROOM_OAUTH_REDIRECT_URL"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("ANTEROOM_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "anteroom");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Session-gated authentication portal"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_check_port_and_frontend() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "anteroom",
            "--port",
            "9000",
            "--frontend-url",
            "https://app.anteroom.dev",
        ]);

        assert_eq!(matches.get_one::<u16>("port").copied(), Some(9000));
        assert_eq!(
            matches.get_one::<String>("frontend-url").map(String::as_str),
            Some("https://app.anteroom.dev")
        );
        assert_eq!(matches.get_one::<i64>("session-ttl").copied(), Some(43200));
    }

    #[test]
    fn test_port_from_env() {
        temp_env::with_var("ANTEROOM_PORT", Some("9090"), || {
            let matches = new().get_matches_from(vec!["anteroom"]);
            assert_eq!(matches.get_one::<u16>("port").copied(), Some(9090));
        });
    }

    #[test]
    fn test_oauth_args_are_optional() {
        let matches = new().get_matches_from(vec!["anteroom"]);
        assert!(matches.get_one::<String>("oauth-client-id").is_none());
        assert!(matches.get_one::<String>("oauth-client-secret").is_none());
        assert!(matches.get_one::<String>("oauth-redirect-url").is_none());
    }

    #[test]
    fn test_validator_log_level() {
        let validator = validator_log_level();
        let command = Command::new("test").arg(
            Arg::new("level")
                .long("level")
                .value_parser(validator.clone()),
        );

        let matches = command
            .clone()
            .get_matches_from(vec!["test", "--level", "info"]);
        assert_eq!(matches.get_one::<u8>("level").copied(), Some(2));

        let matches = command
            .clone()
            .get_matches_from(vec!["test", "--level", "3"]);
        assert_eq!(matches.get_one::<u8>("level").copied(), Some(3));

        let result = command.try_get_matches_from(vec!["test", "--level", "nope"]);
        assert!(result.is_err());
    }
}
