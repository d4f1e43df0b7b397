pub mod server;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        frontend_url: String,
        session_ttl_seconds: i64,
        oauth_client_id: Option<String>,
        oauth_client_secret: Option<String>,
        oauth_redirect_url: Option<String>,
    },
}
