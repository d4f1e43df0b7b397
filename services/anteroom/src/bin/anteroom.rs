use anteroom::cli::{actions, actions::Action, start};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse arguments and initialize logging before anything else runs.
    let action = start()?;

    match action {
        Action::Server { .. } => actions::server::handle(action).await?,
    }

    anteroom::cli::telemetry::shutdown_tracer();

    Ok(())
}
