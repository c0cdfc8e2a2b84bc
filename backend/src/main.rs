//! Backend entry-point: configuration, logging, and the HTTP listener.

mod server;

use color_eyre::eyre::WrapErr;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::DirectorySettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DirectorySettings::load().wrap_err("failed to load configuration")?;
    let repository = server::build_repository(&settings).wrap_err("failed to open store")?;

    info!(
        host = settings.host(),
        port = settings.port(),
        storage = ?settings.storage(),
        "starting employee directory"
    );

    server::run(&settings, repository)
        .wrap_err("failed to bind listener")?
        .await
        .wrap_err("server terminated abnormally")
}
