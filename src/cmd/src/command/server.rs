use std::sync::Arc;

use axum::Router;
use common::config::Config;
use common::messages::Messages;
use common::ENDPOINT_PATH;
use platform::http::attach_routes;
use platform::Definitions;
use storage::JsonFile;
use tokio::net::TcpListener;
use tokio::select;
use tokio::signal::unix::signal;
use tokio::signal::unix::SignalKind;
use tracing::debug;
use tracing::info;

use crate::error::Result;

pub fn init_platform(cfg: &Config) -> Result<(Arc<Definitions>, Router)> {
    debug!(
        "messages path: {:?}, locale: {}",
        cfg.messages.path, cfg.messages.locale
    );
    let messages = Arc::new(Messages::load(&cfg.messages.path, &cfg.messages.locale)?);

    debug!("data path: {:?}", cfg.data.path);
    let store = Arc::new(JsonFile::new(cfg.data.path.clone()));
    let definitions = Arc::new(Definitions::try_new(
        store,
        messages,
        cfg.dictionary.timezone,
    )?);

    let router = attach_routes(Router::new(), &definitions, cfg);

    Ok((definitions, router))
}

pub async fn start(cfg: Config) -> Result<()> {
    info!("initializing platform...");
    let (definitions, router) = init_platform(&cfg)?;
    info!(
        "loaded {} words from {:?}",
        definitions.len().await,
        cfg.data.path
    );

    let mut sig_int = signal(SignalKind::interrupt())?;
    let mut sig_term = signal(SignalKind::terminate())?;
    let signal = async move {
        select! {
            _=sig_int.recv()=>info!("SIGINT received"),
            _=sig_term.recv()=>info!("SIGTERM received"),
        }
    };

    info!("Endpoint: http://{}{}", cfg.server.host, ENDPOINT_PATH);
    if let Some(prefix) = &cfg.server.path_prefix {
        info!("Endpoint: http://{}{}{}", cfg.server.host, prefix, ENDPOINT_PATH);
    }

    Ok(axum::serve(TcpListener::bind(&cfg.server.host).await?, router)
        .with_graceful_shutdown(signal)
        .await?)
}
