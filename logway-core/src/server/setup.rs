use crate::api::build_router;
use crate::backend::{HttpProbe, LokiClient};
use crate::conf::ValidatedConfig;
use crate::server::shutdown::shutdown_signal;
use crate::service::{LogService, Probes, QuerySettings};
use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Wire the configured backend into a [`LogService`].
pub fn build_service(validated: &ValidatedConfig) -> Result<LogService> {
    let backend = &validated.config.backend;

    let client = reqwest::Client::builder()
        .build()
        .context("failed to build HTTP client")?;

    let store = LokiClient::new(
        client.clone(),
        &backend.loki_url,
        backend.request_timeout(),
    );
    let probes = Probes {
        loki: Arc::new(HttpProbe::loki(
            client.clone(),
            &backend.loki_url,
            backend.probe_timeout(),
        )),
        grafana: Arc::new(HttpProbe::grafana(
            client,
            &backend.grafana_url,
            backend.probe_timeout(),
        )),
    };

    Ok(LogService::new(
        Arc::new(validated.registry.clone()),
        Arc::new(store),
        probes,
        QuerySettings::from_config(&validated.config),
    ))
}

/// Run the API server until Ctrl-C or SIGTERM.
pub fn run(validated: ValidatedConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;

    runtime.block_on(async move {
        let service = build_service(&validated)?;
        let listen = &validated.config.server.listen;

        let listener = TcpListener::bind(listen)
            .await
            .with_context(|| format!("failed to bind {listen}"))?;

        tracing::info!(
            listen = %listen,
            loki_url = %validated.config.backend.loki_url,
            stacks = validated.registry.stacks().len(),
            services = validated.registry.service_count(),
            "logway listening"
        );

        serve(listener, service, shutdown_signal()).await
    })
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, service: LogService, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(service))
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    tracing::info!("logway stopped");
    Ok(())
}
