use std::net::SocketAddr;
use std::sync::Arc;

use roppou_resolver::Resolver;
use tracing_subscriber::EnvFilter;

use roppou_webhook::config::WebhookConfig;
use roppou_webhook::line::ReplyClient;
use roppou_webhook::router;
use roppou_webhook::state::AppState;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match WebhookConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            std::process::exit(1);
        }
    };

    // The resolver owns a blocking HTTP client, which must be created and
    // dropped outside the async runtime.
    let resolver = match Resolver::from_config(&config.resolver) {
        Ok(resolver) => Arc::new(resolver),
        Err(e) => {
            tracing::error!(error = %e, "failed to create resolver");
            std::process::exit(1);
        }
    };
    if resolver.registry().is_empty() {
        tracing::warn!(
            path = %config.resolver.lawlist_path.display(),
            "law registry is empty, every law will be reported as unsupported"
        );
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "failed to start async runtime");
            std::process::exit(1);
        }
    };

    let result = runtime.block_on(serve(config, resolver.clone()));
    drop(runtime);
    drop(resolver);

    if let Err(e) = result {
        tracing::error!(error = %e, "webhook server exited with error");
        std::process::exit(1);
    }
}

async fn serve(
    config: WebhookConfig,
    resolver: Arc<Resolver>,
) -> roppou_webhook::error::Result<()> {
    let reply_client = ReplyClient::new(&config.reply_api_url, &config.channel_access_token)?;
    let app = router(AppState {
        resolver,
        reply_client,
        channel_secret: config.channel_secret.into(),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "webhook listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}
