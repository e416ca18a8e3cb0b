use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use valuation_engine::api::{AppState, create_router};
use valuation_engine::config::PolicyLoader;
use valuation_engine::engine::ValuationEngine;

const DEFAULT_POLICY_DIR: &str = "./config/ot5";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "valuation_engine=info,valuation_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let policy_dir =
        std::env::var("VALUATION_POLICY_DIR").unwrap_or_else(|_| DEFAULT_POLICY_DIR.to_string());
    let bind_addr =
        std::env::var("VALUATION_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let loader = PolicyLoader::load(&policy_dir)
        .with_context(|| format!("loading valuation policy from {}", policy_dir))?;
    let policy = loader.into_policy();
    tracing::info!(
        version = %policy.metadata().version,
        document = %policy.metadata().document,
        "Loaded valuation policy"
    );

    let app = create_router(AppState::new(ValuationEngine::new(policy)));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;
    tracing::info!("Valuation server listening on {}", bind_addr);
    tracing::info!("  POST /valuate");
    tracing::info!("  POST /valuate/batch");
    tracing::info!("  POST /trips/valuate");
    tracing::info!("  GET  /policy");

    axum::serve(listener, app).await?;
    Ok(())
}
