use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{EnvFilter, fmt};

use rocketshoes_cart::shell::{bootstrap, config::CartConfig, graphql, http};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = CartConfig::from_env()?;
    let context = bootstrap(&config).await?;

    let app = http::router(context.clone())
        .merge(graphql::router(graphql::schema(context)))
        .layer(CorsLayer::permissive());

    let addr = config.socket_addr();
    tracing::info!("Cart endpoint: http://{}/cart", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}
