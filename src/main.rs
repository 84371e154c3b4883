//! PizzaStore server: resolves settings, opens the store, mounts the routes
//! and the generated API docs.

use axum::Router;
use pizza_store::{
    common_routes, docs_routes, pizza_routes, store, AppState, Settings, SqlitePizzaStore,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pizza_store=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = store::connect(&settings.database_url).await?;
    store::ensure_schema(&pool).await?;
    let state = AppState::new(Arc::new(SqlitePizzaStore::new(pool)));

    let app = Router::new()
        .merge(pizza_routes(state.clone()))
        .merge(common_routes(state))
        .merge(docs_routes())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(settings.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
