mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod recipe;
mod routes;
mod state;
mod store;

use api_doc::ApiDoc;
use axum::{
    Router,
    routing::{get, patch, post},
};
use config::Config;
use state::AppState;
use std::sync::Arc;
use store::MongoStore;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("recipe-book-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = MongoStore::connect(&config).await?;
    let state = AppState {
        store: Arc::new(store),
    };

    let app = Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(
            routes::RECIPES,
            post(handlers::create_handler).get(handlers::list_handler),
        )
        .route(
            routes::RECIPE_ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .route(routes::RECIPE_LIKE, patch(handlers::like_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
