use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use clinic_tracking::modules::clinic_tracking::adapters::outbound::booking_store_in_memory::InMemoryBookingStore;
use clinic_tracking::modules::clinic_tracking::adapters::outbound::directory_in_memory::InMemoryParticipantDirectory;
use clinic_tracking::shared::core::clock::SystemClock;
use clinic_tracking::shared::infrastructure::notification_outbox::in_memory::InMemoryNotificationOutbox;
use clinic_tracking::shell::config::AppConfig;
use clinic_tracking::shell::graphql::{AppSchema, AppState, build_schema};
use clinic_tracking::shell::http::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let store = Arc::new(InMemoryBookingStore::new());
    let outbox = Arc::new(InMemoryNotificationOutbox::new());
    let directory = Arc::new(InMemoryParticipantDirectory::new());

    let state = AppState::new(
        &config.outbox_topic,
        config.utc_offset,
        Arc::new(SystemClock),
        store,
        outbox,
        directory,
    );

    let schema = build_schema(state.clone());

    let app = Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .merge(router(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!(
        utc_offset = %config.utc_offset,
        topic = %config.outbox_topic,
        "GraphQL endpoint: http://{}/gql",
        config.bind_addr
    );
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
