use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    response::Html,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::modules::attendees::use_cases::register_attendee::inbound::http as register_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Unmatched GETs are served from `web_dir`, falling back to its `index.html`.
pub fn router(state: AppState, web_dir: impl AsRef<Path>) -> Router {
    let web_dir = web_dir.as_ref();
    let static_files = ServeDir::new(web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
    let schema = build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/events/{event_id}/attendees", post(register_http::handle))
        .route("/graphql", get(graphiql).post(graphql))
        .fallback_service(static_files)
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
