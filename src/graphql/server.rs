use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;

use crate::error::Result;

use super::TordSchema;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// Serve the schema over HTTP: GraphiQL on GET /, GraphQL execution on POST /.
///
/// Runs until the process is terminated.
pub async fn run_server(schema: TordSchema, host: &str, port: u16) -> Result<()> {
    let app = Router::new().route("/", get(graphiql).post_service(GraphQL::new(schema)));

    let listener = TcpListener::bind((host, port)).await?;
    tracing::info!("Listening on http://{host}:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
