use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::post,
};

use crate::config::ServerSettings;
use crate::error::Result;

use super::BookshelfSchema;

/// Build the HTTP router: POST executes documents, GET serves GraphiQL
/// when enabled.
pub fn router(schema: BookshelfSchema, settings: &ServerSettings) -> Router {
    let mut route = post(graphql_handler);
    if settings.graphiql {
        let page = GraphiQLSource::build().endpoint(&settings.path).finish();
        route = route.get(move || async move { Html(page) });
    }

    Router::new()
        .route(&settings.path, route)
        .with_state(schema)
}

async fn graphql_handler(
    State(schema): State<BookshelfSchema>,
    req: GraphQLRequest,
) -> impl IntoResponse {
    let request = req.into_inner();
    tracing::debug!(operation = ?request.operation_name, "Executing GraphQL request");

    let response = schema.execute(request).await;

    // Errors without a path come from parsing or validation, before any resolver ran.
    let rejected = response.is_err() && response.errors.iter().all(|e| e.path.is_empty());
    let status = if rejected {
        tracing::debug!(errors = response.errors.len(), "Rejected GraphQL document");
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };

    (status, GraphQLResponse::from(response))
}

/// Bind once and serve until the process exits.
pub async fn run_server(schema: BookshelfSchema, settings: &ServerSettings) -> Result<()> {
    let app = router(schema, settings);
    let listener = tokio::net::TcpListener::bind(settings.address()).await?;

    tracing::info!(
        address = %listener.local_addr()?,
        path = %settings.path,
        graphiql = settings.graphiql,
        "GraphQL server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
