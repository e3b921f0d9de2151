use crate::graphql::build_schema;
use crate::storage::Library;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Execute a document in-process and print the response envelope as JSON.
/// Fails when the response carries errors, after printing it.
pub fn execute_and_print(
    library: Arc<Library>,
    document: &str,
    variables: Option<String>,
) -> Result<()> {
    let schema = build_schema(library);

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Failed to parse --variables as JSON")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_err() {
        anyhow::bail!("GraphQL request returned {} error(s)", response.errors.len());
    }
    Ok(())
}
