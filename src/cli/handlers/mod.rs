mod mutate;
mod query;
mod sdl;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use sdl::handle_sdl;
pub use serve::handle_serve;

use std::sync::Arc;

use crate::config::TordConfig;
use crate::graphql::build_schema;
use crate::store::Store;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: TordConfig,
    pub store: Arc<Store>,
}

impl CommandContext {
    pub fn new(config: TordConfig, empty: bool) -> Self {
        let store = if empty { Store::new() } else { Store::seeded() };
        Self {
            config,
            store: Arc::new(store),
        }
    }
}

/// Run one GraphQL document against the context's deck and print the JSON
/// response. Shared by `query` and `mutate`.
fn execute_document(
    ctx: CommandContext,
    document: &str,
    variables: Option<String>,
) -> anyhow::Result<()> {
    let schema = build_schema(ctx.store);

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
