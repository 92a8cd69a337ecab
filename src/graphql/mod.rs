//! GraphQL schema and resolvers for tord.
//!
//! Provides the query/mutation surface over the in-memory deck, plus the
//! HTTP binding used by `tord serve`.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server with GraphiQL
//! tord serve --port 4000
//!
//! # Execute a query from CLI
//! tord query '{ authors { name truths { truth } } }'
//!
//! # Execute a mutation from CLI
//! tord mutate 'addDare(dare: "Swap shirts", authorId: "2") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `author`, `truth`, `dare`, `authors`, `truths`, `dares`
//! - **Mutations**: `addAuthor`, `addTruth`, `addDare`, `updateAuthor`,
//!   `updateTruth`, `updateDare`, `removeAuthor`, `removeTruth`, `removeDare`

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, TordSchema, build_schema};
pub use server::run_server;
pub use types::*;
