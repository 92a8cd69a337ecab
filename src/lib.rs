//! # Tord - an in-memory GraphQL API for truth-or-dare decks
//!
//! Tord keeps a deck of truth and dare prompts, each written by an author,
//! entirely in process memory, and exposes it through a GraphQL schema.
//! Nothing is persisted: every process start brings back the built-in
//! sample deck (or an empty one with `--empty`).
//!
//! ## Features
//!
//! - **GraphQL API**: query authors, truths and dares, follow the
//!   relationships between them, and mutate the deck
//! - **HTTP server**: `tord serve` exposes the schema with a GraphiQL UI
//! - **One-shot CLI**: `tord query` / `tord mutate` run a document against
//!   an in-process deck and print the JSON response
//! - **SDL export**: `tord sdl` prints the schema
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on the default port
//! tord serve
//!
//! # List the sample deck's authors and their prompts
//! tord query '{ authors { name truths { truth } dares { dare } } }'
//!
//! # Add a dare for the second seed author
//! tord mutate 'addDare(dare: "Swap shirts", authorId: "2") { id dare }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP binding
//! - [`model`]: Data models (Author, Truth, Dare)
//! - [`store`]: In-memory record collections

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles the optional `.tord.yml` configuration file.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `TordError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP binding.
pub mod graphql;

/// Data models for deck records.
pub mod model;

/// In-memory storage layer.
///
/// Ordered collections with linear-scan lookups behind a repository-shaped
/// interface.
pub mod store;

pub mod logging;
