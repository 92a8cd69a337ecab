//! Command-line interface for tord.
//!
//! One handler module per subcommand, all sharing a [`CommandContext`]
//! built once in `main`.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::CommandContext;
