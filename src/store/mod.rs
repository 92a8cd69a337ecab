//! In-memory storage layer for tord.
//!
//! The whole deck lives in process memory; nothing touches disk, and a
//! restart brings back the sample deck. Each record type gets its own
//! [`Collection`], an ordered sequence with linear-scan lookups behind a
//! repository-shaped interface:
//!
//! - `insert` / `get` / `list` for plain CRUD
//! - `by_author` for the foreign-key scan relationship resolvers use
//! - `update` with an explicit not-found error instead of a blind mutate
//! - `remove` returning the removed record, or `None` when nothing matched
//!
//! ## Components
//!
//! - [`Store`]: the three collections, shared through the schema context
//! - [`Collection`]: one ordered record collection
//! - [`Record`] / [`Authored`]: traits records implement to be storable

mod memory;
mod seed;

pub use memory::{Authored, Collection, Record, Store};
