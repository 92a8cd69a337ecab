//! Data models for tord.
//!
//! This module defines the three record types of a deck:
//!
//! - [`Author`]: A person contributing prompts
//! - [`Truth`]: A truth question, owned by an author
//! - [`Dare`]: A dare challenge, owned by an author
//!
//! Truths and dares reference their author by id only; there is no enforced
//! referential integrity, and removing an author leaves its prompts in place.

mod record;

pub use record::{Author, Dare, Truth};
