//! Core domain types and errors for the `opsgraph` workspace.
//!
//! This crate establishes the foundational building blocks shared by the
//! resolver and analysis crates:
//!
//! - **`errors`**: the primary `Error` enum and `Result` type alias,
//!   centralizing all failure modes so callers can branch on outcome
//!   (configuration mistakes vs. detected cycles) without relying on
//!   panics or stringly-typed errors.
//! - **`types`**: shared value types such as [`Edge`], the directed
//!   (provider, dependant) pair every dependency graph is built from.

pub mod errors;
pub mod types;

pub use self::{
    errors::{Error, Result},
    types::Edge,
};
