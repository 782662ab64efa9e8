//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers delegate to the corresponding repository in `todoboard_db`, which
//! validates input against the `todoboard_core` rules, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod categories;
pub mod todos;
