//! Domain primitives shared by the todoboard crates.
//!
//! Holds the id/timestamp aliases, the domain error type, and the pure
//! validation rules applied to todo and category input before it reaches
//! the database.

pub mod category;
pub mod error;
pub mod input;
pub mod todo;
pub mod types;
