//! SQLite persistence for pixshelf.
//!
//! Connection pooling, embedded schema migrations, row models, and the
//! concrete query functions that make up the gallery's entity store.

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
