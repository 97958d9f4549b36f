//! Database access for sqlchat
//!
//! Schema introspection and execution of arbitrary SQL against a SQLite
//! file. Every call opens its own connection; nothing is pooled or cached.

mod database;
mod error;
#[cfg(test)]
mod tests;

pub use database::Database;
pub use error::StorageError;
