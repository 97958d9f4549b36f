//! Core types and configuration for sqlchat
//!
//! This crate contains the domain types shared across all other crates:
//! conversation turns, query results, the schema description and settings.

pub mod config;
pub mod constants;
mod conversation;
pub mod env_config;
mod error;
mod query;
mod text_utils;

pub use config::{ExecutionPolicy, Settings};
pub use conversation::*;
pub use error::*;
pub use query::*;
pub use text_utils::*;
