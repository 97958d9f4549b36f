//! Conversation loop for sqlchat.
//!
//! [`ChatSession`] is the explicit session context: database handle, LLM
//! client, schema description and conversation history. Every surface
//! (REPL, one-shot CLI, HTTP) drives turns through it.

mod blocking;
mod chat_session;
mod error;


pub use chat_session::ChatSession;
pub use error::ServiceError;
