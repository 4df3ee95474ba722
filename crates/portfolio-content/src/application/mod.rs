//! Application layer: query and command handlers.

pub mod command_handlers;
pub mod query_handlers;
