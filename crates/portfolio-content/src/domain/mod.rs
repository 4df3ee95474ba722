//! Domain layer for the content service.

pub mod catalog;
pub mod commands;
pub mod records;
