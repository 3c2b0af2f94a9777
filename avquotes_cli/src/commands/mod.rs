//! CLI subcommand implementations.

pub mod daily;
pub mod index;
pub mod indices;
