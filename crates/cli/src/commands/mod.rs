//! CLI commands

pub mod ls;
