//! Command handlers for the sfpack CLI.

pub mod list;
pub mod manifest;
