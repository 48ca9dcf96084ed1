//! Command implementations for the `tgc` binary.

pub mod commands;
