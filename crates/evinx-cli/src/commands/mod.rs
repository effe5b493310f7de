//! Subcommands of the `evinx` binary.

pub mod columns;
pub mod config;
pub mod extract;
pub mod keywords;
mod output;
