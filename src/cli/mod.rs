//! CLI module
//!
//! Command-line interface over the pagination model.
//!
//! # Commands
//!
//! - `info` - Page count, item boundaries and neighbours of a page
//! - `pages` - Navigation sequence with gaps
//! - `envelope` - Response envelope and links for a request URL
//! - `config` - Effective configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PageArgs, WindowArgs};
pub use runner::Runner;
