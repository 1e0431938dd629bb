//! Keypad Calculator CLI Library
//!
//! Command-line front end for the keypad calculator: key-script replay,
//! an interactive raw-mode session, and the key bindings table.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod output;
pub mod script;
pub mod session;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, RunArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
