//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// Keypad calculator: replay key presses or run an interactive session
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress log output below errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay key presses and print the display
    Eval(EvalArgs),

    /// Run an interactive calculator in the terminal
    Run(RunArgs),

    /// Show the keyboard bindings
    Keys,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Keys to press, e.g. `12+3 Enter`; named keys: Enter, Escape,
    /// Backspace, neg, percent
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub keys: Vec<String>,

    /// Also print the history line
    #[arg(long)]
    pub show_history: bool,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Ignore keys that have no binding instead of failing
    #[arg(long)]
    pub skip_unknown: bool,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Hide the history line
    #[arg(long)]
    pub no_history: bool,
}

/// Color argument for CLI
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
