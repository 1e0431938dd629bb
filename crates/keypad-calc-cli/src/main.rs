//! Keypad Calculator CLI
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc eval 12+3 Enter          # prints 15
//! keypad-calc eval --json 5 + 2 neg    # state as JSON
//! keypad-calc run                      # interactive session
//! keypad-calc keys                     # key bindings
//! ```

use clap::Parser;
use keypad_calc::core::Calculator;
use keypad_calc::driver::CalculatorDriver;
use keypad_calc_cli::{
    logging, output, script, session, Cli, CliConfig, CliError, CliResult, ColorChoice, Commands,
    EvalArgs, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    logging::init(&config)?;

    match cli.command {
        Commands::Eval(args) => run_eval(config, &args),
        Commands::Run(args) => {
            let config = config.with_show_history(!args.no_history);
            session::run_interactive(&config)
        }
        Commands::Keys => {
            println!("{}", output::render_keys(&config));
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let color: ColorChoice = cli.color.into();

    CliConfig::new().with_verbosity(verbosity).with_color(color)
}

fn run_eval(config: CliConfig, args: &EvalArgs) -> CliResult<()> {
    let config = config
        .with_show_history(args.show_history)
        .with_json(args.json);

    let actions = script::parse_script(&args.keys, args.skip_unknown)?;
    if actions.is_empty() {
        return Err(CliError::invalid_argument("no keys left to press"));
    }
    let mut calc = Calculator::new();
    calc.press_all(&actions)?;

    println!("{}", output::render_eval(&calc, &config)?);
    Ok(())
}
