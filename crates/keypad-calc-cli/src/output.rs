//! Output formatting

use console::style;
use keypad_calc::core::Calculator;
use keypad_calc::keypad::KEY_BINDINGS;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::script::SCRIPT_ONLY_KEYS;

/// Renders the result of `eval`
pub fn render_eval(calc: &Calculator, config: &CliConfig) -> CliResult<String> {
    if config.json {
        return Ok(calc.snapshot().to_json()?);
    }

    let color = config.color.should_color();
    let mut out = style(calc.display()).bold().force_styling(color).to_string();
    if config.show_history {
        out.push('\n');
        out.push_str(&style(calc.history_line()).dim().force_styling(color).to_string());
    }
    Ok(out)
}

/// Renders the single status line of the interactive session
#[must_use]
pub fn render_line(calc: &Calculator, config: &CliConfig) -> String {
    let color = config.color.should_color();
    let display = style(calc.display()).bold().force_styling(color);
    let history = calc.history_line();
    if !config.show_history || history.is_empty() {
        return format!("{display}");
    }
    format!("{}  {display}", style(history).dim().force_styling(color))
}

/// Renders the key bindings table
#[must_use]
pub fn render_keys(config: &CliConfig) -> String {
    let color = config.color.should_color();
    let width = KEY_BINDINGS
        .iter()
        .chain(SCRIPT_ONLY_KEYS)
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);

    let mut out = style("Keyboard").bold().force_styling(color).to_string();
    for (key, action) in KEY_BINDINGS {
        out.push_str(&format!("\n  {:<width$}  {action}", style(key).cyan().force_styling(color)));
    }
    out.push('\n');
    out.push_str(&style("Scripts only").bold().force_styling(color).to_string());
    for (key, action) in SCRIPT_ONLY_KEYS {
        out.push_str(&format!("\n  {:<width$}  {action}", style(key).cyan().force_styling(color)));
    }
    out.push('\n');
    out.push_str(&style("Interactive: n sign, p percent, q quit").dim().force_styling(color).to_string());
    out
}
