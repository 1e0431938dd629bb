//! Key scripts for `eval`
//!
//! Each argument is either a named key (`Enter`, `Escape`, `Backspace`,
//! `neg`, `percent`, ...) or a run of single-character keys such as `12+3`,
//! which is pressed one character at a time.

use keypad_calc::core::{CalcError, CalcResult};
use keypad_calc::keypad::{Keypad, KeypadAction};

/// Named keys accepted in scripts, with what they do
pub const SCRIPT_ONLY_KEYS: &[(&str, &str)] = &[
    ("neg, +/-", "Toggle sign"),
    ("percent, %", "Percent"),
];

/// Resolves one named key; `None` when the token is not a name
fn named_key(token: &str) -> Option<KeypadAction> {
    match token {
        "neg" | "+/-" => Some(KeypadAction::ToggleSign),
        "percent" | "%" => Some(KeypadAction::Percent),
        "Enter" => Some(KeypadAction::Equals),
        "Escape" => Some(KeypadAction::Clear),
        "Backspace" => Some(KeypadAction::Backspace),
        _ => None,
    }
}

/// Resolves a single-character key
fn char_key(ch: char) -> Option<KeypadAction> {
    if ch == '%' {
        return Some(KeypadAction::Percent);
    }
    let mut buf = [0u8; 4];
    Keypad::key_to_action(ch.encode_utf8(&mut buf))
}

/// Expands script arguments into keypad actions.
///
/// Unknown keys fail with [`CalcError::UnknownKey`], or are skipped with a
/// warning when `skip_unknown` is set.
pub fn parse_script<S: AsRef<str>>(tokens: &[S], skip_unknown: bool) -> CalcResult<Vec<KeypadAction>> {
    let mut actions = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        if let Some(action) = named_key(token) {
            actions.push(action);
            continue;
        }

        for ch in token.chars().filter(|c| !c.is_whitespace()) {
            match char_key(ch) {
                Some(action) => actions.push(action),
                None if skip_unknown => tracing::warn!(key = %ch, "skipping unknown key"),
                None => return Err(CalcError::unknown_key(ch.to_string())),
            }
        }
    }

    tracing::debug!(count = actions.len(), "script parsed");
    Ok(actions)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use keypad_calc::core::Operation;

    #[test]
    fn test_char_run_expands() {
        let actions = parse_script(&["12+3"], false).unwrap();
        assert_eq!(
            actions,
            vec![
                KeypadAction::Digit(1),
                KeypadAction::Digit(2),
                KeypadAction::Operator(Operation::Add),
                KeypadAction::Digit(3),
            ]
        );
    }

    #[test]
    fn test_named_keys() {
        let actions = parse_script(&["Enter", "Escape", "Backspace", "neg", "percent"], false)
            .unwrap();
        assert_eq!(
            actions,
            vec![
                KeypadAction::Equals,
                KeypadAction::Clear,
                KeypadAction::Backspace,
                KeypadAction::ToggleSign,
                KeypadAction::Percent,
            ]
        );
    }

    #[test]
    fn test_sign_and_percent_shorthands() {
        assert_eq!(
            parse_script(&["+/-"], false).unwrap(),
            vec![KeypadAction::ToggleSign]
        );
        assert_eq!(
            parse_script(&["50%"], false).unwrap(),
            vec![
                KeypadAction::Digit(5),
                KeypadAction::Digit(0),
                KeypadAction::Percent
            ]
        );
    }

    #[test]
    fn test_listed_script_names_parse() {
        for (names, _) in SCRIPT_ONLY_KEYS {
            for name in names.split(", ") {
                assert!(named_key(name).is_some(), "{name} should be a named key");
            }
        }
    }

    #[test]
    fn test_unlisted_aliases_rejected() {
        for alias in ["sign", "esc", "Esc", "escape", "enter", "backspace"] {
            assert!(named_key(alias).is_none(), "{alias} should not be a named key");
            assert!(matches!(
                parse_script(&[alias], false),
                Err(CalcError::UnknownKey(_))
            ));
        }
    }

    #[test]
    fn test_every_operator_key() {
        let actions = parse_script(&["+-*/=."], false).unwrap();
        assert_eq!(
            actions,
            vec![
                KeypadAction::Operator(Operation::Add),
                KeypadAction::Operator(Operation::Subtract),
                KeypadAction::Operator(Operation::Multiply),
                KeypadAction::Operator(Operation::Divide),
                KeypadAction::Equals,
                KeypadAction::Decimal,
            ]
        );
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(parse_script(&["1 + 2"], false).unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_key_fails() {
        assert_eq!(
            parse_script(&["1x"], false),
            Err(CalcError::UnknownKey("x".into()))
        );
    }

    #[test]
    fn test_unknown_key_skipped() {
        let actions = parse_script(&["1x2"], true).unwrap();
        assert_eq!(
            actions,
            vec![KeypadAction::Digit(1), KeypadAction::Digit(2)]
        );
    }

    #[test]
    fn test_empty_script() {
        let empty: [&str; 0] = [];
        assert!(parse_script(&empty, false).unwrap().is_empty());
    }
}
