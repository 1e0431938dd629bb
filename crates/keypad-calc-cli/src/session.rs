//! Interactive terminal session
//!
//! [`TerminalSession`] owns raw mode and the hidden cursor: both are set on
//! creation and restored on drop, on every exit path including panics. The
//! panic hook is installed once but only acts while a session is live.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, queue, style::Print, terminal};
use keypad_calc::core::Calculator;
use keypad_calc::keypad::{Keypad, KeypadAction};

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output;

/// What a key press means in the interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    /// Press a keypad button
    Press(KeypadAction),
    /// Leave the session
    Quit,
    /// No binding
    Ignored,
}

/// Maps terminal key events to session input
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event; `n` toggles sign, `p` is percent, `q` quits
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> SessionInput {
        if event.kind == KeyEventKind::Release {
            return SessionInput::Ignored;
        }

        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'd') => SessionInput::Quit,
                _ => SessionInput::Ignored,
            };
        }

        let action = match event.code {
            KeyCode::Char('q') => return SessionInput::Quit,
            KeyCode::Char('n') => Some(KeypadAction::ToggleSign),
            KeyCode::Char('p' | '%') => Some(KeypadAction::Percent),
            KeyCode::Char(c) => {
                let mut buf = [0u8; 4];
                Keypad::key_to_action(c.encode_utf8(&mut buf))
            }
            KeyCode::Enter => Keypad::key_to_action("Enter"),
            KeyCode::Backspace => Keypad::key_to_action("Backspace"),
            KeyCode::Esc => Keypad::key_to_action("Escape"),
            _ => None,
        };

        action.map_or(SessionInput::Ignored, SessionInput::Press)
    }
}

/// Raw-mode guard; restores the terminal when dropped
#[derive(Debug)]
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    /// Enters raw mode and hides the cursor
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        terminal::enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);
        let session = Self { active: true };
        execute!(io::stdout(), cursor::Hide)?;
        tracing::info!("terminal raw mode enabled");
        Ok(session)
    }

    /// Blocks until the next key event
    pub fn read_key(&self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                return Ok(key);
            }
        }
    }

    /// Redraws the current line with the calculator state
    pub fn draw(&self, calc: &Calculator, config: &CliConfig) -> io::Result<()> {
        let mut stdout = io::stdout();
        queue!(
            stdout,
            cursor::MoveToColumn(0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            Print(output::render_line(calc, config)),
        )?;
        stdout.flush()
    }

    fn cleanup(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = execute!(io::stdout(), Print("\r\n"));
        restore_terminal();
        tracing::info!("terminal raw mode disabled");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Set while a [`TerminalSession`] holds raw mode
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Shows the cursor and leaves raw mode if a session still holds it.
///
/// Returns whether anything was restored; later calls are no-ops.
fn restore_terminal() -> bool {
    if !RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
        return false;
    }
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::Show);
    let _ = terminal::disable_raw_mode();
    let _ = stdout.flush();
    true
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}

/// Runs the interactive calculator until the user quits
pub fn run_interactive(config: &CliConfig) -> CliResult<()> {
    let session = TerminalSession::enter()?;
    let handler = InputHandler::new();
    let mut calc = Calculator::new();

    session.draw(&calc, config)?;
    loop {
        match handler.handle_key(session.read_key()?) {
            SessionInput::Quit => break,
            SessionInput::Press(action) => {
                calc.apply(action)?;
                session.draw(&calc, config)?;
            }
            SessionInput::Ignored => {}
        }
    }

    tracing::debug!(display = calc.display(), "session ended");
    Ok(())
}
