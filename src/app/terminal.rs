#[cfg(test)]
#[path = "terminal_test.rs"]
mod tests;

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        is_raw_mode_enabled,
    },
};

/// Puts the terminal into the mode the UI draws in.
pub fn setup_terminal(out: &mut impl Write) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(
        out,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )
}

/// Undoes [`setup_terminal`] and shows the cursor again.
pub fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        out,
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        cursor::Show
    )
}

/// Panic-hook variant of [`restore_terminal`]: a no-op outside the UI, and
/// errors are dropped since the panic report matters more.
pub fn restore_terminal_after_panic() {
    if matches!(is_raw_mode_enabled(), Ok(true)) {
        let _ = restore_terminal(&mut io::stdout());
    }
}
