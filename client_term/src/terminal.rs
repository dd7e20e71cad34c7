use std::io::{self, stdout, Stdout};

use crossterm::{
    cursor, execute,
    style::ResetColor,
    terminal::{self, disable_raw_mode, enable_raw_mode},
};

/// Raw mode plus the alternate screen, restored on drop
pub struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out: stdout() };
        execute!(
            guard.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        Ok(guard)
    }

    pub fn out(&mut self) -> &mut Stdout {
        &mut self.out
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        let _ = disable_raw_mode();
    }
}
