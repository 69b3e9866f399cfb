//! RAII guards for terminal modes.

use std::io::{self, Write};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Raw mode with a hidden cursor; both restored on drop.
pub struct RawModeGuard {
    was_enabled: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        print!("\x1b[?25l");
        let _ = io::stdout().flush();
        Ok(Self { was_enabled: true })
    }

    /// Manually restore the terminal (also happens on drop).
    pub fn disable(&mut self) {
        if self.was_enabled {
            let _ = disable_raw_mode();
            print!("\x1b[?25h");
            let _ = io::stdout().flush();
            self.was_enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}

/// Turns off stdin echo for secret entry; restores the previous termios
/// on drop. A no-op when stdin is not a terminal.
pub struct EchoGuard {
    saved: Option<libc::termios>,
}

impl EchoGuard {
    pub fn new() -> Self {
        unsafe {
            let mut termios: libc::termios = std::mem::zeroed();
            if libc::isatty(0) != 1 || libc::tcgetattr(0, &mut termios) != 0 {
                return Self { saved: None };
            }
            let saved = termios;
            termios.c_lflag &= !libc::ECHO;
            termios.c_lflag |= libc::ECHONL;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
            Self { saved: Some(saved) }
        }
    }
}

impl Drop for EchoGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.as_ref() {
            unsafe {
                libc::tcsetattr(0, libc::TCSANOW, saved);
            }
        }
    }
}
