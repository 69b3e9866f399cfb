//! Centralized warning and prompt messages for CLI output.
//!
//! Everything here writes to stderr so stdout carries only generated
//! passwords and reports.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use zeroize::Zeroize;

use crate::terminal::{EchoGuard, RED, RESET, YELLOW};

/// Suppresses warnings, confirmations and prompts.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// No prompting when quiet or when stdin is piped.
fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

/// Yellow warning, suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error, always shown
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        eprintln!("*** -COPIED {count} TO CLIPBOARD- ***");
    }
}

/// Returns true to fall back to stdout, false to abort.
/// Quiet or non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt(reason: &str) -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable ({reason}). Print to terminal instead? [Y/n]: ");
    let _ = io::stderr().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    input.is_empty() || input == "y" || input == "yes"
}

pub fn passwords_written(count: usize, path: &str) {
    if !quiet() {
        eprintln!("{count} password(s) \u{2192} {path}");
    }
}

/// Password from stdin: one line, trailing newline removed. Echo is off
/// while typing at a terminal.
pub fn read_secret(prompt: &str) -> io::Result<String> {
    let interactive = is_interactive();
    if interactive {
        eprint!("{prompt}");
        let _ = io::stderr().flush();
    }

    let mut line = String::new();
    {
        let _echo = interactive.then(EchoGuard::new);
        io::stdin().lock().read_line(&mut line)?;
    }

    let secret = line.trim_end_matches(['\r', '\n']).to_string();
    line.zeroize();
    Ok(secret)
}
