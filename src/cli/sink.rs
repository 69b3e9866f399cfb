//! Delivering generated passwords: stdout, a file, or the clipboard.
//!
//! Every intermediate buffer holding password text is zeroized once it
//! has been written.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use passlab::GeneratedPassword;

use super::{CliError, CliResult, OutputArgs, prompts};

pub enum Sink {
    Stdout,
    File(String),
    Clipboard(ClipboardContext),
}

impl Sink {
    /// Pick the destination from flags, falling back to saved settings.
    /// Clipboard failures ask whether to print instead.
    pub fn open(args: &OutputArgs, saved_path: &str, saved_clipboard: bool) -> CliResult<Self> {
        if args.clipboard || (args.output.is_none() && saved_clipboard) {
            return match ClipboardContext::new() {
                Ok(ctx) => Ok(Sink::Clipboard(ctx)),
                Err(e) if prompts::clipboard_fallback_prompt(&e.to_string()) => Ok(Sink::Stdout),
                Err(_) => Err(CliError::Aborted),
            };
        }

        match args.output.as_deref() {
            Some(path) => Ok(Sink::File(normalize_output_path(path))),
            None if !saved_path.is_empty() => Ok(Sink::File(saved_path.to_string())),
            None => Ok(Sink::Stdout),
        }
    }

    /// Write one password per line.
    pub fn emit(&mut self, passwords: &[GeneratedPassword]) -> CliResult {
        match self {
            Sink::Stdout => {
                let stdout = io::stdout();
                write_lines(&mut stdout.lock(), passwords)?;
            }
            Sink::File(path) => {
                let mut file = open_append(path)?;
                write_lines(&mut file, passwords)?;
                let full_path = fs::canonicalize(&*path)
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| path.clone());
                prompts::passwords_written(passwords.len(), &full_path);
            }
            Sink::Clipboard(ctx) => {
                let mut joined = passwords
                    .iter()
                    .map(GeneratedPassword::as_str)
                    .collect::<Vec<_>>()
                    .join("\n");
                let result = ctx.set_contents(joined.clone());
                joined.zeroize();
                match result {
                    Ok(()) => {
                        // Some providers hand back a copy; scrub it.
                        if let Ok(mut retrieved) = ctx.get_contents() {
                            retrieved.zeroize();
                        }
                        prompts::clipboard_copied(passwords.len());
                    }
                    Err(e) => return Err(CliError::Usage(format!("clipboard error: {e}"))),
                }
            }
        }
        Ok(())
    }
}

fn write_lines<W: Write>(out: &mut W, passwords: &[GeneratedPassword]) -> io::Result<()> {
    let mut buf = Vec::new();
    for password in passwords {
        buf.extend_from_slice(password.as_str().as_bytes());
        buf.push(b'\n');
        let result = out.write_all(&buf);
        buf.zeroize();
        result?;
    }
    out.flush()
}

fn open_append(path: &str) -> io::Result<fs::File> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Directory targets get a default file name; bare names get `.txt`.
pub fn normalize_output_path(path: &str) -> String {
    if path == "." {
        "passlab.txt".to_string()
    } else if path.ends_with('/') {
        format!("{path}passlab.txt")
    } else if !path.ends_with(".txt") {
        format!("{path}.txt")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passlab::{GenerationConfig, SecureRandom};

    #[test]
    fn output_paths() {
        assert_eq!(normalize_output_path("."), "passlab.txt");
        assert_eq!(normalize_output_path("out/"), "out/passlab.txt");
        assert_eq!(normalize_output_path("keys"), "keys.txt");
        assert_eq!(normalize_output_path("keys.txt"), "keys.txt");
    }

    #[test]
    fn file_sink_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep").join("pw.txt");
        let path = path.to_str().unwrap().to_string();

        let config = GenerationConfig::default().length(12);
        let batch = passlab::pass::generate_batch(&config, 3, &mut SecureRandom::new()).unwrap();

        let mut sink = Sink::File(path.clone());
        sink.emit(&batch).unwrap();
        sink.emit(&batch[..1]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], batch[0].as_str());
        assert_eq!(lines[3], batch[0].as_str());
    }
}
