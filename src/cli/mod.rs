//! Command line front end.

mod check;
mod config;
mod generate;
mod prompts;
mod simulate;
mod sink;

use std::io;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use passlab::{AttackKind, GenerationConfig, Settings, WordLanguage};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Lib(#[from] passlab::Error),
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Usage(String),
    #[error("aborted")]
    Aborted,
}

pub type CliResult<T = ()> = Result<T, CliError>;

#[derive(Debug, Parser)]
#[command(name = "passlab", version, about = "Generate passwords, rate them, and estimate what it costs to crack them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate character passwords
    Generate(generate::GenerateArgs),
    /// Generate word passphrases
    Words(generate::WordsArgs),
    /// Report the strength of a password
    Check(check::CheckArgs),
    /// Simulate an attack against a password or keyspace
    Simulate(simulate::SimulateArgs),
    /// List the built-in attacker hardware profiles
    Hardware,
    /// Show, save or reset saved defaults
    Config {
        #[command(subcommand)]
        action: config::ConfigAction,
    },
}

/// Character class flags shared by `generate` and `config save`.
#[derive(Debug, Clone, Default, Args)]
pub struct CharsetArgs {
    /// Password length
    #[arg(short, long)]
    pub length: Option<usize>,
    /// Leave out a-z
    #[arg(long)]
    pub no_lower: bool,
    /// Leave out A-Z
    #[arg(long)]
    pub no_upper: bool,
    /// Leave out 0-9
    #[arg(long)]
    pub no_numbers: bool,
    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,
    /// Leave out 0 O o 1 l I |
    #[arg(long)]
    pub exclude_ambiguous: bool,
}

impl CharsetArgs {
    pub fn apply(&self, config: &mut GenerationConfig) {
        if let Some(length) = self.length {
            config.length = length;
        }
        if self.no_lower {
            config.include_lowercase = false;
        }
        if self.no_upper {
            config.include_uppercase = false;
        }
        if self.no_numbers {
            config.include_numbers = false;
        }
        if self.no_symbols {
            config.include_symbols = false;
        }
        if self.exclude_ambiguous {
            config.exclude_ambiguous = true;
        }
    }
}

/// Passphrase flags shared by `words` and `config save`.
#[derive(Debug, Clone, Default, Args)]
pub struct WordArgs {
    /// Number of words
    #[arg(short = 'w', long = "words")]
    pub count: Option<usize>,
    /// Text between words
    #[arg(long)]
    pub separator: Option<String>,
    /// Word list: en or es
    #[arg(long)]
    pub lang: Option<WordLanguage>,
}

impl WordArgs {
    pub fn apply(&self, config: &mut GenerationConfig) {
        if let Some(count) = self.count {
            config.word_count = count;
        }
        if let Some(ref separator) = self.separator {
            config.word_separator = separator.clone();
        }
        if let Some(lang) = self.lang {
            config.word_language = lang;
        }
    }
}

/// Where and how many.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// How many to generate
    #[arg(short, long)]
    pub number: Option<usize>,
    /// Append to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
    /// Copy to the clipboard instead of stdout
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,
    /// Start from saved defaults (`passlab config save`)
    #[arg(short, long)]
    pub saved: bool,
    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,
}

/// Simulation defaults accepted by `config save`.
#[derive(Debug, Clone, Default, Args)]
pub struct SimDefaultArgs {
    /// Default attack method
    #[arg(long)]
    pub method: Option<AttackKind>,
    /// Default hardware profile id
    #[arg(long)]
    pub hardware: Option<String>,
}

/// Saved settings, or defaults with a warning when the store is unreadable.
fn load_settings() -> Settings {
    Settings::load_default().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {e}"));
        Settings::default()
    })
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(args) => generate::run_generate(args),
        Command::Words(args) => generate::run_words(args),
        Command::Check(args) => check::run(args),
        Command::Simulate(args) => simulate::run(args),
        Command::Hardware => {
            config::list_hardware();
            Ok(())
        }
        Command::Config { action } => config::run(action),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Aborted) => {
            eprintln!("Aborted.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            prompts::error(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn charset_flags_override_config() {
        let cli = Cli::parse_from([
            "passlab", "generate", "-l", "24", "--no-symbols", "--exclude-ambiguous", "-n", "3",
        ]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let mut config = GenerationConfig::default();
        args.charset.apply(&mut config);
        assert_eq!(config.length, 24);
        assert!(!config.include_symbols);
        assert!(config.exclude_ambiguous);
        assert!(config.include_lowercase);
        assert_eq!(args.output.number, Some(3));
    }

    #[test]
    fn word_flags_parse_language() {
        let cli = Cli::parse_from(["passlab", "words", "-w", "6", "--lang", "spanish", "--separator", "."]);
        let Command::Words(args) = cli.command else {
            panic!("expected words");
        };
        let mut config = GenerationConfig::default();
        args.words.apply(&mut config);
        assert_eq!(config.word_count, 6);
        assert_eq!(config.word_language, WordLanguage::Es);
        assert_eq!(config.word_separator, ".");
    }

    #[test]
    fn simulate_accepts_method_names() {
        let cli = Cli::parse_from(["passlab", "simulate", "--length", "8", "--alphabet", "26", "--method", "brute-force", "--json"]);
        let Command::Simulate(args) = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(args.method, Some(AttackKind::Sequential));
        assert!(args.json);
    }
}
