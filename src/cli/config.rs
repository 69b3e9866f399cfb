//! `config` and `hardware` commands.

use clap::Subcommand;

use passlab::sim::hardware;
use passlab::{CharacterSet, FileStore, Settings};

use super::sink::normalize_output_path;
use super::{CharsetArgs, CliError, CliResult, SimDefaultArgs, WordArgs, load_settings};
use crate::terminal::{box_bottom, box_opt, box_rule, box_top, format_rate};

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print saved settings as JSON
    Show,
    /// Update saved settings; unspecified options keep their saved value
    Save {
        #[command(flatten)]
        charset: CharsetArgs,
        #[command(flatten)]
        words: WordArgs,
        #[command(flatten)]
        sim: SimDefaultArgs,
        /// Default number of passwords
        #[arg(short, long)]
        number: Option<usize>,
        /// Default output file ("" for stdout)
        #[arg(short, long)]
        output: Option<String>,
        /// Copy to the clipboard by default
        #[arg(short = 'b', long = "board")]
        clipboard: Option<bool>,
        /// Re-enable every character class before applying flags
        #[arg(long)]
        all_classes: bool,
    },
    /// Delete saved settings
    Reset,
}

pub fn run(action: ConfigAction) -> CliResult {
    let store = FileStore::default_location();

    match action {
        ConfigAction::Show => {
            let settings = load_settings();
            eprintln!("# {}", store.root().join("settings").display());
            println!(
                "{}",
                serde_json::to_string_pretty(&settings).map_err(passlab::Error::from)?
            );
        }
        ConfigAction::Save {
            charset,
            words,
            sim,
            number,
            output,
            clipboard,
            all_classes,
        } => {
            let mut settings = Settings::load(&store)?;
            if all_classes {
                let defaults = passlab::GenerationConfig::default();
                settings.generation.include_lowercase = defaults.include_lowercase;
                settings.generation.include_uppercase = defaults.include_uppercase;
                settings.generation.include_numbers = defaults.include_numbers;
                settings.generation.include_symbols = defaults.include_symbols;
                settings.generation.exclude_ambiguous = defaults.exclude_ambiguous;
            }
            charset.apply(&mut settings.generation);
            words.apply(&mut settings.generation);

            // Refuse to persist a config that can never generate.
            CharacterSet::build(&settings.generation)?;
            if settings.generation.length == 0 || settings.generation.word_count == 0 {
                return Err(CliError::Usage("length and word count must be positive".into()));
            }

            if let Some(method) = sim.method {
                settings.simulation.method = method;
            }
            if let Some(id) = sim.hardware {
                let profile = hardware::find(&id).ok_or_else(|| unknown_hardware(&id))?;
                settings.simulation.hardware = profile.id;
            }
            if let Some(n) = number {
                settings.number_of_passwords = n.max(1);
            }
            if let Some(path) = output {
                settings.output_file_path = if path.is_empty() {
                    path
                } else {
                    normalize_output_path(&path)
                };
            }
            if let Some(clipboard) = clipboard {
                settings.to_clipboard = clipboard;
            }

            settings.save(&store)?;
            eprintln!("Saved to {}", store.root().join("settings").display());
        }
        ConfigAction::Reset => {
            Settings::clear(&store)?;
            eprintln!("Saved settings removed.");
        }
    }
    Ok(())
}

pub fn unknown_hardware(id: &str) -> CliError {
    let ids = hardware::catalog()
        .iter()
        .map(|p| p.id.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    CliError::Usage(format!("unknown hardware '{id}' (one of: {ids})"))
}

pub fn list_hardware() {
    box_top("Hardware");
    box_opt("id", "name, base rate, power draw");
    box_rule();
    for profile in hardware::catalog() {
        box_opt(
            &profile.id,
            &format!(
                "{}, {}, {} kW",
                profile.name,
                format_rate(profile.hashes_per_second_base as f64),
                profile.power_draw_kw
            ),
        );
    }
    box_bottom();
}
