//! `generate` and `words` commands.

use clap::Args;

use passlab::strength::entropy_strength;
use passlab::{CharacterSet, GeneratedPassword, GenerationConfig, SecureRandom, pass, rng};

use super::sink::Sink;
use super::{CharsetArgs, CliResult, OutputArgs, WordArgs, load_settings, prompts};
use crate::terminal::{box_bottom_str, box_line_str, box_top_str};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub charset: CharsetArgs,
    #[command(flatten)]
    pub output: OutputArgs,
    /// Print an entropy summary to stderr
    #[arg(long)]
    pub show_entropy: bool,
}

#[derive(Debug, Args)]
pub struct WordsArgs {
    #[command(flatten)]
    pub words: WordArgs,
    /// Append a three-digit number token
    #[arg(long)]
    pub numbers: bool,
    #[command(flatten)]
    pub output: OutputArgs,
    /// Print an entropy summary to stderr
    #[arg(long)]
    pub show_entropy: bool,
}

/// Base config and count: saved defaults with `-s`, built-ins otherwise.
fn base(output: &OutputArgs) -> (GenerationConfig, usize, String, bool) {
    if output.saved {
        let settings = load_settings();
        (
            settings.generation,
            settings.number_of_passwords.max(1),
            settings.output_file_path,
            settings.to_clipboard,
        )
    } else {
        (GenerationConfig::default(), 1, String::new(), false)
    }
}

pub fn run_generate(args: GenerateArgs) -> CliResult {
    prompts::set_quiet(args.output.quiet);

    let (mut config, saved_count, saved_path, saved_clipboard) = base(&args.output);
    args.charset.apply(&mut config);
    let count = args.output.number.unwrap_or(saved_count);

    // Fail on a bad config before touching the clipboard.
    let charset = CharacterSet::build(&config)?;
    let mut sink = Sink::open(&args.output, &saved_path, saved_clipboard)?;

    let passwords = pass::generate_batch(&config, count, &mut SecureRandom::new())?;
    if args.show_entropy {
        entropy_box(&passwords, &format!("Charset: {} chars", charset.len()));
    }
    sink.emit(&passwords)
}

pub fn run_words(args: WordsArgs) -> CliResult {
    prompts::set_quiet(args.output.quiet);

    let (mut config, saved_count, saved_path, saved_clipboard) = base(&args.output);
    if !args.output.saved {
        config.include_numbers = false;
    }
    args.words.apply(&mut config);
    if args.numbers {
        config.include_numbers = true;
    }
    let count = args.output.number.unwrap_or(saved_count);

    let mut sink = Sink::open(&args.output, &saved_path, saved_clipboard)?;

    let mut rng = SecureRandom::new();
    let passwords = (0..count)
        .map(|_| pass::generate_words(&config, &mut rng))
        .collect::<passlab::Result<Vec<_>>>()?;
    if args.show_entropy {
        let list = pass::words::word_list(config.word_language);
        entropy_box(
            &passwords,
            &format!("Word list: {} ({} words)", config.word_language, list.len()),
        );
    }
    sink.emit(&passwords)
}

/// Entropy box on stderr, like the header shown before bulk output.
fn entropy_box(passwords: &[GeneratedPassword], detail: &str) {
    let Some(first) = passwords.first() else {
        return;
    };
    if prompts::quiet() {
        return;
    }
    let bits = first.entropy_bits();
    let lines = [
        box_top_str("Entropy"),
        box_line_str(&format!("{bits:.1} bits ({})", entropy_strength(bits))),
        box_line_str(&format!("Source: {} • {detail}", rng::source_name())),
        box_bottom_str(),
    ];
    for line in lines {
        eprintln!("{line}");
    }
}

