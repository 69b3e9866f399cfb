//! `check` command: strength report for one password.

use clap::Args;
use zeroize::Zeroize;

use passlab::strength::{entropy_strength, format_duration};
use passlab::{StrengthReport, evaluate_strength};

use super::{CliError, CliResult, prompts};
use crate::terminal::{
    BOLD, GREEN, RED, RESET, YELLOW, box_bottom, box_line, box_opt, box_rule, box_top,
};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Password to rate; read from stdin when omitted
    pub password: Option<String>,
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
    /// Suppress warnings
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(mut args: CheckArgs) -> CliResult {
    prompts::set_quiet(args.quiet);

    let mut password = match args.password.take() {
        Some(p) => {
            prompts::warn("Warning: passwords given as arguments end up in shell history.");
            p
        }
        None => prompts::read_secret("Password: ")?,
    };
    if password.is_empty() {
        return Err(CliError::Usage("no password given".into()));
    }

    let report = evaluate_strength(&password);
    password.zeroize();
    let report = report?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).map_err(passlab::Error::from)?);
    } else {
        render(&report);
    }
    Ok(())
}

fn score_color(score: u8) -> &'static str {
    match score {
        0 | 1 => RED,
        2 => YELLOW,
        _ => GREEN,
    }
}

fn render(report: &StrengthReport) {
    box_top("Strength");
    box_line(&format!(
        "{}{BOLD}{}{RESET} ({}/4)",
        score_color(report.score),
        report.label(),
        report.score
    ));
    box_line(&format!(
        "Entropy: {:.1} bits ({})",
        report.entropy_bits,
        entropy_strength(report.entropy_bits)
    ));
    box_line(&format!("Dominant pattern: {}", report.pattern));
    if !report.warning.is_empty() {
        box_line(&format!("{YELLOW}{}{RESET}", report.warning));
    }
    for suggestion in &report.suggestions {
        box_opt("Suggestion", suggestion);
    }

    box_rule();
    for (scenario, seconds) in report.crack_times.scenarios() {
        box_opt(scenario, &format_duration(seconds));
    }
    box_bottom();
}
