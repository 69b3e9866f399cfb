use std::process::ExitCode;

mod cli;
mod exits;
mod terminal;

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    exits::harden_process();

    // stderr only: stdout carries passwords and reports.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    cli::run()
}
