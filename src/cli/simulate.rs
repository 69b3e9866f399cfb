//! `simulate` command: live or headless attack simulation.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, sleep};
use std::time::{Duration, Instant};

use clap::Args;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use zeroize::Zeroize;

use passlab::sim::{HISTORY_LEN, History, hardware};
use passlab::strength::{effective_alphabet_size, format_duration};
use passlab::{
    AttackKind, AttackMethod, AttackSimulator, CharacterSet, SimulationConfig, SimulationSnapshot,
    SimulationState, SimulationSummary,
};

use super::config::unknown_hardware;
use super::{CliError, CliResult, load_settings, prompts};
use crate::terminal::{
    RawModeGuard, box_bottom, box_bottom_str, box_line, box_line_str, box_top, box_top_str,
    centered_str, cursor_up, flush, format_count, format_rate, progress_bar_lines,
};

/// Simulated seconds covered by a headless run whose search can never
/// finish and that has no `--duration`.
const OPEN_ENDED_HORIZON: f64 = 3600.0;

const PANEL_LINES: usize = 9;

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Attack this password's length and character classes
    #[arg(short, long, conflicts_with_all = ["length", "alphabet"])]
    pub password: Option<String>,
    /// Target length (defaults to the saved generation length)
    #[arg(short, long)]
    pub length: Option<usize>,
    /// Target alphabet size (defaults to the saved character classes)
    #[arg(short, long)]
    pub alphabet: Option<usize>,
    /// sequential, dictionary or hybrid
    #[arg(short, long)]
    pub method: Option<AttackKind>,
    /// Hardware profile id (see `passlab hardware`)
    #[arg(long)]
    pub hardware: Option<String>,
    /// Stop after this many simulated seconds
    #[arg(short, long)]
    pub duration: Option<f64>,
    /// Redraw interval of the live view
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,
    /// Run without the live view and print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Complete,
    Stopped,
    TimeLimit,
}

#[derive(Debug, Clone, Copy)]
enum Key {
    Stop,
    TogglePause,
    Restart,
}

pub fn run(mut args: SimulateArgs) -> CliResult {
    if let Some(d) = args.duration
        && !(d.is_finite() && d > 0.0)
    {
        return Err(CliError::Usage("--duration must be a positive number of seconds".into()));
    }

    let config = build_config(&mut args)?;
    let mut sim = AttackSimulator::new(config)?;

    let live = !args.json && prompts::is_interactive() && unsafe { libc::isatty(1) == 1 };
    let outcome = if live {
        let tick = Duration::from_millis(args.tick_ms.max(1));
        run_live(&mut sim, args.duration, tick)?
    } else {
        run_headless(&mut sim, args.duration)
    };

    let summary = sim.summary();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).map_err(passlab::Error::from)?
        );
    } else {
        render_summary(&summary, outcome);
    }
    Ok(())
}

fn build_config(args: &mut SimulateArgs) -> CliResult<SimulationConfig> {
    let settings = load_settings();

    let (length, alphabet) = match args.password.take() {
        Some(mut password) => {
            let target = (password.chars().count(), effective_alphabet_size(&password));
            password.zeroize();
            target
        }
        None => {
            let length = args.length.unwrap_or(settings.generation.length);
            let alphabet = match args.alphabet {
                Some(a) => a,
                None => CharacterSet::build(&settings.generation)?.len(),
            };
            (length, alphabet)
        }
    };

    let method = args
        .method
        .map(AttackMethod::of)
        .unwrap_or_else(|| settings.simulation.method());
    let hardware = match args.hardware.as_deref() {
        Some(id) => hardware::find(id).ok_or_else(|| unknown_hardware(id))?,
        None => settings.simulation.hardware(),
    };

    Ok(SimulationConfig::new(length, alphabet, method, hardware))
}

/// Drive the simulator on a synthetic clock, sampling the run evenly so
/// the history spans the whole horizon.
fn run_headless(sim: &mut AttackSimulator, duration: Option<f64>) -> Outcome {
    let estimate = sim.model().estimated_completion_seconds;
    let horizon = match duration {
        Some(d) => d,
        None if estimate.is_finite() => estimate,
        None => {
            prompts::warn(&format!(
                "Search space too large to finish; simulating {OPEN_ENDED_HORIZON} s. Use --duration to change."
            ));
            OPEN_ENDED_HORIZON
        }
    };

    sim.start(0.0);
    if horizon <= 0.0 {
        sim.tick(0.0);
    } else {
        for i in 1..=HISTORY_LEN {
            let now = if i == HISTORY_LEN {
                horizon
            } else {
                horizon * i as f64 / HISTORY_LEN as f64
            };
            if sim.tick(now).state == SimulationState::Complete {
                break;
            }
        }
    }

    if sim.state() == SimulationState::Complete {
        Outcome::Complete
    } else {
        sim.pause(horizon);
        Outcome::TimeLimit
    }
}

fn run_live(sim: &mut AttackSimulator, duration: Option<f64>, tick: Duration) -> CliResult<Outcome> {
    print_target(sim);
    for _ in 0..PANEL_LINES {
        println!();
    }

    let mut raw_guard = RawModeGuard::new()?;
    let (keys, close_tx) = spawn_key_reader();

    let origin = Instant::now();
    sim.start(0.0);
    let mut session = sim.session();

    let outcome = loop {
        let now = origin.elapsed().as_secs_f64();

        match keys.try_recv() {
            Ok(Key::Stop) => {
                sim.pause(now);
                break Outcome::Stopped;
            }
            Ok(Key::TogglePause) => match sim.state() {
                SimulationState::Running => sim.pause(now),
                SimulationState::Paused => sim.start(now),
                _ => {}
            },
            Ok(Key::Restart) => {
                sim.reset();
                session = sim.session();
                sim.start(now);
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
        }

        let snapshot = sim.tick_session(session, now);
        draw_panel(sim, &snapshot);

        if snapshot.state == SimulationState::Complete {
            break Outcome::Complete;
        }
        if let Some(cap) = duration
            && snapshot.elapsed_seconds >= cap
        {
            sim.pause(now);
            break Outcome::TimeLimit;
        }

        sleep(tick);
    };

    let _ = close_tx.send(());
    raw_guard.disable();
    Ok(outcome)
}

/// Keyboard events on a helper thread so the redraw loop never blocks.
fn spawn_key_reader() -> (Receiver<Key>, Sender<()>) {
    let (tx, rx) = mpsc::channel();
    let (close_tx, close_rx) = mpsc::channel::<()>();

    thread::spawn(move || {
        let timeout = Duration::from_millis(25);
        loop {
            if let Ok(()) | Err(TryRecvError::Disconnected) = close_rx.try_recv() {
                break;
            }
            match event::poll(timeout) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(_) => break,
            }
            let Ok(Event::Key(key)) = event::read() else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let is_ctrl_c =
                key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            let mapped = match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(Key::Stop),
                _ if is_ctrl_c => Some(Key::Stop),
                KeyCode::Char(' ') => Some(Key::TogglePause),
                KeyCode::Char('r') => Some(Key::Restart),
                _ => None,
            };
            if let Some(k) = mapped
                && tx.send(k).is_err()
            {
                break;
            }
        }
    });

    (rx, close_tx)
}

fn print_target(sim: &AttackSimulator) {
    let config = sim.config();
    let model = sim.model();
    box_top("Target");
    box_line(&format!(
        "{} chars from a {}-symbol alphabet • search space {}",
        config.password_length,
        config.alphabet_size,
        format_count(model.search_space)
    ));
    box_line(&format!(
        "{} on {} • full search {}",
        config.method.kind,
        config.hardware.name,
        format_duration(model.estimated_completion_seconds)
    ));
    box_bottom();
    println!();
}

fn draw_panel(sim: &AttackSimulator, snap: &SimulationSnapshot) {
    let config = sim.config();
    let state = match snap.state {
        SimulationState::Paused => "PAUSED",
        SimulationState::Complete => "COMPLETE",
        SimulationState::Running => "running",
        SimulationState::Idle => "idle",
    };
    let remaining = (snap.estimated_completion_seconds - snap.elapsed_seconds).max(0.0);

    let mut lines = vec![
        box_top_str(&format!("{} attack • {}", config.method.kind, config.hardware.name)),
        box_line_str(&format!(
            "{state} • elapsed {:.2} s • remaining {}",
            snap.elapsed_seconds,
            format_duration(remaining)
        )),
        box_line_str(&format!(
            "{} of {} attempts",
            format_count(snap.attempts),
            format_count(snap.search_space)
        )),
        box_line_str(&format!(
            "{} • {:.6} kWh • {} attempts/Wh",
            format_rate(snap.effective_speed * config.method.relative_speed_factor),
            snap.energy_kwh,
            format_count(snap.efficiency)
        )),
        box_bottom_str(),
    ];
    lines.extend(progress_bar_lines(
        snap.progress_percent,
        &format!("{:.4}%", snap.progress_percent),
    ));
    lines.push(centered_str("[Space] pause/resume • [r] restart • [Esc/Ctrl+C] stop"));

    cursor_up(PANEL_LINES);
    for line in lines {
        print!("\r{line}\x1b[K\r\n");
    }
    flush();
}

/// One block character per history sample, scaled to the run's progress.
fn sparkline(history: &History) -> String {
    const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    history
        .iter()
        .map(|s| {
            let idx = ((s.progress_percent / 100.0) * (BARS.len() - 1) as f64).round() as usize;
            BARS[idx.min(BARS.len() - 1)]
        })
        .collect()
}

fn render_summary(summary: &SimulationSummary, outcome: Outcome) {
    let snap = &summary.snapshot;
    let title = match outcome {
        Outcome::Complete => "Complete",
        Outcome::Stopped => "Stopped",
        Outcome::TimeLimit => "Time limit",
    };

    println!();
    box_top(title);
    box_line(&format!(
        "Target: {} chars, {}-symbol alphabet",
        summary.password_length, summary.alphabet_size
    ));
    box_line(&format!(
        "Method: {} • success probability {:.0}%",
        summary.method,
        summary.success_probability * 100.0
    ));
    box_line(&format!(
        "Hardware: {} • {} • {} kW",
        summary.hardware.name,
        format_rate(summary.hardware.hashes_per_second_base as f64),
        summary.hardware.power_draw_kw
    ));
    box_line(&format!(
        "Attempts: {} of {} ({:.4}%)",
        format_count(snap.attempts),
        format_count(snap.search_space),
        snap.progress_percent
    ));
    box_line(&format!(
        "Elapsed: {:.3} s • full search {}",
        snap.elapsed_seconds,
        format_duration(snap.estimated_completion_seconds)
    ));
    box_line(&format!(
        "Energy: {:.6} kWh • {} attempts/Wh",
        snap.energy_kwh,
        format_count(snap.efficiency)
    ));
    if !summary.history.is_empty() {
        box_line(&format!("Progress: {}", sparkline(&summary.history)));
    }
    box_bottom();
}
