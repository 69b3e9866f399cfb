//! RNG test binary - streams output of the password RNG to stdout for
//! statistical testing.
//!
//! Pipe to test suites:
//!   ./rng_test | dieharder -a -g 200
//!   ./rng_test | RNG_test stdin -tlmax 1TB
//!   ./rng_test --bound 62 | RNG_test stdin8     # bounded draws, one byte each

use std::io::{self, Write};

use clap::Parser;
use zeroize::Zeroize;

use passlab::SecureRandom;

#[derive(Debug, Parser)]
#[command(
    name = "rng_test",
    about = "Stream passlab RNG output for dieharder, PractRand or TestU01"
)]
struct Args {
    /// Stop after this many bytes (K, M, G suffixes); runs until the pipe closes otherwise
    #[arg(short = 'n', long = "bytes", value_parser = parse_byte_count)]
    limit: Option<usize>,
    /// Emit `next_int(bound)` draws, one byte each, instead of raw bytes (bound <= 256)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=256))]
    bound: Option<u32>,
}

/// Byte count with optional K, M, G suffix
fn parse_byte_count(s: &str) -> Result<usize, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = match s.chars().last() {
        Some('K') => (&s[..s.len() - 1], 1024),
        Some('M') => (&s[..s.len() - 1], 1024 * 1024),
        Some('G') => (&s[..s.len() - 1], 1024 * 1024 * 1024),
        _ => (s.as_str(), 1),
    };
    num_str
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_mul(multiplier))
        .ok_or_else(|| format!("invalid byte count: {s}"))
}

fn fill(rng: &mut SecureRandom, buf: &mut [u8], bound: Option<u32>) -> passlab::Result<()> {
    match bound {
        None => rng.fill_bytes(buf),
        Some(bound) => {
            for dst in buf.iter_mut() {
                *dst = rng.next_int(bound)? as u8;
            }
            Ok(())
        }
    }
}

fn main() {
    let args = Args::parse();
    let mut rng = SecureRandom::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut buf = [0u8; 8192];
    let mut written: usize = 0;

    loop {
        let to_write = match args.limit {
            Some(limit) if limit <= written => break,
            Some(limit) => (limit - written).min(buf.len()),
            None => buf.len(),
        };

        if let Err(e) = fill(&mut rng, &mut buf[..to_write], args.bound) {
            eprintln!("rng_test: {e}");
            std::process::exit(1);
        }
        if out.write_all(&buf[..to_write]).is_err() {
            break;
        }
        written += to_write;
    }

    buf.zeroize();
}
