//! Terminal output utilities.
//!
//! Box drawing, progress bars, number formatting, ANSI helpers.
//!
//! Every box helper has a `*_str` form returning the line without a
//! terminator, so the live simulator view can emit `\r\n` itself while
//! the terminal is in raw mode.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Move the cursor up `n` lines.
pub fn cursor_up(n: usize) {
    if n > 0 {
        print!("\x1b[{n}A");
    }
}

// ============================================================================
// Number Formatting
// ============================================================================

pub fn format_number(num: u64) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Grouped integer below 10^15, scientific notation above.
pub fn format_count(num: f64) -> String {
    if !num.is_finite() {
        return "∞".to_string();
    }
    if num < 1e15 {
        format_number(num.max(0.0) as u64)
    } else {
        format!("{num:.3e}")
    }
}

/// Rate with an SI prefix: `12.5 GH/s`.
pub fn format_rate(per_second: f64) -> String {
    const PREFIXES: [&str; 6] = ["", "k", "M", "G", "T", "P"];
    let mut value = per_second;
    let mut idx = 0;
    while value >= 1000.0 && idx < PREFIXES.len() - 1 {
        value /= 1000.0;
        idx += 1;
    }
    format!("{value:.1} {}H/s", PREFIXES[idx])
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// ┌─ Title ───────────────────────────┐
pub fn box_top_str(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                                        │
pub fn box_line_str(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        format!("│ {}{} │", content, " ".repeat(padding))
    } else {
        format!("│ {} │", content)
    }
}

/// ├───────────────────────────────────────────────────────┤
pub fn box_rule_str() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// └───────────────────────────────────────────────────────┘
pub fn box_bottom_str() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

pub fn box_top(title: &str) {
    println!("{}", box_top_str(title));
}

pub fn box_line(content: &str) {
    println!("{}", box_line_str(content));
}

pub fn box_rule() {
    println!("{}", box_rule_str());
}

pub fn box_bottom() {
    println!("{}", box_bottom_str());
}

/// Print a label/value row, wrapping the value under its column.
pub fn box_opt(label: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let label_col = 28;
    let desc_col = inner_width - label_col;

    let label_padded = if label.chars().count() < label_col {
        format!("{}{}", label, " ".repeat(label_col - label.chars().count()))
    } else {
        label.chars().take(label_col).collect()
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.chars().count() + 1 + word.chars().count() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let first = lines.first().map(String::as_str).unwrap_or("");
    let padding = desc_col.saturating_sub(first.chars().count());
    println!("│ {}{}{} │", label_padded, first, " ".repeat(padding));

    let indent = " ".repeat(label_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.chars().count());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Display width ignoring ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Text centered within box width.
pub fn centered_str(text: &str) -> String {
    let len = console_width(text);
    let padding = BOX_WIDTH.saturating_sub(len) / 2;
    format!(
        "{}{}{}",
        " ".repeat(padding),
        text,
        " ".repeat(BOX_WIDTH.saturating_sub(padding + len))
    )
}

// ============================================================================
// Progress Bar
// ============================================================================

/// Progress bar inside a box with centered text, as three lines.
pub fn progress_bar_lines(percent: f64, stats: &str) -> [String; 3] {
    let inner_width = BOX_WIDTH - 2;
    let filled = if percent >= 100.0 {
        inner_width
    } else {
        ((percent.max(0.0) / 100.0) * inner_width as f64) as usize
    };

    let text_chars: Vec<char> = stats.chars().collect();
    let padding = inner_width.saturating_sub(text_chars.len()) / 2;

    let mut content: Vec<char> = vec![' '; inner_width];
    for (i, ch) in text_chars.iter().enumerate() {
        if padding + i < inner_width {
            content[padding + i] = *ch;
        }
    }

    let mut top = String::new();
    let mut middle = String::new();
    let mut bottom = String::new();

    if filled > 0 {
        top.push('▗');
        top.push_str(&"▄".repeat(filled));
        middle.push('▐');
        let filled_str: String = content[..filled].iter().collect();
        middle.push_str(&format!("\x1b[7m{}\x1b[0m", filled_str));
        bottom.push('▝');
        bottom.push_str(&"▀".repeat(filled));
    } else {
        top.push('┌');
        middle.push('│');
        bottom.push('└');
    }

    if filled < inner_width {
        let rest = inner_width - filled;
        top.push_str(&"─".repeat(rest));
        top.push('┐');
        middle.extend(content[filled..].iter());
        middle.push('│');
        bottom.push_str(&"─".repeat(rest));
        bottom.push('┘');
    } else {
        top.push('▖');
        middle.push('▌');
        bottom.push('▘');
    }

    [top, middle, bottom]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(456_976), "456,976");
        assert_eq!(format_number(1_000_000), "1,000,000");
    }

    #[test]
    fn counts_switch_to_scientific() {
        assert_eq!(format_count(1234.9), "1,234");
        assert_eq!(format_count(f64::INFINITY), "∞");
        assert!(format_count(4.5e20).contains('e'));
    }

    #[test]
    fn rates_use_si_prefixes() {
        assert_eq!(format_rate(250_000.0), "250.0 kH/s");
        assert_eq!(format_rate(1e10), "10.0 GH/s");
        assert_eq!(format_rate(12.0), "12.0 H/s");
    }

    #[test]
    fn box_lines_have_fixed_width() {
        assert_eq!(box_top_str("Strength").chars().count(), BOX_WIDTH);
        assert_eq!(box_line_str("abc").chars().count(), BOX_WIDTH);
        let styled = box_line_str(&format!("{RED}abc{RESET}"));
        assert_eq!(styled.chars().count(), BOX_WIDTH + RED.len() + RESET.len());
        assert_eq!(box_bottom_str().chars().count(), BOX_WIDTH);
    }

    #[test]
    fn progress_bar_extremes() {
        let [top, _, bottom] = progress_bar_lines(0.0, "");
        assert!(top.starts_with('┌') && bottom.ends_with('┘'));
        let [top, _, _] = progress_bar_lines(100.0, "done");
        assert!(top.starts_with('▗') && top.ends_with('▖'));
        assert_eq!(top.chars().count(), BOX_WIDTH);
    }
}
