//! Terminal output utilities.
//!
//! Box drawing, progress bar, number formatting.

use std::io::{self, Write};

// ============================================================================
// ANSI Color Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";

// ============================================================================
// Number Formatting
// ============================================================================

pub fn format_number(num: usize) -> String {
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

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, wrapping the description.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 24;
    let desc_col = inner_width - flag_col;

    let flag_padded = format!("{:<width$}", flag, width = flag_col);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let first = lines.first().map(String::as_str).unwrap_or("");
    println!(
        "│ {}{}{} │",
        flag_padded,
        first,
        " ".repeat(desc_col.saturating_sub(first.len()))
    );

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Display width of `s`, skipping ANSI escape sequences.
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

// ============================================================================
// Progress Bar
// ============================================================================

/// Render a progress bar inside a box with centered text (3 lines).
pub fn progress_bar_box<W: Write>(out: &mut W, percent: f32, stats: &str) -> io::Result<()> {
    let inner_width = BOX_WIDTH - 2;
    let filled = if percent >= 100.0 {
        inner_width
    } else {
        ((percent.max(0.0) / 100.0) * inner_width as f32) as usize
    };

    let text: Vec<char> = stats.chars().collect();
    let padding = inner_width.saturating_sub(text.len()) / 2;
    let mut content: Vec<char> = vec![' '; inner_width];
    for (i, ch) in text.iter().enumerate() {
        if padding + i < inner_width {
            content[padding + i] = *ch;
        }
    }
    let done: String = content[..filled].iter().collect();
    let rest: String = content[filled..].iter().collect();
    let empty = inner_width - filled;

    if filled > 0 {
        write!(out, "\r▗{}", "▄".repeat(filled))?;
    } else {
        write!(out, "\r┌")?;
    }
    if empty > 0 {
        writeln!(out, "{}┐", "─".repeat(empty))?;
    } else {
        writeln!(out, "▖")?;
    }

    if filled > 0 {
        write!(out, "\r▐\x1b[7m{}{RESET}", done)?;
    } else {
        write!(out, "\r│")?;
    }
    if empty > 0 {
        writeln!(out, "{}│", rest)?;
    } else {
        writeln!(out, "▌")?;
    }

    if filled > 0 {
        write!(out, "\r▝{}", "▀".repeat(filled))?;
    } else {
        write!(out, "\r└")?;
    }
    if empty > 0 {
        writeln!(out, "{}┘", "─".repeat(empty))?;
    } else {
        writeln!(out, "▘")?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(10_000_000), "10,000,000");
    }

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
    }

    #[test]
    fn progress_bar_is_three_lines_wide() {
        let mut buf = Vec::new();
        progress_bar_box(&mut buf, 10.0, "half").unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("half"));
        assert_eq!(lines[0].trim_start_matches('\r').chars().count(), BOX_WIDTH);
    }
}
