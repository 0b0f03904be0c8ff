//! Centralized warning, prompt and summary messages for CLI output.

use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::pass::GenerationRequest;
use crate::terminal::{RED, RESET, YELLOW, box_bottom, box_line, box_top, format_number};

/// Suppresses warnings, prompts and the summary. Errors still print.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}[!] {msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - never suppressed
pub fn error(msg: &str) {
    eprintln!("{RED}[-] {msg}{RESET}");
}

#[derive(Debug, PartialEq, Eq)]
enum Confirmation {
    Proceed,
    WarnOnly,
    Ask,
}

/// Quiet runs go ahead silently; without a tty on stdin there is nobody to
/// answer, so the warning is printed and the run goes ahead.
fn confirmation(quiet: bool, stdin_tty: bool) -> Confirmation {
    match (quiet, stdin_tty) {
        (true, _) => Confirmation::Proceed,
        (false, false) => Confirmation::WarnOnly,
        (false, true) => Confirmation::Ask,
    }
}

fn large_count_warning(count: usize) -> String {
    format!(
        "Warning: Generating {} passwords may take significant time and memory.",
        format_number(count)
    )
}

/// Warn before a very large run and, on an interactive stdin, ask to
/// continue. Returns true to go ahead.
pub fn confirm_large_count(count: usize) -> bool {
    let warning = large_count_warning(count);
    let stdin_tty = unsafe { libc::isatty(0) == 1 };

    match confirmation(quiet(), stdin_tty) {
        Confirmation::Proceed => true,
        Confirmation::WarnOnly => {
            warn(&warning);
            true
        }
        Confirmation::Ask => {
            eprint!("{YELLOW}[!] {warning} Continue? (y/n): {RESET}");
            let _ = std::io::stderr().flush();

            let mut input = String::new();
            if std::io::stdin().read_line(&mut input).is_ok() {
                let input = input.trim().to_lowercase();
                return input == "y" || input == "yes";
            }
            false
        }
    }
}

pub fn aborted() {
    if !quiet() {
        println!("[*] Aborted");
    }
}

pub fn generating(request: &GenerationRequest) {
    if quiet() {
        return;
    }
    match request.pattern() {
        Some(pattern) => println!("[*] Generating pattern-based passwords from '{pattern}'..."),
        None => println!(
            "[*] Generating {} random passwords...",
            format_number(request.count())
        ),
    }
}

/// Final report after a successful write.
pub fn summary(written: usize, requested: usize, path: &Path, elapsed: Duration) {
    if quiet() {
        return;
    }

    let full_path = std::fs::canonicalize(path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string());

    println!();
    box_top("Complete");
    box_line(&format!(
        "{} password(s) written in {}ms",
        format_number(written),
        elapsed.as_millis()
    ));
    if written != requested {
        box_line(&format!(
            "{} requested, {} outside the length bounds",
            format_number(requested),
            format_number(requested - written)
        ));
    }
    box_line(&format!("File: {}", full_path));
    box_bottom();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_large_run_is_warned_not_blocked() {
        assert_eq!(confirmation(false, false), Confirmation::WarnOnly);
        assert_eq!(confirmation(false, true), Confirmation::Ask);
        assert_eq!(confirmation(true, false), Confirmation::Proceed);
        assert_eq!(confirmation(true, true), Confirmation::Proceed);
    }

    #[test]
    fn warning_names_the_count() {
        assert_eq!(
            large_count_warning(25_000_000),
            "Warning: Generating 25,000,000 passwords may take significant time and memory."
        );
    }
}
