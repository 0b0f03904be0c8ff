//! CLI context - bundles flags and settings, and drives one run.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crossterm::tty::IsTty;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use super::{CliFlags, ParseError, help, prompts};
use crate::error::Error;
use crate::pass::{self, GenerationRequest, Progress, Silent, output};
use crate::settings::Settings;
use crate::terminal::{LogProgress, TerminalProgress};

/// Why a run stopped before completing normally.
#[derive(Debug)]
pub enum Stop {
    /// Early exit - not an error, just done.
    Done,
    Args(ParseError),
    Failed(Error),
}

impl From<ParseError> for Stop {
    fn from(e: ParseError) -> Self {
        Stop::Args(e)
    }
}

impl From<Error> for Stop {
    fn from(e: Error) -> Self {
        Stop::Failed(e)
    }
}

/// Stored defaults, or built-in ones if the file cannot be read.
fn load_settings(path: &Path) -> Settings {
    Settings::load_from(path).unwrap_or_else(|e| {
        warn!("Failed to load settings: {e}");
        Settings::default()
    })
}

/// Application context for CLI mode.
pub struct Context {
    pub flags: CliFlags,
    pub settings: Settings,
}

impl Context {
    /// Parse command-line arguments, install logging, load stored defaults.
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;
        prompts::set_quiet(flags.quiet);
        crate::logging::init(flags.quiet);

        let settings = load_settings(&Settings::default_path());
        Ok(Self { flags, settings })
    }

    /// Run CLI. Returns `Err(Stop::Done)` for early exits.
    pub fn run(&mut self) -> Result<(), Stop> {
        self.handle_info_flags()?;
        let output = self.output_path()?;
        let request = self.build_request()?;
        self.handle_save()?;
        self.confirm(&request)?;
        self.generate_output(&request, output)
    }

    fn handle_info_flags(&self) -> Result<(), Stop> {
        if self.flags.help {
            help::print_help();
            return Err(Stop::Done);
        }
        if self.flags.version {
            println!("masspass {}", env!("CARGO_PKG_VERSION"));
            return Err(Stop::Done);
        }
        Ok(())
    }

    fn output_path(&self) -> Result<PathBuf, ParseError> {
        self.flags
            .output
            .as_deref()
            .map(output::normalize_path)
            .ok_or(ParseError::MissingRequired("--output"))
    }

    /// Validate flags, falling back to stored defaults for min/max.
    pub fn build_request(&self) -> Result<GenerationRequest, Stop> {
        let count = self
            .flags
            .count
            .ok_or(ParseError::MissingRequired("--count"))?;
        let request = GenerationRequest::new(
            count,
            self.flags.min.unwrap_or(self.settings.min_length),
            self.flags.max.unwrap_or(self.settings.max_length),
            self.flags.length,
            self.flags.pattern.clone(),
        )?;
        Ok(request)
    }

    fn handle_save(&mut self) -> Result<(), Error> {
        if !self.flags.save {
            return Ok(());
        }
        if let Some(min) = self.flags.min {
            self.settings.min_length = min;
        }
        if let Some(max) = self.flags.max {
            self.settings.max_length = max;
        }
        self.settings.save_to_file().map_err(Error::Settings)
    }

    fn confirm(&self, request: &GenerationRequest) -> Result<(), Stop> {
        if request.count() > self.settings.confirm_threshold
            && !self.flags.yes
            && !prompts::confirm_large_count(request.count())
        {
            prompts::aborted();
            return Err(Stop::Done);
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.flags.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    fn progress(&self) -> Box<dyn Progress> {
        if prompts::quiet() {
            Box::new(Silent)
        } else if io::stdout().is_tty() {
            Box::new(TerminalProgress::new())
        } else {
            Box::new(LogProgress)
        }
    }

    /// Generate fully in memory, then write and report.
    fn generate_output(&self, request: &GenerationRequest, path: PathBuf) -> Result<(), Stop> {
        let started = Instant::now();
        let mut rng = self.rng();
        let mut progress = self.progress();
        debug!(seeded = self.flags.seed.is_some(), path = %path.display(), "starting run");

        prompts::generating(request);
        let passwords = pass::generate(request, &mut rng, progress.as_mut())?;
        drop(progress);

        let written = output::write(&passwords, &path)?;
        prompts::summary(written, request.count(), &path, started.elapsed());
        Ok(())
    }
}
