//! Command-line front end: flags in, one generation run, exit code out.

mod context;
mod flags;
mod help;
mod parse;
mod prompts;

pub use context::{Context, Stop};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut context = match Context::new(&args) {
        Ok(context) => context,
        Err(e) => {
            crate::logging::init(false);
            prompts::error(&e.to_string());
            prompts::error("Try --help for usage");
            return 1;
        }
    };

    match context.run() {
        Ok(()) | Err(Stop::Done) => 0,
        Err(Stop::Args(e)) => {
            prompts::error(&e.to_string());
            prompts::error("Try --help for usage");
            1
        }
        Err(Stop::Failed(e)) => {
            prompts::error(&e.to_string());
            1
        }
    }
}
