use std::env;

mod cli;
mod error;
mod exits;
mod logging;
mod pass;
mod settings;
mod terminal;

fn main() {
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}
