mod app;
mod cli;
mod config;
mod consts;
mod error;
mod interactive;
mod journal;
mod output;
mod utils;
mod vcs;

use clap::{CommandFactory, Parser};

use app::{CommandContext, run_action};
use cli::{Action, Cli, parse_action};
use config::Config;
use utils::init_logging;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    init_logging(cli.debug);
    if let Some(path) = &config.loaded_from {
        log::debug!("Loaded config from {}", path.display());
    }

    let action = parse_action(&cli);
    if action == Action::Help {
        let _ = Cli::command().print_help();
        println!();
        return;
    }

    let result = CommandContext::new(&cli).and_then(|ctx| run_action(&ctx, action));
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
