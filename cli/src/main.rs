mod cli;
mod interactive;
mod log;
mod publish;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let Cli {
        command,
        directory,
        log,
    } = Cli::parse();

    let result = match command {
        Some(Commands::Log(args)) => log::execute(args, directory),
        Some(Commands::Publish(args)) => publish::execute(args, directory),
        None => log::execute(log, directory),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
