mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, render, CheckArgs, RenderArgs};

/// Sketchpad CLI - compile and preview editable components
#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a component source file for compile errors
    Check(CheckArgs),

    /// Compile, render once, and print the serialized result
    Render(RenderArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check(args) => check(args),
        Command::Render(args) => render(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
