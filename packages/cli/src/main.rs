mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{new_page, render, validate, NewPageArgs, RenderArgs, ValidateArgs};

/// Bistro CLI - page builder tooling for the restaurant site
#[derive(Parser, Debug)]
#[command(name = "bistro")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a page JSON file to HTML against the seeded catalog
    Render(RenderArgs),

    /// Check a page JSON file against the model invariants
    Validate(ValidateArgs),

    /// Create a fresh draft page JSON file
    NewPage(NewPageArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render(args) => render(args).await,
        Command::Validate(args) => validate(args),
        Command::NewPage(args) => new_page(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
