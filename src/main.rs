use anyhow::Context as _;
use clap::Parser;
use colored::Colorize;

use fitcoach::cli::args::{Cli, Commands};
use fitcoach::cli::commands::{self, Context};
use fitcoach::error::FitcoachError;
use fitcoach::logging;

fn main() {
    match run() {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            let code = e
                .downcast_ref::<FitcoachError>()
                .map_or(1, FitcoachError::exit_code);
            std::process::exit(code);
        }
    }
}

fn run() -> anyhow::Result<String> {
    let cli = Cli::parse();

    // completions need neither a home directory nor logging
    if let Commands::Completions { shell, install } = cli.command {
        return Ok(commands::completions(shell, install)?);
    }

    let ctx = Context::load(cli.home, cli.output).context("failed to load settings")?;

    let full_screen = matches!(&cli.command, Commands::Play(args) if !ctx.plays_plain(args));
    let _guard = logging::init(&ctx.paths, cli.verbose, !full_screen)
        .context("failed to set up logging")?;

    let output = match cli.command {
        Commands::Play(args) => commands::play(&ctx, &args)?,
        Commands::Plan(args) => commands::plan(&ctx, args.command)?,
        Commands::Log(args) => commands::log(&ctx, args.command)?,
        Commands::Progress => commands::progress(&ctx)?,
        Commands::Completions { shell, install } => commands::completions(shell, install)?,
    };

    Ok(output)
}
