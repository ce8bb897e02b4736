//! Hisab CLI - a terminal front end for the grid calculator

mod input;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use hisab::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::input::{parse_line, Input, HELP};

#[derive(Parser)]
#[command(name = "hisab")]
#[command(
    author,
    version,
    about = "Simple Excel-like calculator with column formulas and zip sharing"
)]
struct Cli {
    /// Directory receiving exported zip archives
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Messaging host used in share links
    #[arg(short, long, default_value = "web.whatsapp.com")]
    endpoint: String,

    /// Read commands from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let options = ShareOptions {
        output_dir: cli.output_dir,
        endpoint: cli.endpoint,
        ..Default::default()
    };
    let mut session = Session::with_options(options);

    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script '{}'", path.display()))?;
            run(&mut session, BufReader::new(file), false)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                println!("Hisab calculator. Type 'help' for commands.");
            }
            run(&mut session, stdin.lock(), interactive)
        }
    }
}

/// Execute commands line by line until input ends or `quit`
fn run<R: BufRead>(session: &mut Session, reader: R, interactive: bool) -> Result<()> {
    let mut stdout = io::stdout();
    let mut lines = reader.lines();

    loop {
        if interactive {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;

        let input = match parse_line(&line) {
            Ok(input) => {
                debug!(?input, "parsed line");
                input
            }
            Err(e) => {
                eprintln!("Error: {:#}", e);
                continue;
            }
        };

        match input {
            Input::Nothing => {}
            Input::Quit => break,
            Input::Help => println!("{}", HELP),
            Input::Show { json: false } => print!("{}", render::table(session.grid())),
            Input::Show { json: true } => {
                println!("{}", render::json(session.grid()).context("Failed to encode grid")?)
            }
            Input::Menu(line) => {
                for (_, label) in hisab::context_menu(line) {
                    println!("  {}", label);
                }
            }
            Input::Run(command) => match session.execute(command) {
                Ok(outcome) => {
                    println!("{}", outcome.message());
                    if let Outcome::Exported(_) = outcome {
                        println!("Share it with 'share open', 'share keep' or 'share cancel'.");
                    }
                }
                Err(e) => eprintln!("Error: {}", e),
            },
        }
    }

    Ok(())
}
