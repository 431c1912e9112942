//! Throwdown CLI
//!
//! Interactive front end for the provably fair throw game. Collects the
//! throw labels from the command line, then drives the round state
//! machine: publish the commitment tag, prompt for a move, show the
//! result and the revealed HMAC key.

use anyhow::Context;
use clap::Parser;
use dialoguer::Input;
use rand::rngs::OsRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use throwdown::core::rules;
use throwdown::{GameSession, Outcome, RoundReport, SessionPhase, ThrowSet, VERSION};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "throwdown",
    version,
    about = "Provably fair generalized rock-paper-scissors",
    arg_required_else_help = true
)]
struct Args {
    /// Throw labels in cyclic order: an odd number (3 or more) of unique names.
    #[arg(required = true)]
    throws: Vec<String>,
}

/// What the player typed at the prompt.
enum Choice {
    Throw(usize),
    Help,
    Quit,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so game text on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let throws = ThrowSet::new(args.throws).context("invalid throw configuration")?;

    info!(version = VERSION, throws = throws.len(), "session starting");
    run(GameSession::new(throws, OsRng))
}

/// Drive the session state machine until the player leaves.
fn run(mut session: GameSession<OsRng>) -> anyhow::Result<()> {
    loop {
        match session.phase() {
            SessionPhase::RoundComplete => {
                let tag = session.start_round()?;
                println!("HMAC: {}", hex::encode(tag));
            }
            SessionPhase::AwaitingMove => {
                print_menu(session.throws());
                match prompt(session.throws().len())? {
                    Choice::Throw(index) => {
                        if let Some(throw) = session.throws().throw(index) {
                            let report = session.resolve(throw)?;
                            print_report(session.throws(), &report);
                        }
                    }
                    Choice::Help => {
                        let matrix = rules::build(session.throws());
                        println!("{}", matrix.render(session.throws()));
                    }
                    Choice::Quit => session.end(),
                }
            }
            SessionPhase::Ended => break,
        }
    }
    info!(rounds = session.rounds_played(), "session over");
    Ok(())
}

/// Print the numbered throw menu.
fn print_menu(throws: &ThrowSet) {
    println!("Available throws:");
    for throw in throws.throws() {
        println!("{} - {}", throw.index() + 1, throws.label(throw));
    }
    println!("0 - exit");
    println!("? - help");
}

/// Ask for a move until the player enters something meaningful.
fn prompt(count: usize) -> anyhow::Result<Choice> {
    loop {
        let entry: String = Input::new()
            .with_prompt("Choose a throw")
            .allow_empty(true)
            .interact_text()
            .context("reading the player's move")?;
        match entry.trim() {
            "?" => return Ok(Choice::Help),
            "0" => return Ok(Choice::Quit),
            other => match other.parse::<usize>() {
                Ok(pick) if (1..=count).contains(&pick) => return Ok(Choice::Throw(pick - 1)),
                _ => println!("Enter a number from the menu, 0 to exit, or ? for help"),
            },
        }
    }
}

/// Show the round result and the reveal needed to audit it.
fn print_report(throws: &ThrowSet, report: &RoundReport) {
    println!("Your move: {}", throws.label(report.player));
    println!("Computer move: {}", throws.label(report.opponent));
    match report.outcome {
        Outcome::Win => println!("Won!"),
        Outcome::Lose => println!("Lost!"),
        Outcome::Draw => println!("Draw!"),
    }
    println!("HMAC key: {}", hex::encode(report.reveal.secret));
}
