//! Interactive terminal driver for Red-Blue Nim.
//!
//! Plays one game per invocation: the human enters per-pile removal
//! counts, the computer answers with its search, and either side can be
//! configured to move first. Games can be saved mid-session and resumed
//! with `--load`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use redblue_nim::{GameSession, Move, Player, Variant};

#[derive(Parser)]
#[command(name = "redblue-nim")]
#[command(version, about = "Play Red-Blue Nim against a minimax computer player")]
struct Cli {
    /// Starting size of the red pile
    #[arg(long, default_value_t = 5)]
    red: u32,

    /// Starting size of the blue pile
    #[arg(long, default_value_t = 7)]
    blue: u32,

    /// Rule variant (changes the computer's tie-break preferences)
    #[arg(long, value_enum, default_value = "standard")]
    variant: VariantArg,

    /// Who moves first
    #[arg(long, value_enum, default_value = "computer")]
    first: FirstArg,

    /// How many plies the computer looks ahead
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Resume a saved game (overrides the setup flags)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["red", "blue", "variant", "first", "depth"])]
    load: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Standard,
    Misere,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Standard => Variant::Standard,
            VariantArg::Misere => Variant::Misere,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstArg {
    Human,
    Computer,
}

impl From<FirstArg> for Player {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Human => Player::Human,
            FirstArg::Computer => Player::Computer,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let session = match &cli.load {
        Some(path) => match GameSession::load(path) {
            Ok(session) => session,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => GameSession::new(
            cli.red,
            cli.blue,
            cli.variant.into(),
            cli.first.into(),
            cli.depth,
        ),
    };

    match run(session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut session: GameSession) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "Red-Blue Nim, {} rules. Computer searches {} plies ahead. First move: {}.",
        session.state().variant(),
        session.state().depth(),
        session.turn()
    );

    loop {
        println!(
            "Piles: {} red, {} blue (score {}).",
            session.state().red(),
            session.state().blue(),
            session.score()
        );

        if session.is_game_over() {
            println!("Game over! Final score: {}.", session.score());
            return Ok(());
        }

        match session.turn() {
            Player::Computer => {
                let reply = session.computer_turn();
                println!(
                    "Computer removes {} ({} nodes searched).",
                    reply.best_move, reply.nodes
                );
            }
            Player::Human => {
                let options: Vec<String> = session
                    .playable_moves()
                    .iter()
                    .map(|mv| format!("[{} {}]", mv.red, mv.blue))
                    .collect();
                print!("Your move (red blue), options {}: ", options.join(" "));
                io::stdout().flush()?;

                let Some(line) = lines.next() else {
                    // EOF on stdin ends the session.
                    println!();
                    return Ok(());
                };

                if !handle_command(&mut session, &line?) {
                    return Ok(());
                }
            }
        }
    }
}

/// Handle one line of human input. Returns `false` when the human quits.
fn handle_command(session: &mut GameSession, line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [] => {}
        ["quit"] | ["q"] => return false,
        ["save", path] => match session.save(path) {
            Ok(()) => println!("Game saved to {path}."),
            Err(err) => println!("error: {err}"),
        },
        [red, blue] => match (red.parse::<i64>(), blue.parse::<i64>()) {
            (Ok(red), Ok(blue)) => {
                if let Err(err) = session.human_move(Move::new(red, blue)) {
                    println!("error: {err}");
                }
            }
            _ => print_usage(),
        },
        _ => print_usage(),
    }

    true
}

fn print_usage() {
    println!("Enter two counts (e.g. `0 2`), `save FILE`, or `quit`.");
}
