//! CLI entry point for the river crossing solver.
//!
//! Usage:
//!   river-crossing [options]
//!
//! Options:
//!   --no-pause   Print all steps without waiting for Enter between moves
//!   --json       Emit the solution as JSON instead of the animation

mod render;
mod solver;
mod state;

use std::io;

use clap::Parser;
use serde::Serialize;

use render::{animate, describe_move};
use solver::shortest_path;
use state::State;

#[derive(Parser)]
#[command(name = "river-crossing")]
#[command(about = "BFS solver and console animator for the fox-goose-grain river crossing puzzle")]
#[command(version)]
struct Cli {
    /// Print all steps without waiting for Enter between moves
    #[arg(long)]
    no_pause: bool,

    /// Emit the solution as JSON instead of the animation
    #[arg(long)]
    json: bool,
}

/// Output format for the --json mode
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolutionOutput {
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    states: Option<Vec<State>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    crossings: Option<Vec<String>>,
    states_expanded: usize,
}

fn main() {
    let cli = Cli::parse();

    let result = shortest_path(State::START, State::GOAL);

    if cli.json {
        let output = SolutionOutput {
            found: result.path.is_some(),
            moves: result.move_count(),
            crossings: result.path.as_ref().map(|path| {
                path.windows(2)
                    .map(|pair| describe_move(&pair[0], &pair[1]))
                    .collect()
            }),
            states: result.path.clone(),
            states_expanded: result.states_expanded,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return;
    }

    match result.path {
        None => println!("No solution found."),
        Some(path) => {
            println!("Found solution in {} moves.\n", path.len() - 1);

            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut stdout = io::stdout();
            animate(&path, !cli.no_pause, &mut input, &mut stdout)
                .expect("Failed to write to stdout");
        }
    }
}
