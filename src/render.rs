//! Text rendering of solution paths: move descriptions, bank listings, and
//! the step-by-step console animation.

use std::io::{self, BufRead, Write};

use crate::state::{Entity, Side, State};

/// Name the entities that crossed between two consecutive states.
///
/// A valid adjacent pair always differs in one or two positions; identical
/// states (only the degenerate single-state path) render as "no move".
pub fn describe_move(a: &State, b: &State) -> String {
    let moved: Vec<&str> = Entity::ALL
        .iter()
        .filter(|e| a.side_of(**e) != b.side_of(**e))
        .map(|e| e.name())
        .collect();

    if moved.is_empty() {
        "no move".to_string()
    } else {
        moved.join(" & ")
    }
}

/// Comma-separated names of the entities on the given side, or an em dash
/// when the side is empty.
pub fn format_bank(state: &State, side: Side) -> String {
    let names: Vec<&str> = Entity::ALL
        .iter()
        .filter(|e| state.side_of(**e) == side)
        .map(|e| e.name())
        .collect();

    if names.is_empty() {
        "—".to_string()
    } else {
        names.join(", ")
    }
}

/// Two bank lines plus a separator, matching the console layout:
///
/// ```text
/// Left : farmer, fox
/// Right: goose, grain
/// ------------------------------
/// ```
pub fn format_state(state: &State) -> String {
    format!(
        "Left : {}\nRight: {}\n{}\n",
        format_bank(state, Side::Left),
        format_bank(state, Side::Right),
        "-".repeat(30)
    )
}

/// Replay the path step by step on `out`, naming each crossing. With
/// `pause` set, block on a line from `input` before showing the next step.
pub fn animate<R: BufRead, W: Write>(
    path: &[State],
    pause: bool,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    for (i, state) in path.iter().enumerate() {
        writeln!(out, "Step {}:", i)?;
        write!(out, "{}", format_state(state))?;
        if i + 1 < path.len() {
            writeln!(out, "Move: {}", describe_move(state, &path[i + 1]))?;
            if pause {
                write!(out, "Press Enter for next move...")?;
                out.flush()?;
                let mut line = String::new();
                input.read_line(&mut line)?;
            }
        }
    }
    Ok(())
}
