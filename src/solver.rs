//! Breadth-first shortest-path search over the puzzle state graph.
//!
//! The graph is implicit: edges are whatever [`State::neighbors`] yields.
//! BFS visits states in non-decreasing distance order and records each
//! state's parent exactly once (first discovery wins), so the reconstructed
//! path is a shortest one. The whole space has at most 16 states, so the
//! search always terminates quickly.

use std::collections::{HashMap, VecDeque};

use crate::state::State;

/// Result of one search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Shortest start-to-goal state sequence, or `None` if the goal is
    /// unreachable. A reachable goal always yields a path of at least one
    /// state; `start == goal` yields exactly `[start]`.
    pub path: Option<Vec<State>>,
    /// Number of states dequeued before the search finished.
    pub states_expanded: usize,
}

impl SearchResult {
    /// Number of crossings in the solution, if one was found.
    pub fn move_count(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}

/// Find a shortest sequence of crossings from `start` to `goal`.
///
/// The parent map and work queue live only for the duration of this call.
/// An unreachable goal is an expected outcome, reported as `path: None`
/// rather than an error.
pub fn shortest_path(start: State, goal: State) -> SearchResult {
    let mut queue: VecDeque<State> = VecDeque::new();
    let mut parent: HashMap<State, Option<State>> = HashMap::new();
    let mut states_expanded = 0;

    queue.push_back(start);
    parent.insert(start, None);

    while let Some(current) = queue.pop_front() {
        states_expanded += 1;

        if current == goal {
            return SearchResult {
                path: Some(reconstruct(&parent, goal)),
                states_expanded,
            };
        }

        for next in current.neighbors() {
            if !parent.contains_key(&next) {
                parent.insert(next, Some(current));
                queue.push_back(next);
            }
        }
    }

    SearchResult {
        path: None,
        states_expanded,
    }
}

/// Walk the parent chain from `goal` back to the start and reverse it.
fn reconstruct(parent: &HashMap<State, Option<State>>, goal: State) -> Vec<State> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&Some(prev)) = parent.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
