//! Puzzle state model: entities, river sides, the safety rule, and the
//! one-crossing transition generator.
//!
//! A state is a complete assignment of every entity to a side of the river.
//! States are small `Copy` values with structural equality and hashing, so
//! they can be used directly as keys in the solver's parent map.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A side of the river.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// One of the four fixed puzzle entities. The farmer (index 0) is the only
/// entity that can cross on its own; everything else needs him in the boat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Farmer,
    Fox,
    Goose,
    Grain,
}

impl Entity {
    /// All entities, in state-vector index order.
    pub const ALL: [Entity; 4] = [Entity::Farmer, Entity::Fox, Entity::Goose, Entity::Grain];

    /// The entities the farmer can ferry, in index order.
    pub const CARGO: [Entity; 3] = [Entity::Fox, Entity::Goose, Entity::Grain];

    /// Position of this entity in the state vector.
    pub fn index(self) -> usize {
        match self {
            Entity::Farmer => 0,
            Entity::Fox => 1,
            Entity::Goose => 2,
            Entity::Grain => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Entity::Farmer => "farmer",
            Entity::Fox => "fox",
            Entity::Goose => "goose",
            Entity::Grain => "grain",
        }
    }
}

/// Pairs that must never be left together on a side the farmer is not on.
pub const UNSAFE_PAIRS: [(Entity, Entity); 2] =
    [(Entity::Fox, Entity::Goose), (Entity::Goose, Entity::Grain)];

/// Complete assignment of every entity to a river side. Index 0 is the
/// farmer; see [`Entity::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    pub sides: [Side; 4],
}

impl State {
    /// Everyone on the left bank.
    pub const START: State = State {
        sides: [Side::Left; 4],
    };

    /// Everyone on the right bank.
    pub const GOAL: State = State {
        sides: [Side::Right; 4],
    };

    /// Which side the given entity is on.
    pub fn side_of(&self, entity: Entity) -> Side {
        self.sides[entity.index()]
    }

    /// Copy of this state with the given entity moved to the other side.
    pub fn with_crossed(&self, entity: Entity) -> State {
        let mut sides = self.sides;
        sides[entity.index()] = sides[entity.index()].opposite();
        State { sides }
    }

    /// True if no constraint pair is stranded on the side the farmer is
    /// not on. The farmer's own side is always safe. Total over all 16
    /// states.
    pub fn is_safe(&self) -> bool {
        let unguarded = self.side_of(Entity::Farmer).opposite();
        for (a, b) in UNSAFE_PAIRS {
            if self.side_of(a) == unguarded && self.side_of(b) == unguarded {
                return false;
            }
        }
        true
    }

    /// All safe states reachable by exactly one crossing.
    ///
    /// The farmer crossing alone comes first, then farmer-plus-one-cargo
    /// moves in [`Entity::CARGO`] order, each restricted to cargo currently
    /// on the farmer's side. The order is deterministic and the candidates
    /// are pairwise distinct, so the result never contains duplicates.
    pub fn neighbors(&self) -> SmallVec<[State; 4]> {
        let mut result = SmallVec::new();
        let farmer_side = self.side_of(Entity::Farmer);

        let alone = self.with_crossed(Entity::Farmer);
        if alone.is_safe() {
            result.push(alone);
        }

        for cargo in Entity::CARGO {
            if self.side_of(cargo) == farmer_side {
                let crossed = self.with_crossed(Entity::Farmer).with_crossed(cargo);
                if crossed.is_safe() {
                    result.push(crossed);
                }
            }
        }

        result
    }

    /// Mirror image of this state with the bank labels swapped.
    pub fn mirrored(&self) -> State {
        let mut sides = self.sides;
        for side in &mut sides {
            *side = side.opposite();
        }
        State { sides }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(sides: [Side; 4]) -> State {
        State { sides }
    }

    #[test]
    fn test_start_and_goal_are_safe() {
        assert!(State::START.is_safe());
        assert!(State::GOAL.is_safe());
    }

    #[test]
    fn test_stranded_pairs_are_unsafe() {
        use Side::{Left, Right};

        // Farmer right, fox and goose left.
        assert!(!state([Right, Left, Left, Right]).is_safe());
        // Farmer left, goose and grain right.
        assert!(!state([Left, Left, Right, Right]).is_safe());
        // Fox and grain alone together is fine.
        assert!(state([Right, Left, Right, Left]).is_safe());
    }

    #[test]
    fn test_safety_is_mirror_symmetric() {
        // Exercise all 16 states: swapping bank labels everywhere must not
        // change the verdict.
        for bits in 0u8..16 {
            let sides = [
                if bits & 1 != 0 { Side::Right } else { Side::Left },
                if bits & 2 != 0 { Side::Right } else { Side::Left },
                if bits & 4 != 0 { Side::Right } else { Side::Left },
                if bits & 8 != 0 { Side::Right } else { Side::Left },
            ];
            let s = state(sides);
            assert_eq!(s.is_safe(), s.mirrored().is_safe());
        }
    }

    #[test]
    fn test_neighbors_are_safe_and_include_farmer() {
        for bits in 0u8..16 {
            let sides = [
                if bits & 1 != 0 { Side::Right } else { Side::Left },
                if bits & 2 != 0 { Side::Right } else { Side::Left },
                if bits & 4 != 0 { Side::Right } else { Side::Left },
                if bits & 8 != 0 { Side::Right } else { Side::Left },
            ];
            let s = state(sides);
            for n in s.neighbors() {
                assert!(n.is_safe());
                let changed: Vec<usize> = (0..4).filter(|&i| s.sides[i] != n.sides[i]).collect();
                assert!(changed.len() == 1 || changed.len() == 2);
                assert!(changed.contains(&0), "farmer must be part of every move");
            }
        }
    }

    #[test]
    fn test_start_has_only_the_goose_move() {
        // From the start, only farmer+goose leaves both banks safe.
        let neighbors = State::START.neighbors();
        assert_eq!(neighbors.len(), 1);
        assert_eq!(
            neighbors[0],
            State::START
                .with_crossed(Entity::Farmer)
                .with_crossed(Entity::Goose)
        );
    }

    #[test]
    fn test_neighbor_order_puts_farmer_alone_first() {
        use Side::{Left, Right};

        // Farmer and goose right, fox and grain left: farmer may return
        // alone or bring the goose back.
        let s = state([Right, Left, Right, Left]);
        let neighbors = s.neighbors();
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0], s.with_crossed(Entity::Farmer));
        assert_eq!(
            neighbors[1],
            s.with_crossed(Entity::Farmer).with_crossed(Entity::Goose)
        );
    }

    #[test]
    fn test_cargo_on_far_side_cannot_be_ferried() {
        use Side::{Left, Right};

        // Goose is opposite the farmer, so no move may touch it.
        let s = state([Left, Left, Right, Left]);
        for n in s.neighbors() {
            assert_eq!(n.side_of(Entity::Goose), Side::Right);
        }
    }
}
