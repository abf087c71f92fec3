//! Goat, cabbage and wolf river crossing.
//!
//! Each actor is on the first shore, travelling in the boat, or on the
//! second shore. Only one actor fits in the boat, and the goat may never be
//! left with the wolf or the cabbage while the remaining actor is away.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::space::{transition, StateSpace, Transitions};

/// Header line printed above rendered crossing traces
pub const HEADER: &str = "#  CGW";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    Cabbage,
    Goat,
    Wolf,
}

impl Actor {
    pub const ALL: [Actor; 3] = [Actor::Cabbage, Actor::Goat, Actor::Wolf];

    fn index(self) -> usize {
        match self {
            Actor::Cabbage => 0,
            Actor::Goat => 1,
            Actor::Wolf => 2,
        }
    }
}

/// Where an actor currently is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bank {
    #[default]
    Shore1,
    Travel,
    Shore2,
}

impl Bank {
    pub fn symbol(self) -> char {
        match self {
            Bank::Shore1 => '1',
            Bank::Travel => '~',
            Bank::Shore2 => '2',
        }
    }
}

/// Positions of all actors; the default puts everyone on the first shore.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actors([Bank; 3]);

impl Actors {
    pub fn new(cabbage: Bank, goat: Bank, wolf: Bank) -> Self {
        Self([cabbage, goat, wolf])
    }

    pub fn bank(&self, actor: Actor) -> Bank {
        self.0[actor.index()]
    }

    pub fn set(&mut self, actor: Actor, bank: Bank) {
        self.0[actor.index()] = bank;
    }

    /// Number of actors currently in the boat
    pub fn travelling(&self) -> usize {
        self.0.iter().filter(|&&bank| bank == Bank::Travel).count()
    }
}

impl fmt::Display for Actors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bank in self.0 {
            write!(f, "{}", bank.symbol())?;
        }
        Ok(())
    }
}

/// Moves available to every actor: board from a shore, or land on either shore.
pub fn transitions(actors: &Actors) -> Transitions<Actors> {
    let mut moves = Transitions::new();
    for actor in Actor::ALL {
        let targets: &[Bank] = match actors.bank(actor) {
            Bank::Shore1 | Bank::Shore2 => &[Bank::Travel],
            Bank::Travel => &[Bank::Shore1, Bank::Shore2],
        };
        for &target in targets {
            moves.push(transition(move |a: &mut Actors| a.set(actor, target)));
        }
    }
    moves
}

pub fn is_valid(actors: &Actors) -> bool {
    // only one passenger
    if actors.travelling() > 1 {
        return false;
    }
    let goat = actors.bank(Actor::Goat);
    // goat and wolf alone
    if goat == actors.bank(Actor::Wolf) && actors.bank(Actor::Cabbage) == Bank::Travel {
        return false;
    }
    // goat and cabbage alone
    if goat == actors.bank(Actor::Cabbage) && actors.bank(Actor::Wolf) == Bank::Travel {
        return false;
    }
    true
}

pub fn is_solved(actors: &Actors) -> bool {
    Actor::ALL
        .iter()
        .all(|&actor| actors.bank(actor) == Bank::Shore2)
}

/// Everyone on the first shore, searched breadth-first or depth-first.
pub fn state_space() -> StateSpace<Actors> {
    StateSpace::new(Actors::default(), transitions).with_invariant(is_valid)
}

/// Same puzzle where every move costs one, searched least-cost-first.
pub fn cost_state_space() -> StateSpace<Actors, u32> {
    StateSpace::with_cost(Actors::default(), 0, transitions, |_, cost| cost + 1)
        .with_invariant(is_valid)
}
