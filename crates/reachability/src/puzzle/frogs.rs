//! Leaping frogs.
//!
//! Green frogs start on the left, brown frogs on the right, with one empty
//! stone between them. Green frogs only move right and brown frogs only move
//! left, either onto the adjacent empty stone or by jumping over one frog.
//! The puzzle is solved when the two groups have swapped sides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::space::{transition, StateSpace, Transitions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frog {
    Empty,
    Green,
    Brown,
}

impl Frog {
    pub fn symbol(self) -> char {
        match self {
            Frog::Empty => '_',
            Frog::Green => 'G',
            Frog::Brown => 'B',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Frog> {
        match symbol {
            '_' => Some(Frog::Empty),
            'G' => Some(Frog::Green),
            'B' => Some(Frog::Brown),
            _ => None,
        }
    }
}

/// A row of stones, written as `GG_BB`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stones(Vec<Frog>);

impl Stones {
    pub fn new(stones: Vec<Frog>) -> Self {
        Self(stones)
    }

    /// Start and goal rows for `frogs` frogs of each colour.
    pub fn puzzle(frogs: usize) -> (Stones, Stones) {
        let row = |left: Frog, right: Frog| {
            let mut stones = vec![left; frogs];
            stones.push(Frog::Empty);
            stones.extend(std::iter::repeat(right).take(frogs));
            Stones(stones)
        };
        (row(Frog::Green, Frog::Brown), row(Frog::Brown, Frog::Green))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Frog] {
        &self.0
    }

    /// Index of the first empty stone
    pub fn empty_stone(&self) -> Option<usize> {
        self.0.iter().position(|&frog| frog == Frog::Empty)
    }

    fn leap(&mut self, from: usize, to: usize) {
        self.0[to] = self.0[from];
        self.0[from] = Frog::Empty;
    }
}

impl fmt::Display for Stones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frog in &self.0 {
            write!(f, "{}", frog.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Stones {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(index, found)| {
                Frog::from_symbol(found).ok_or(PuzzleError::InvalidStone { found, index })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Stones)
    }
}

/// Moves that fill the empty stone: green frogs from the left, brown frogs
/// from the right, each by a step or a jump over one frog.
pub fn transitions(stones: &Stones) -> Transitions<Stones> {
    let mut moves = Transitions::new();
    if stones.len() < 2 {
        return moves;
    }
    let Some(empty) = stones.empty_stone() else {
        return moves;
    };
    let row = stones.as_slice();

    for distance in 1..=2 {
        if empty >= distance && row[empty - distance] == Frog::Green {
            let from = empty - distance;
            moves.push(transition(move |s: &mut Stones| s.leap(from, empty)));
        }
    }
    for distance in 1..=2 {
        if empty + distance < row.len() && row[empty + distance] == Frog::Brown {
            let from = empty + distance;
            moves.push(transition(move |s: &mut Stones| s.leap(from, empty)));
        }
    }
    moves
}

pub fn state_space(start: Stones) -> StateSpace<Stones> {
    StateSpace::new(start, transitions)
}
