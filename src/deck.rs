use std::fmt;

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::error::TableError;

const LABELS: [&str; 13] = ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"];

/// Card identity without suit: 1 is the ace, 11 to 13 are the faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(13);

    pub fn new(rank: u8) -> Option<Self> {
        (1..=13).contains(&rank).then_some(Rank(rank))
    }

    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    pub fn is_ace(self) -> bool {
        self.0 == 1
    }

    /// Points for a non-ace card. Aces are scored by the hand, not the card.
    pub fn points(self) -> u32 {
        match self.0 {
            11 | 12 | 13 => 10,
            n => n as u32,
        }
    }

    pub fn label(self) -> &'static str {
        LABELS[(self.0 - 1) as usize]
    }
}

impl TryFrom<u8> for Rank {
    type Error = TableError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Rank::new(rank).ok_or(TableError::InvalidRank(rank))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const DECK_SIZE: usize = 52;

/// The undealt remainder of a single 52-card deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Rank>,
}

impl Deck {
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::all() {
            for _ in 0..4 {
                cards.push(rank);
            }
        }
        cards.shuffle(rng);
        Deck { cards }
    }

    pub fn from_cards(cards: Vec<Rank>) -> Self {
        Deck { cards }
    }

    /// Removes a uniformly chosen card. The remaining cards keep their order.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Rank, TableError> {
        if self.cards.is_empty() {
            return Err(TableError::EmptyDeck);
        }
        let index = rng.gen_range(0..self.cards.len());
        Ok(self.cards.remove(index))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }
}
