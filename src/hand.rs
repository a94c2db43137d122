use serde::{Deserialize, Serialize};

use crate::deck::Rank;

/// Scores a hand as `(total, is_soft)`.
///
/// Non-aces are summed first. Each ace, in draw order, then adds 11 while the
/// running total is at most 10 (which makes the hand soft) and 1 otherwise.
pub fn hand_value(cards: &[Rank]) -> (u32, bool) {
    let mut total: u32 = cards
        .iter()
        .filter(|card| !card.is_ace())
        .map(|card| card.points())
        .sum();
    let mut soft = false;

    for _ in cards.iter().filter(|card| card.is_ace()) {
        if total <= 10 {
            total += 11;
            soft = true;
        } else {
            total += 1;
        }
    }

    (total, soft)
}

pub fn is_blackjack(cards: &[Rank]) -> bool {
    cards.len() == 2 && hand_value(cards).0 == 21
}

pub fn is_bust(cards: &[Rank]) -> bool {
    hand_value(cards).0 > 21
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    pub cards: Vec<Rank>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_card(&mut self, card: Rank) {
        self.cards.push(card);
    }

    pub fn value(&self) -> (u32, bool) {
        hand_value(&self.cards)
    }

    pub fn total(&self) -> u32 {
        self.value().0
    }

    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card labels in draw order; every card after the first is masked when `hide` is set.
    pub fn labels(&self, hide: bool) -> Vec<String> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if i == 0 || !hide {
                    card.label().to_string()
                } else {
                    "X".to_string()
                }
            })
            .collect()
    }
}

impl From<Vec<Rank>> for Hand {
    fn from(cards: Vec<Rank>) -> Self {
        Hand { cards }
    }
}

#[cfg(test)]
pub(crate) fn ranks(values: &[u8]) -> Vec<Rank> {
    values
        .iter()
        .map(|&v| Rank::new(v).expect("rank in 1..=13"))
        .collect()
}
