use std::{fmt, str::FromStr};

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    dealer::play_dealer,
    deck::Deck,
    error::TableError,
    hand::Hand,
};

pub const UNIT_BET: i32 = 10;
pub const BLACKJACK_PAYOUT: i32 = 15;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Hit,
    Stand,
    Double,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Hit, Action::Stand, Action::Double];

    pub fn as_code(&self) -> &'static str {
        match self {
            Action::Hit => "hit",
            Action::Stand => "stand",
            Action::Double => "double",
        }
    }
}

impl FromStr for Action {
    type Err = TableError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.to_ascii_lowercase().as_str() {
            "hit" => Ok(Action::Hit),
            "stand" => Ok(Action::Stand),
            "double" => Ok(Action::Double),
            _ => Err(TableError::UnknownAction(code.to_string())),
        }
    }
}

/// One round of blackjack: the player's hand against the dealer's, dealt from a single deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub player: Hand,
    pub dealer: Hand,
    pub deck: Deck,
    pub double: bool,
    pub complete: bool,
    /// Only meaningful once `complete` is set.
    pub payout: i32,
}

impl Game {
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, TableError> {
        Self::deal_from(Deck::shuffled(rng), rng)
    }

    /// Deals player, dealer, player, dealer from the given deck.
    pub fn deal_from<R: Rng + ?Sized>(mut deck: Deck, rng: &mut R) -> Result<Self, TableError> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        player.add_card(deck.draw(rng)?);
        dealer.add_card(deck.draw(rng)?);
        player.add_card(deck.draw(rng)?);
        dealer.add_card(deck.draw(rng)?);

        Ok(Game {
            player,
            dealer,
            deck,
            double: false,
            complete: false,
            payout: 0,
        })
    }

    pub fn hit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), TableError> {
        if self.complete {
            return Ok(());
        }
        let card = self.deck.draw(rng)?;
        self.player.add_card(card);
        debug!("player draws {card}, total {}", self.player.total());

        if self.player.is_bust() {
            self.stand(rng)?;
        }
        Ok(())
    }

    pub fn stand<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), TableError> {
        if self.complete {
            return Ok(());
        }
        play_dealer(&mut self.dealer, &mut self.deck, rng)?;
        self.payout = payout(self);
        self.complete = true;
        info!(
            "settled: player {} dealer {} doubled {} payout {}",
            self.player.total(),
            self.dealer.total(),
            self.double,
            self.payout
        );
        Ok(())
    }

    pub fn double<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), TableError> {
        if self.complete {
            return Ok(());
        }
        self.double = true;
        self.hit(rng)?;
        self.stand(rng)
    }

    pub fn apply<R: Rng + ?Sized>(&mut self, action: Action, rng: &mut R) -> Result<(), TableError> {
        match action {
            Action::Hit => self.hit(rng),
            Action::Stand => self.stand(rng),
            Action::Double => self.double(rng),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]:[{}]",
            self.player.labels(false).join(" "),
            self.dealer.labels(!self.complete).join(" ")
        )
    }
}

/// Settlement amount for a unit bet. A two-card 21 pays the flat blackjack
/// amount before anything else is looked at.
pub fn payout(game: &Game) -> i32 {
    let p = game.player.total();
    let d = game.dealer.total();
    let stake = if game.double { 2 * UNIT_BET } else { UNIT_BET };

    if game.player.is_blackjack() {
        BLACKJACK_PAYOUT
    } else if p > 21 || (d <= 21 && d > p) {
        -stake
    } else if d > 21 || p > d {
        stake
    } else {
        0
    }
}
