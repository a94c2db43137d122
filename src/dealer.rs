use log::debug;
use rand::Rng;

use crate::{deck::Deck, error::TableError, hand::Hand};

/// Dealer hits below 17 and on soft 17, stands on hard 17 and above.
pub fn must_draw(total: u32, soft: bool) -> bool {
    total < 17 || (total == 17 && soft)
}

pub fn play_dealer<R: Rng + ?Sized>(
    hand: &mut Hand,
    deck: &mut Deck,
    rng: &mut R,
) -> Result<(), TableError> {
    loop {
        let (total, soft) = hand.value();
        if !must_draw(total, soft) {
            return Ok(());
        }
        let card = deck.draw(rng)?;
        debug!("dealer draws {card} on {total}{}", if soft { " soft" } else { "" });
        hand.add_card(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{hand_value, ranks};
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_soft_17_draws() {
        let (total, soft) = hand_value(&ranks(&[6, 1]));
        assert!(must_draw(total, soft));
    }

    #[test]
    fn test_hard_17_stands() {
        let (total, soft) = hand_value(&ranks(&[10, 7]));
        assert!(!must_draw(total, soft));
    }

    #[test]
    fn test_thresholds() {
        assert!(must_draw(16, false));
        assert!(must_draw(12, true));
        assert!(!must_draw(18, true));
        assert!(!must_draw(22, false));
    }

    #[test]
    fn test_play_dealer_draws_on_soft_17() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut hand = Hand::from(ranks(&[6, 1]));
        let mut deck = Deck::from_cards(ranks(&[10]));
        play_dealer(&mut hand, &mut deck, &mut rng).unwrap();
        // A,6 soft 17 plus a ten is hard 17
        assert_eq!(hand.cards, ranks(&[6, 1, 10]));
        assert_eq!(hand.value(), (17, false));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_play_dealer_stands_on_hard_17() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut hand = Hand::from(ranks(&[10, 7]));
        let mut deck = Deck::from_cards(ranks(&[2, 3]));
        play_dealer(&mut hand, &mut deck, &mut rng).unwrap();
        assert_eq!(hand.len(), 2);
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_play_dealer_stops_after_bust() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut hand = Hand::from(ranks(&[10, 6]));
        let mut deck = Deck::from_cards(ranks(&[13]));
        play_dealer(&mut hand, &mut deck, &mut rng).unwrap();
        assert_eq!(hand.total(), 26);
    }

    #[test]
    fn test_play_dealer_empty_deck() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut hand = Hand::from(ranks(&[2, 3]));
        let mut deck = Deck::default();
        assert_eq!(
            play_dealer(&mut hand, &mut deck, &mut rng),
            Err(TableError::EmptyDeck)
        );
    }
}
