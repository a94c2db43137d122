use serde::Serialize;

use crate::game::{Action, Game};

/// What a caller is allowed to see of a game.
///
/// The dealer's cards after the first stay masked as `"X"` until the game is
/// complete, and so does the dealer total. The payout only appears once settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: u64,
    pub player: Vec<String>,
    pub dealer: Vec<String>,
    pub player_total: u32,
    pub player_soft: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealer_total: Option<u32>,
    pub doubled: bool,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout: Option<i32>,
    /// Actions the caller may still send; empty once settled.
    pub actions: Vec<&'static str>,
}

impl GameView {
    pub fn new(id: u64, game: &Game) -> Self {
        let hide = !game.complete;
        let (player_total, player_soft) = game.player.value();
        GameView {
            id,
            player: game.player.labels(false),
            dealer: game.dealer.labels(hide),
            player_total,
            player_soft,
            dealer_total: (!hide).then(|| game.dealer.total()),
            doubled: game.double,
            complete: game.complete,
            payout: game.complete.then_some(game.payout),
            actions: if game.complete {
                Vec::new()
            } else {
                Action::ALL.iter().map(Action::as_code).collect()
            },
        }
    }
}

/// Listing of the table: a fresh id to start a new game, and every existing game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyView {
    pub next_id: u64,
    pub games: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{deck::Deck, hand::{ranks, Hand}};

    fn game(complete: bool) -> Game {
        Game {
            player: Hand::from(ranks(&[1, 6, 3])),
            dealer: Hand::from(ranks(&[12, 2, 9])),
            deck: Deck::default(),
            double: false,
            complete,
            payout: if complete { 10 } else { 0 },
        }
    }

    #[test]
    fn test_in_progress_masks_dealer() {
        let view = GameView::new(4, &game(false));
        assert_eq!(view.player, vec!["A", "6", "3"]);
        assert_eq!(view.dealer, vec!["Q", "X", "X"]);
        assert_eq!(view.player_total, 20);
        assert!(view.player_soft);
        assert_eq!(view.dealer_total, None);
        assert_eq!(view.payout, None);
        assert_eq!(view.actions, vec!["hit", "stand", "double"]);
    }

    #[test]
    fn test_complete_reveals_dealer() {
        let view = GameView::new(4, &game(true));
        assert_eq!(view.dealer, vec!["Q", "2", "9"]);
        assert_eq!(view.dealer_total, Some(21));
        assert_eq!(view.payout, Some(10));
        assert!(view.actions.is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(GameView::new(2, &game(false))).unwrap();
        assert_eq!(json["playerTotal"], 20);
        assert!(json.get("dealerTotal").is_none());
        assert!(json.get("payout").is_none());
    }
}
