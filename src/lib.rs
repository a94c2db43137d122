use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
mod logging;
pub mod service;
pub mod table;
pub mod view;

pub use config::{RedealPolicy, TableConfig};
pub use deck::{Deck, Rank, DECK_SIZE};
pub use error::TableError;
pub use game::{payout, Action, Game, BLACKJACK_PAYOUT, UNIT_BET};
pub use hand::{hand_value, Hand};
pub use table::Table;
pub use view::{GameView, LobbyView};

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

fn view(id: u64, game: Result<Game, TableError>) -> Result<JsValue, JsValue> {
    let game = game.map_err(|err| JsValue::from_str(&format!("Game {id}: {err}")))?;
    to_js(&GameView::new(id, &game))
}

/// A blackjack table exported to JavaScript. Each game is addressed by a numeric id.
#[wasm_bindgen]
pub struct BlackjackTable {
    table: Table,
}

#[wasm_bindgen]
impl BlackjackTable {
    #[wasm_bindgen(constructor)]
    pub fn new(config: &JsValue) -> Result<BlackjackTable, JsValue> {
        console_error_panic_hook::set_once();
        let config: TableConfig = if config.is_undefined() || config.is_null() {
            TableConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config.clone())
                .map_err(|err| JsValue::from_str(&format!("Invalid config: {err}")))?
        };
        logging::init(config.log_level);
        Ok(BlackjackTable {
            table: Table::new(config),
        })
    }

    pub fn deal(&self, id: u64) -> Result<JsValue, JsValue> {
        view(id, self.table.deal(id))
    }

    pub fn hit(&self, id: u64) -> Result<JsValue, JsValue> {
        view(id, self.table.hit(id))
    }

    pub fn stand(&self, id: u64) -> Result<JsValue, JsValue> {
        view(id, self.table.stand(id))
    }

    pub fn double(&self, id: u64) -> Result<JsValue, JsValue> {
        view(id, self.table.double(id))
    }

    /// Returns `undefined` when the id has no game.
    pub fn peek(&self, id: u64) -> Result<JsValue, JsValue> {
        match self.table.peek(id) {
            Ok(Some(game)) => to_js(&GameView::new(id, &game)),
            Ok(None) => Ok(JsValue::UNDEFINED),
            Err(err) => Err(JsValue::from_str(&err.to_string())),
        }
    }

    /// Deals on first visit, then applies the optional action ("hit", "stand", "double").
    pub fn play(&self, id: u64, action: Option<String>) -> Result<JsValue, JsValue> {
        view(id, service::play(&self.table, id, action.as_deref()))
    }

    #[wasm_bindgen(js_name = nextId)]
    pub fn next_id(&self) -> Result<u64, JsValue> {
        self.table
            .next_suggested_id()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    #[wasm_bindgen(js_name = gameIds)]
    pub fn game_ids(&self) -> Result<Vec<u64>, JsValue> {
        self.table
            .game_ids()
            .map(|ids| ids.into_iter().collect())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    pub fn lobby(&self) -> Result<JsValue, JsValue> {
        let lobby = service::lobby(&self.table).map_err(|err| JsValue::from_str(&err.to_string()))?;
        to_js(&lobby)
    }

    /// The game in its short text form, e.g. `[A 10]:[K X]`.
    pub fn describe(&self, id: u64) -> Result<Option<String>, JsValue> {
        self.table
            .peek(id)
            .map(|game| game.map(|game| game.to_string()))
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}
