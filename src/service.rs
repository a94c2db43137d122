//! Request handling in front of the table: the policy a transport applies
//! before and around the engine operations.

use crate::{
    error::TableError,
    game::{Action, Game},
    table::Table,
    view::LobbyView,
};

/// Plays `action` on game `id`, dealing it first if the id is new and the
/// table allows auto-deal. With no action the game is just returned.
pub fn play(table: &Table, id: u64, action: Option<&str>) -> Result<Game, TableError> {
    let action = action
        .filter(|code| !code.is_empty())
        .map(str::parse::<Action>)
        .transpose()?;

    table.play(id, action)
}

pub fn lobby(table: &Table) -> Result<LobbyView, TableError> {
    Ok(LobbyView {
        next_id: table.next_suggested_id()?,
        games: table.game_ids()?.into_iter().collect(),
    })
}
