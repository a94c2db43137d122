//! Session store: every game at the table, keyed by caller-chosen id.
//!
//! All access goes through one lock. Mutations run on a copy of the stored
//! game and are written back only when they succeed.

use std::{
    collections::{BTreeSet, HashMap},
    sync::{Mutex, MutexGuard},
};

use log::{info, warn};
use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    config::{RedealPolicy, TableConfig},
    error::TableError,
    game::{Action, Game},
};

struct Games {
    by_id: HashMap<u64, Game>,
    next_id: u64,
    rng: SmallRng,
}

pub struct Table {
    config: TableConfig,
    games: Mutex<Games>,
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Table {
            config,
            games: Mutex::new(Games {
                by_id: HashMap::new(),
                next_id: 0,
                rng,
            }),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    fn lock(&self) -> Result<MutexGuard<'_, Games>, TableError> {
        self.games.lock().map_err(|_| TableError::LockPoisoned)
    }

    pub fn deal(&self, id: u64) -> Result<Game, TableError> {
        let mut guard = self.lock()?;
        let games = &mut *guard;

        if let Some(existing) = games.by_id.get(&id) {
            match self.config.redeal {
                RedealPolicy::KeepExisting => return Ok(existing.clone()),
                RedealPolicy::Overwrite if !existing.complete => {
                    warn!("game {id}: redeal replaces a hand in progress");
                }
                RedealPolicy::Overwrite => {}
            }
        }

        let game = Game::deal(&mut games.rng)?;
        info!("game {id}: dealt {game}");
        games.by_id.insert(id, game.clone());
        Ok(game)
    }

    pub fn hit(&self, id: u64) -> Result<Game, TableError> {
        self.act(id, Action::Hit)
    }

    pub fn stand(&self, id: u64) -> Result<Game, TableError> {
        self.act(id, Action::Stand)
    }

    pub fn double(&self, id: u64) -> Result<Game, TableError> {
        self.act(id, Action::Double)
    }

    pub fn act(&self, id: u64, action: Action) -> Result<Game, TableError> {
        let mut guard = self.lock()?;
        let games = &mut *guard;

        let mut game = games
            .by_id
            .get(&id)
            .cloned()
            .ok_or(TableError::UnknownGame(id))?;
        game.apply(action, &mut games.rng)?;
        games.by_id.insert(id, game.clone());
        Ok(game)
    }

    /// Deals `id` first if it has no game and auto-deal is on, then applies
    /// `action`. Both steps happen under one lock.
    pub fn play(&self, id: u64, action: Option<Action>) -> Result<Game, TableError> {
        let mut guard = self.lock()?;
        let games = &mut *guard;

        let mut game = match games.by_id.get(&id) {
            Some(game) => game.clone(),
            None if self.config.auto_deal => {
                let game = Game::deal(&mut games.rng)?;
                info!("game {id}: first visit, dealt {game}");
                game
            }
            None => return Err(TableError::UnknownGame(id)),
        };
        if let Some(action) = action {
            game.apply(action, &mut games.rng)?;
        }
        games.by_id.insert(id, game.clone());
        Ok(game)
    }

    /// Current state of a game, or `None` if the id was never dealt.
    pub fn peek(&self, id: u64) -> Result<Option<Game>, TableError> {
        Ok(self.lock()?.by_id.get(&id).cloned())
    }

    /// Bumps the id counter and returns it. Nothing is reserved.
    pub fn next_suggested_id(&self) -> Result<u64, TableError> {
        let mut games = self.lock()?;
        games.next_id += 1;
        Ok(games.next_id)
    }

    pub fn game_ids(&self) -> Result<BTreeSet<u64>, TableError> {
        Ok(self.lock()?.by_id.keys().copied().collect())
    }
}

impl Default for Table {
    fn default() -> Self {
        Table::new(TableConfig::default())
    }
}
