// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Implementation of the game as a whole.
//!
//! A [`Game`] is an ordered list of [`Grid`]s, one per player being shot at. The grids
//! are only changed through [`Grid::shoot`]; the game itself just answers whether anyone
//! has been defeated. [`GameConfig`] describes how to build one.

#[cfg(feature = "rng_gen")]
use rand::Rng;
use thiserror::Error;

use crate::board::{Grid, ValidationError};
#[cfg(feature = "rng_gen")]
use crate::board::Opponent;

pub use self::config::{GameConfig, DEFAULT_SHIP_SIZES};

mod config;

/// Error returned when a [`Game`] cannot be built.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum GameError {
    /// A game needs at least one grid.
    #[error("a game needs at least one grid")]
    NoGrids,
    /// A random layout could not be generated.
    #[error("could not generate a layout: {0}")]
    Layout(#[from] ValidationError),
}

/// Aggregate of the grids of all players. All grids are expected to share the same
/// dimensions; this is not checked.
#[derive(Debug)]
pub struct Game {
    grids: Vec<Grid>,
}

impl Game {
    /// Build a game from the given grids. Fails if there are none.
    pub fn new(grids: Vec<Grid>) -> Result<Self, GameError> {
        if grids.is_empty() {
            Err(GameError::NoGrids)
        } else {
            Ok(Self { grids })
        }
    }

    /// Build a game of `players` grids, each with an independent random layout drawn from
    /// `rng` according to `config`.
    #[cfg(feature = "rng_gen")]
    pub fn random<R: Rng + ?Sized>(
        config: &GameConfig,
        players: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let grids = (0..players)
            .map(|_| {
                Opponent::random(config.dimensions, &config.ship_sizes, rng).map(Grid::new)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(grids)
    }

    /// Number of columns of the first grid.
    pub fn columns(&self) -> i32 {
        self.grids[0].columns()
    }

    /// Number of rows of the first grid.
    pub fn rows(&self) -> i32 {
        self.grids[0].rows()
    }

    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }

    /// Get the grid with the given index, if any.
    pub fn grid(&self, index: usize) -> Option<&Grid> {
        self.grids.get(index)
    }

    /// Get the grid with the given index for shooting, if any.
    pub fn grid_mut(&mut self, index: usize) -> Option<&mut Grid> {
        self.grids.get_mut(index)
    }

    /// Returns true once any grid has all its ships sunk.
    pub fn is_finished(&self) -> bool {
        self.grids.iter().any(Grid::is_finished)
    }

    /// Index of the first grid whose ships are all sunk, if any. That grid's owner lost.
    pub fn finished_grid(&self) -> Option<usize> {
        self.grids.iter().position(Grid::is_finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::{Dimensions, Opponent},
        ships::Ship,
    };

    fn grid(ships: Vec<Ship>) -> Grid {
        Grid::new(Opponent::new(Dimensions::new(4, 4), ships).unwrap())
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Game::new(Vec::new()).unwrap_err(), GameError::NoGrids);
    }

    #[test]
    fn finishes_when_any_grid_is_done() {
        let mut game = Game::new(vec![
            grid(vec![Ship::new(0, 0, 0, 1).unwrap()]),
            grid(vec![Ship::new(3, 3, 3, 3).unwrap()]),
        ])
        .unwrap();
        assert_eq!((game.columns(), game.rows()), (4, 4));
        assert_eq!(game.grids().len(), 2);
        assert!(!game.is_finished());

        game.grid_mut(1).unwrap().shoot(3, 3).unwrap();
        assert!(game.is_finished());
        assert_eq!(game.finished_grid(), Some(1));
        assert!(game.grid(0).map_or(false, |g| !g.is_finished()));
        assert!(game.grid_mut(2).is_none());
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn random_game() {
        use rand::{rngs::StdRng, SeedableRng};

        let config = GameConfig::default();
        let game = Game::random(&config, 2, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(game.grids().len(), 2);
        for grid in game.grids() {
            assert_eq!(grid.opponent().ships().len(), 5);
        }
        assert_eq!(
            Game::random(&config, 0, &mut StdRng::seed_from_u64(5)).unwrap_err(),
            GameError::NoGrids
        );
    }
}
