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
//! A computer player that shoots at random.
use log::debug;
use rand::{seq::IteratorRandom, Rng};
use thiserror::Error;

use crate::{
    board::{Grid, GuessKind, GuessResult, ShotError},
    matrix::Coordinate,
};

/// Error returned when the computer player cannot take its turn.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum AiError {
    /// Every cell of the grid has already been shot.
    #[error("no cells left to shoot")]
    NoLegalMoves,
    /// The chosen shot was rejected by the grid.
    #[error(transparent)]
    Shot(#[from] ShotError),
}

/// Picks uniformly among the cells of a grid that have not been shot yet.
#[derive(Debug, Clone)]
pub struct RandomAi<R> {
    rng: R,
}

impl<R: Rng> RandomAi<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Choose a cell to shoot without shooting it. Returns `None` if no cell is left.
    pub fn choose(&mut self, grid: &Grid) -> Option<Coordinate> {
        grid.coordinates_matching(GuessKind::Unset)
            .choose(&mut self.rng)
    }

    /// Take a turn: shoot a random unset cell of `grid`.
    pub fn act(&mut self, grid: &mut Grid) -> Result<GuessResult, AiError> {
        let target = self.choose(grid).ok_or(AiError::NoLegalMoves)?;
        debug!("computer shoots at {}", target);
        Ok(grid.shoot(target.x, target.y)?)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        board::{Dimensions, Opponent},
        ships::Ship,
    };

    #[test]
    fn shoots_every_cell_once_then_stops() {
        let opponent = Opponent::new(Dimensions::new(3, 2), vec![Ship::new(0, 0, 0, 1).unwrap()])
            .unwrap();
        let mut grid = Grid::new(opponent);
        let mut ai = RandomAi::new(StdRng::seed_from_u64(11));
        for remaining in (0..6).rev() {
            ai.act(&mut grid).unwrap();
            assert_eq!(grid.unset_count(), remaining);
        }
        assert!(grid.is_finished());
        assert_eq!(ai.choose(&grid), None);
        assert_eq!(ai.act(&mut grid), Err(AiError::NoLegalMoves));
    }
}
